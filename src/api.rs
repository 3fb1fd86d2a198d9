//! # Public API
//!
//! Entry points for turning chord progressions into MIDI files and for
//! transposing progressions.
//!
//! ## Functions
//!
//! - [`generate_midi()`] - Render a [`MidiRequest`] to Standard MIDI File bytes
//! - [`generate_midi_from_json()`] - Same, from a JSON request body
//! - [`generate_midi_from_yaml()`] - Same, from a YAML (or JSON) request file
//! - [`transpose_chords()`] - Move a list of chord names from one key to another
//!
//! ## Typical Usage
//!
//! ```rust
//! use chordmidi::{generate_midi, MidiRequest};
//!
//! let request = MidiRequest::new(["C", "Am", "F", "G"])
//!     .pattern("pop-strum")
//!     .tempo(96);
//!
//! let bytes = generate_midi(request)?;
//! assert_eq!(&bytes[0..4], b"MThd");
//! # Ok::<(), chordmidi::MidiError>(())
//! ```
//!
//! ## Fingerings
//!
//! When the caller knows the exact fingering being shown, pass the fret
//! positions and the instrument's open-string notes; the MIDI then matches
//! the chord diagram instead of a generic voicing.
//!
//! ```rust
//! use chordmidi::{generate_midi, MidiRequest};
//!
//! let c_shape = ["x", "3", "2", "0", "1", "0"].map(String::from).to_vec();
//! let request = MidiRequest::new(["C"])
//!     .fingerings(vec![c_shape], vec![40, 45, 50, 55, 59, 64]);
//!
//! let bytes = generate_midi(request)?;
//! # Ok::<(), chordmidi::MidiError>(())
//! ```

use crate::chord::transpose_progression;
use crate::request::{MidiRequest, TransposeRequest, TransposeResponse, TransposedChord};
use crate::sequencer::render;
use crate::MidiError;

/// Render a chord progression to a Standard MIDI File.
///
/// Missing or out-of-range settings are defaulted (see
/// [`MidiRequest::normalized`]). Unknown chords and patterns never fail; they
/// fall back to C major and `whole` respectively.
///
/// # Errors
/// Returns [`MidiError::EmptyProgression`] if the request has no chords.
pub fn generate_midi(request: MidiRequest) -> Result<Vec<u8>, MidiError> {
    if request.chords.is_empty() {
        return Err(MidiError::EmptyProgression);
    }
    let request = request.normalized();
    let bytes = render(&request);

    log::info!(
        "rendered {} chords as {:?} at {} bpm ({} bytes)",
        request.chords.len(),
        request.pattern,
        request.tempo,
        bytes.len()
    );
    Ok(bytes)
}

/// Decode a JSON request body and render it.
///
/// # Errors
/// Returns [`MidiError::InvalidRequest`] if the body does not decode, or
/// [`MidiError::EmptyProgression`] if it has no chords.
pub fn generate_midi_from_json(body: &str) -> Result<Vec<u8>, MidiError> {
    let request: MidiRequest =
        serde_json::from_str(body).map_err(|e| MidiError::InvalidRequest(e.to_string()))?;
    generate_midi(request)
}

/// Decode a YAML request document and render it.
///
/// YAML is a superset of JSON, so JSON request files are accepted too.
///
/// # Errors
/// Same as [`generate_midi_from_json`].
pub fn generate_midi_from_yaml(document: &str) -> Result<Vec<u8>, MidiError> {
    let request: MidiRequest =
        serde_yaml::from_str(document).map_err(|e| MidiError::InvalidRequest(e.to_string()))?;
    generate_midi(request)
}

/// Transpose every chord in the request from `from_key` to `to_key`.
///
/// Keys that are not note names give a distance of 0, and chords without a
/// recognizable root pass through unchanged.
///
/// # Example
/// ```rust
/// use chordmidi::{transpose_chords, TransposeRequest};
///
/// let response = transpose_chords(&TransposeRequest {
///     from_key: "C".to_string(),
///     to_key: "G".to_string(),
///     chords: vec!["C".to_string(), "Am".to_string(), "F".to_string()],
/// });
///
/// assert_eq!(response.semitones, 7);
/// assert_eq!(response.results[1].transposed, "Em");
/// assert_eq!(response.results[2].transposed, "C");
/// ```
pub fn transpose_chords(request: &TransposeRequest) -> TransposeResponse {
    let (semitones, pairs) =
        transpose_progression(&request.from_key, &request.to_key, &request.chords);
    let results = pairs
        .into_iter()
        .map(|(original, transposed)| TransposedChord { original, transposed })
        .collect();

    TransposeResponse { semitones, results }
}
