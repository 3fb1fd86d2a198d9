//! Request and response types
//!
//! These mirror the JSON bodies of the chord player's `/api/midi` and
//! `/api/transpose` endpoints, so the same documents work for the library,
//! the CLI and any HTTP binding in front of it.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parameters for rendering a chord progression to MIDI.
///
/// Numeric fields left at zero (or out of range) are replaced with defaults by
/// [`MidiRequest::normalized`].
///
/// # Example
/// ```
/// use chordmidi::MidiRequest;
///
/// let request: MidiRequest = serde_json::from_str(
///     r#"{"chords": ["C", "Am", "F", "G"], "pattern": "pop-strum"}"#,
/// ).unwrap();
/// let request = request.normalized();
///
/// assert_eq!(request.tempo, 120);
/// assert_eq!(request.octave, 4);
/// assert_eq!(request.beats, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MidiRequest {
    /// Chord names, e.g. `["C", "Am", "F", "G"]`
    pub chords: Vec<String>,
    /// Beats per minute
    #[serde(default)]
    pub tempo: i32,
    /// Pattern name from the catalog
    #[serde(default)]
    pub pattern: String,
    /// Base octave for chord-name voicings (C4 = 60)
    #[serde(default)]
    pub octave: i32,
    /// Beats per chord
    #[serde(default)]
    pub beats: i32,
    /// Per-chord fret positions, e.g. `["x", "3", "2", "0", "1", "0"]`
    #[serde(default, deserialize_with = "null_as_default")]
    pub frets: Vec<Vec<String>>,
    /// Open-string MIDI notes of the instrument the frets belong to
    #[serde(default, deserialize_with = "null_as_default")]
    pub open_midi: Vec<i32>,
}

impl MidiRequest {
    pub const DEFAULT_TEMPO: i32 = 120;
    pub const DEFAULT_OCTAVE: i32 = 4;
    pub const MIN_OCTAVE: i32 = 2;
    pub const MAX_OCTAVE: i32 = 6;
    pub const DEFAULT_BEATS: i32 = 4;
    /// Longest chord accepted, in beats. Keeps every delta inside a 4-byte
    /// variable-length quantity and bounds the steps scheduled per chord.
    pub const MAX_BEATS: i32 = 1024;
    pub const DEFAULT_PATTERN: &'static str = "quarter";

    /// A request for `chords` with every other field at its default.
    pub fn new<I, S>(chords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MidiRequest {
            chords: chords.into_iter().map(Into::into).collect(),
            tempo: Self::DEFAULT_TEMPO,
            pattern: Self::DEFAULT_PATTERN.to_string(),
            octave: Self::DEFAULT_OCTAVE,
            beats: Self::DEFAULT_BEATS,
            frets: Vec::new(),
            open_midi: Vec::new(),
        }
    }

    pub fn tempo(mut self, bpm: i32) -> Self {
        self.tempo = bpm;
        self
    }

    pub fn pattern(mut self, name: &str) -> Self {
        self.pattern = name.to_string();
        self
    }

    pub fn octave(mut self, octave: i32) -> Self {
        self.octave = octave;
        self
    }

    pub fn beats(mut self, beats: i32) -> Self {
        self.beats = beats;
        self
    }

    /// Use real fingerings: one fret list per chord plus the instrument tuning.
    pub fn fingerings(mut self, frets: Vec<Vec<String>>, open_midi: Vec<i32>) -> Self {
        self.frets = frets;
        self.open_midi = open_midi;
        self
    }

    /// Replace missing or out-of-range settings with their defaults.
    ///
    /// Beats above [`MidiRequest::MAX_BEATS`] are capped rather than reset.
    ///
    /// An empty pattern becomes `quarter`. Unknown pattern names are kept as
    /// they are; the pattern engine plays those as `whole`.
    pub fn normalized(mut self) -> Self {
        if self.tempo <= 0 {
            self.tempo = Self::DEFAULT_TEMPO;
        }
        if !(Self::MIN_OCTAVE..=Self::MAX_OCTAVE).contains(&self.octave) {
            self.octave = Self::DEFAULT_OCTAVE;
        }
        if self.beats <= 0 {
            self.beats = Self::DEFAULT_BEATS;
        }
        self.beats = self.beats.min(Self::MAX_BEATS);
        if self.pattern.is_empty() {
            self.pattern = Self::DEFAULT_PATTERN.to_string();
        }
        self
    }
}

/// Batch transposition of chord names from one key to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransposeRequest {
    pub from_key: String,
    pub to_key: String,
    pub chords: Vec<String>,
}

/// Original and transposed name of a single chord.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransposedChord {
    pub original: String,
    pub transposed: String,
}

/// Result of a batch transposition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransposeResponse {
    /// Semitones moved up, 0-11
    pub semitones: i32,
    pub results: Vec<TransposedChord>,
}
