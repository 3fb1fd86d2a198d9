//! # Error Types
//!
//! This module defines the error type for the chordmidi engine.
//!
//! Musical input never produces an error: unknown chords, unknown patterns,
//! short fret arrays and missing tunings all fall back to a playable default.
//! The only failures are structural problems with the request itself.
//!
//! ## Error Types
//! - `InvalidRequest` - The request document could not be decoded (wrong types, bad syntax)
//! - `EmptyProgression` - The request decoded but contains no chords
//!
//! ## Usage
//! ```rust
//! use chordmidi::{generate_midi_from_json, MidiError};
//!
//! match generate_midi_from_json(r#"{"chords": []}"#) {
//!     Ok(bytes) => println!("{} bytes", bytes.len()),
//!     Err(MidiError::EmptyProgression) => eprintln!("nothing to play"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MidiError {
    /// The request document is malformed.
    ///
    /// Occurs when a JSON or YAML body cannot be decoded into a request, e.g. a
    /// missing `chords` field or a non-numeric `tempo`.
    ///
    /// # Example
    /// ```
    /// # use chordmidi::MidiError;
    /// let err = MidiError::InvalidRequest("missing field `chords`".to_string());
    /// assert_eq!(err.to_string(), "Invalid request: missing field `chords`");
    /// ```
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The request contains an empty chord list.
    ///
    /// # Example
    /// ```
    /// # use chordmidi::MidiError;
    /// assert_eq!(
    ///     MidiError::EmptyProgression.to_string(),
    ///     "Invalid request: chord progression is empty"
    /// );
    /// ```
    #[error("Invalid request: chord progression is empty")]
    EmptyProgression,
}
