pub mod api;
pub mod chord;
pub mod error;
pub mod pattern;
pub mod pitch;
pub mod request;
pub mod sequencer;
pub mod smf;

pub use api::{generate_midi, generate_midi_from_json, generate_midi_from_yaml, transpose_chords};
pub use error::*;
pub use pattern::{is_known_pattern, pattern_names};
pub use request::{MidiRequest, TransposeRequest, TransposeResponse, TransposedChord};
