//! # Pattern Module
//!
//! Rhythm patterns for chord accompaniment: strums, picking patterns,
//! arpeggios and bass-and-chord figures.
//!
//! ## Purpose
//! Every pattern answers the same question: given the notes of one chord and
//! how long the chord lasts, which notes sound when, for how long and how hard?
//! The browser mirrors the same rhythm visually from the pattern name, so the
//! catalog names are part of the public contract.
//!
//! ## Sub-modules
//! - `types` - Pattern, Slot, NoteRule, Subdivision and Step definitions
//! - `catalog` - The 31 named slot tables and name lookup
//! - `engine` - The interpreter that turns a pattern into steps for one chord
//!
//! ## Table-Driven Patterns
//!
//! A pattern is data, not code. It has a subdivision grid (quarter, eighth,
//! sixteenth, eighth triplet, or a fraction of the chord) and a list of slots
//! that repeats until the chord is filled:
//!
//! ```text
//! pop-strum, eighths:   D   D   U   D   U | D   D   U ...
//! vel:                 100  90  80 100  80 |100  90  80
//! ```
//!
//! Swing and shuffle feels use the eighth-triplet grid with a two-unit slot
//! followed by a one-unit slot, giving the 2/3 + 1/3 split of each beat.
//!
//! ## Example
//! ```rust
//! use chordmidi::pattern::{lookup, schedule};
//!
//! // G major triad, one 4/4 bar
//! let steps = schedule(lookup("boom-chick"), &[67, 71, 74], 4 * 480);
//!
//! assert_eq!(steps.len(), 4);
//! assert_eq!(steps[0].notes, vec![55]);      // bass note, an octave down
//! assert_eq!(steps[1].notes, vec![71, 74]);  // upper chord
//! ```
//!
//! ## Fallbacks
//! - Unknown pattern names play as `whole`
//! - Note indices past the end of a small chord clamp to its top note
//! - An empty NoteSet schedules rests only

mod catalog;
mod engine;
mod types;

#[cfg(test)]
mod tests;

pub use catalog::{find, is_known_pattern, lookup, pattern_names, CATALOG};
pub use engine::schedule;
pub use types::{Hold, NoteRule, Pattern, Slot, Step, Subdivision};
