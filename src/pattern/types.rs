//! Rhythm pattern type definitions
//!
//! A pattern is plain data: a subdivision grid, a few lead slots played once
//! and a cyclic list of slots.
//! The interpreter in `engine` lays the slots over a chord's duration.

use serde::Serialize;

use crate::pitch::lower_octave;
use crate::smf::TICKS_PER_QUARTER;

const QUARTER: u32 = TICKS_PER_QUARTER as u32;

/// Grid unit that one slot span occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Subdivision {
    /// The whole chord duration
    Whole,
    /// Half the chord duration
    Half,
    Quarter,
    Eighth,
    Sixteenth,
    /// One third of a quarter note; swing patterns pair a 2-unit and a 1-unit slot
    EighthTriplet,
    /// The chord duration divided evenly between the notes of the chord
    PerNote,
}

impl Subdivision {
    /// Length of one grid unit in ticks.
    pub fn unit_ticks(self, chord_ticks: u32, note_count: usize) -> u32 {
        match self {
            Subdivision::Whole => chord_ticks,
            Subdivision::Half => chord_ticks / 2,
            Subdivision::Quarter => QUARTER,
            Subdivision::Eighth => QUARTER / 2,
            Subdivision::Sixteenth => QUARTER / 4,
            Subdivision::EighthTriplet => QUARTER / 3,
            Subdivision::PerNote => {
                let count = u32::try_from(note_count.max(1)).unwrap_or(u32::MAX);
                chord_ticks / count
            }
        }
    }
}

/// Which members of the chord's NoteSet a slot plays.
///
/// Indices beyond the end of the NoteSet clamp to its last (highest) note, so
/// patterns written for six-string voicings still work on a triad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoteRule {
    /// Every note, low to high (downstroke)
    All,
    /// Every note, high to low (upstroke)
    AllReversed,
    /// The lowest note
    Root,
    /// Every note except the lowest; the whole set if it has a single note
    Upper,
    /// The highest note
    Top,
    Index(usize),
    /// Several notes struck together (pinches, power chords)
    Indices(&'static [usize]),
    /// A note dropped one octave, for bass lines
    OctaveDown(usize),
    /// The note at the slot's position, cycling upward through the set
    WalkUp,
    /// The note at the slot's position, cycling downward through the set
    WalkDown,
    Rest,
}

impl NoteRule {
    /// Select notes from `notes` for the slot at position `ordinal` within the chord.
    ///
    /// Returns an empty vec for rests and for an empty NoteSet. The returned
    /// notes contain no duplicates.
    pub fn select(&self, notes: &[u8], ordinal: usize) -> Vec<u8> {
        let Some(last) = notes.len().checked_sub(1) else {
            return Vec::new();
        };
        let at = |i: usize| notes[i.min(last)];

        match self {
            NoteRule::All => notes.to_vec(),
            NoteRule::AllReversed => notes.iter().rev().copied().collect(),
            NoteRule::Root => vec![notes[0]],
            NoteRule::Upper if notes.len() > 1 => notes[1..].to_vec(),
            NoteRule::Upper => notes.to_vec(),
            NoteRule::Top => vec![notes[last]],
            NoteRule::Index(i) => vec![at(*i)],
            NoteRule::Indices(indices) => {
                let mut picked = Vec::with_capacity(indices.len());
                for note in indices.iter().map(|i| at(*i)) {
                    if !picked.contains(&note) {
                        picked.push(note);
                    }
                }
                picked
            }
            NoteRule::OctaveDown(i) => vec![lower_octave(at(*i))],
            NoteRule::WalkUp => vec![notes[ordinal % notes.len()]],
            NoteRule::WalkDown => vec![notes[last - ordinal % notes.len()]],
            NoteRule::Rest => Vec::new(),
        }
    }
}

/// Fraction of a slot that actually sounds; the rest of the slot is silence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hold {
    pub num: u32,
    pub den: u32,
}

impl Hold {
    pub const FULL: Hold = Hold { num: 1, den: 1 };
    pub const THREE_QUARTERS: Hold = Hold { num: 3, den: 4 };
    pub const HALF: Hold = Hold { num: 1, den: 2 };
    pub const THIRD: Hold = Hold { num: 1, den: 3 };

    /// Sounding ticks for a slot of `ticks` length; at least one tick for a non-empty slot.
    pub fn of(self, ticks: u32) -> u32 {
        if ticks == 0 || self.den == 0 {
            return ticks;
        }
        let held = u64::from(ticks) * u64::from(self.num) / u64::from(self.den);
        (held as u32).clamp(1, ticks)
    }
}

/// One position in a pattern's repeating cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub rule: NoteRule,
    pub velocity: u8,
    /// Number of subdivision units the slot occupies
    pub span: u32,
    pub hold: Hold,
}

impl Slot {
    /// A full-length, single-unit slot.
    pub const fn hit(rule: NoteRule, velocity: u8) -> Slot {
        Slot {
            rule,
            velocity,
            span: 1,
            hold: Hold::FULL,
        }
    }

    pub const fn rest() -> Slot {
        Slot::hit(NoteRule::Rest, 0)
    }

    pub const fn span(self, span: u32) -> Slot {
        Slot { span, ..self }
    }

    pub const fn hold(self, hold: Hold) -> Slot {
        Slot { hold, ..self }
    }
}

/// A named rhythm: a subdivision grid and the slots cycled over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub subdivision: Subdivision,
    /// Played once at the start of each chord, before `slots` begin cycling
    pub lead: &'static [Slot],
    pub slots: &'static [Slot],
}

/// One scheduled decision of the engine.
///
/// `notes` sound together for `hold` ticks; the step lasts `length` ticks in
/// total. A step with no notes is a rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub notes: Vec<u8>,
    pub velocity: u8,
    pub length: u32,
    pub hold: u32,
}

impl Step {
    pub fn rest(length: u32) -> Step {
        Step {
            notes: Vec::new(),
            velocity: 0,
            length,
            hold: 0,
        }
    }

    pub fn is_rest(&self) -> bool {
        self.notes.is_empty()
    }
}
