//! Pitch resolution
//!
//! Turns one chord slot into its NoteSet: the sorted, deduplicated MIDI notes
//! that sound for that chord. Two sources are supported:
//!
//! - **Quality mode** - chord name looked up in a fixed interval table and
//!   voiced upward from the root in the requested octave.
//! - **Fret mode** - fret positions of a real fingering added to the
//!   instrument's open-string tuning.
//!
//! Notes outside the MIDI range (0-127) are dropped in both modes.

use crate::chord::{root_index, suffix};

/// Highest valid MIDI note number.
pub const MAX_MIDI_NOTE: i32 = 127;

/// Major triad, used for unknown qualities.
const MAJOR: &[i32] = &[0, 4, 7];

/// Semitone intervals above the root for each supported chord suffix.
const QUALITY_INTERVALS: &[(&str, &[i32])] = &[
    ("", MAJOR),
    ("m", &[0, 3, 7]),
    ("7", &[0, 4, 7, 10]),
    ("maj7", &[0, 4, 7, 11]),
    ("m7", &[0, 3, 7, 10]),
    ("dim", &[0, 3, 6]),
    ("aug", &[0, 4, 8]),
    ("sus2", &[0, 2, 7]),
    ("sus4", &[0, 5, 7]),
    ("6", &[0, 4, 7, 9]),
    ("m6", &[0, 3, 7, 9]),
    ("add9", &[0, 4, 7, 14]),
    ("madd9", &[0, 3, 7, 14]),
    ("9", &[0, 4, 7, 10, 14]),
    ("maj9", &[0, 4, 7, 11, 14]),
    ("m9", &[0, 3, 7, 10, 14]),
    ("7sus4", &[0, 5, 7, 10]),
    ("dim7", &[0, 3, 6, 9]),
    ("m7b5", &[0, 3, 6, 10]),
];

/// Interval set for a chord suffix, falling back to the major triad.
pub fn quality_intervals(quality: &str) -> &'static [i32] {
    QUALITY_INTERVALS
        .iter()
        .find(|(name, _)| *name == quality)
        .map_or(MAJOR, |(_, intervals)| *intervals)
}

fn to_midi(pitch: i32) -> Option<u8> {
    (0..=MAX_MIDI_NOTE).contains(&pitch).then_some(pitch as u8)
}

/// Resolve a chord name to MIDI notes voiced upward from `base_octave`.
///
/// Unknown roots resolve to C and unknown qualities to a major triad, so a
/// chord name never yields an empty set unless the octave pushes every note
/// out of range.
///
/// # Examples
/// ```
/// use chordmidi::pitch::resolve_from_quality;
///
/// assert_eq!(resolve_from_quality("C", 4), vec![60, 64, 67]);
/// assert_eq!(resolve_from_quality("Am", 4), vec![69, 72, 76]);
/// assert_eq!(resolve_from_quality("G7", 3), vec![55, 59, 62, 65]);
/// ```
pub fn resolve_from_quality(symbol: &str, base_octave: i32) -> Vec<u8> {
    let root = root_index(symbol).unwrap_or(0);
    let Some(base) = base_octave
        .checked_add(1)
        .and_then(|octave| octave.checked_mul(12))
        .and_then(|c| c.checked_add(i32::from(root)))
    else {
        return Vec::new();
    };

    quality_intervals(suffix(symbol))
        .iter()
        .filter_map(|interval| to_midi(base.checked_add(*interval)?))
        .collect()
}

/// Resolve fret positions against an open-string tuning.
///
/// `frets[i]` belongs to the string tuned to `open_midi[i]`. Muted strings
/// (`"x"`), strings without a tuning entry and non-numeric frets are skipped.
/// The result is sorted ascending with unisons removed.
///
/// # Examples
/// ```
/// use chordmidi::pitch::resolve_from_frets;
///
/// let standard = [40, 45, 50, 55, 59, 64];
/// let frets: Vec<String> = ["x", "3", "2", "0", "1", "0"].iter().map(|s| s.to_string()).collect();
/// assert_eq!(resolve_from_frets(&frets, &standard), vec![48, 52, 55, 60, 64]);
/// ```
pub fn resolve_from_frets<S: AsRef<str>>(frets: &[S], open_midi: &[i32]) -> Vec<u8> {
    let mut notes: Vec<u8> = frets
        .iter()
        .zip(open_midi)
        .filter_map(|(fret, open)| {
            let fret = fret.as_ref().trim();
            if fret == "x" {
                return None;
            }
            let fret: i32 = fret.parse().ok()?;
            to_midi(open.checked_add(fret)?)
        })
        .collect();

    notes.sort_unstable();
    notes.dedup();
    notes
}

/// Resolve the NoteSet for the chord at `index` in a progression.
///
/// Fret mode is used when `frets` has an entry for this chord, a tuning was
/// supplied and the fingering produces at least one note. Everything else
/// falls back to quality mode.
pub fn resolve_notes<S: AsRef<str>>(
    index: usize,
    symbol: &str,
    octave: i32,
    frets: &[Vec<S>],
    open_midi: &[i32],
) -> Vec<u8> {
    if !open_midi.is_empty() {
        if let Some(fingering) = frets.get(index) {
            let notes = resolve_from_frets(fingering, open_midi);
            if !notes.is_empty() {
                return notes;
            }
            log::debug!(
                "fingering for chord {} ({}) produced no notes, using chord quality",
                index,
                symbol
            );
        }
    }
    resolve_from_quality(symbol, octave)
}

/// One octave below `note`, or `note` itself when that would leave the MIDI range.
pub fn lower_octave(note: u8) -> u8 {
    note.checked_sub(12).unwrap_or(note)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STANDARD_GUITAR: [i32; 6] = [40, 45, 50, 55, 59, 64]; // E2 A2 D3 G3 B3 E4

    fn strings(frets: &[&str]) -> Vec<String> {
        frets.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_quality_major_and_minor() {
        assert_eq!(resolve_from_quality("C", 4), vec![60, 64, 67]); // C4 E4 G4
        assert_eq!(resolve_from_quality("Am", 4), vec![69, 72, 76]); // A4 C5 E5
        assert_eq!(resolve_from_quality("Dm", 3), vec![50, 53, 57]);
        assert_eq!(resolve_from_quality("Bbm", 3), vec![58, 61, 65]);
    }

    #[test]
    fn test_quality_extended_table() {
        assert_eq!(resolve_from_quality("Cmaj7", 4), vec![60, 64, 67, 71]);
        assert_eq!(resolve_from_quality("C6", 4), vec![60, 64, 67, 69]);
        assert_eq!(resolve_from_quality("Cm6", 4), vec![60, 63, 67, 69]);
        assert_eq!(resolve_from_quality("Cadd9", 4), vec![60, 64, 67, 74]);
        assert_eq!(resolve_from_quality("Cmadd9", 4), vec![60, 63, 67, 74]);
        assert_eq!(resolve_from_quality("Csus2", 4), vec![60, 62, 67]);
        assert_eq!(resolve_from_quality("Caug", 4), vec![60, 64, 68]);
        assert_eq!(resolve_from_quality("Bdim", 3), vec![59, 62, 65]);
    }

    #[test]
    fn test_quality_unknown_chord_falls_back_to_c_major() {
        assert_eq!(resolve_from_quality("ZZ", 4), vec![60, 64, 67]);
        assert_eq!(resolve_from_quality("", 4), vec![60, 64, 67]);
    }

    #[test]
    fn test_quality_unknown_suffix_falls_back_to_major() {
        assert_eq!(resolve_from_quality("Gxyz", 4), vec![67, 71, 74]);
    }

    // Quality mode drops out-of-range notes instead of wrapping them.
    #[test]
    fn test_quality_drops_notes_above_127() {
        let notes = resolve_from_quality("Bmaj7", 8);
        // B8 = 119; 123 and 126 fit, 130 does not
        assert_eq!(notes, vec![119, 123, 126]);
        assert!(resolve_from_quality("C", 12).is_empty());
    }

    #[test]
    fn test_quality_drops_negative_notes() {
        // B(-2) = -1, so only the third and fifth survive
        assert_eq!(resolve_from_quality("B", -2), vec![3, 6]);
    }

    #[test]
    fn test_quality_extreme_octaves_are_empty() {
        assert!(resolve_from_quality("C", i32::MAX).is_empty());
        assert!(resolve_from_quality("B", i32::MIN).is_empty());
        assert!(resolve_from_quality("Gmaj9", i32::MAX / 12).is_empty());
        assert!(resolve_from_quality("Am", i32::MIN / 12).is_empty());
    }

    #[test]
    fn test_frets_basic() {
        // open E: 0-2-2-1-0-0 with the low string muted
        let got = resolve_from_frets(&strings(&["x", "2", "2", "1", "0", "0"]), &STANDARD_GUITAR);
        assert_eq!(got, vec![47, 52, 56, 59, 64]);
    }

    #[test]
    fn test_frets_sorted_and_deduplicated() {
        // B string fret 5 and high E open are both E4
        let got = resolve_from_frets(&strings(&["0", "2", "2", "1", "5", "0"]), &STANDARD_GUITAR);
        assert_eq!(got, vec![40, 47, 52, 56, 64]);
        assert!(got.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_frets_all_muted() {
        let got = resolve_from_frets(&strings(&["x"; 6]), &STANDARD_GUITAR);
        assert!(got.is_empty());
    }

    #[test]
    fn test_frets_skip_non_numeric_and_missing_strings() {
        let got = resolve_from_frets(&strings(&["?", "3", "", "0", "1", "0", "5"]), &STANDARD_GUITAR);
        assert_eq!(got, vec![48, 55, 60, 64]);
    }

    #[test]
    fn test_frets_out_of_range_excluded() {
        let got = resolve_from_frets(&strings(&["10"]), &[120]);
        assert!(got.is_empty());
        let got = resolve_from_frets(&strings(&["10", "2"]), &[120, 60]);
        assert_eq!(got, vec![62]);
    }

    #[test]
    fn test_resolve_notes_prefers_frets() {
        let frets = vec![strings(&["x", "3", "2", "0", "1", "0"])];
        let got = resolve_notes(0, "C", 4, &frets, &STANDARD_GUITAR);
        assert_eq!(got, vec![48, 52, 55, 60, 64]);
    }

    #[test]
    fn test_resolve_notes_falls_back_to_quality() {
        let frets = vec![strings(&["x", "3", "2", "0", "1", "0"])];
        // no tuning
        assert_eq!(resolve_notes(0, "C", 4, &frets, &[]), vec![60, 64, 67]);
        // no fingering for this chord
        assert_eq!(resolve_notes(1, "Am", 4, &frets, &STANDARD_GUITAR), vec![69, 72, 76]);
        // fingering resolves to nothing
        let muted = vec![strings(&["x"; 6])];
        assert_eq!(resolve_notes(0, "G", 4, &muted, &STANDARD_GUITAR), vec![67, 71, 74]);
    }

    #[test]
    fn test_lower_octave() {
        assert_eq!(lower_octave(60), 48);
        assert_eq!(lower_octave(12), 0);
        assert_eq!(lower_octave(11), 11);
    }
}
