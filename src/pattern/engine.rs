//! Pattern interpreter
//!
//! Lays a pattern's slots end to end over one chord and resolves each slot's
//! note rule against the chord's NoteSet.

use super::types::{Pattern, Slot, Step};

/// Schedule one chord.
///
/// The pattern's lead slots are played once, then its slots are taken in
/// order, cycling back to the first, for as long as the next slot fits inside
/// `chord_ticks`. Whatever time is left
/// over becomes a trailing rest, so the returned steps always add up to
/// exactly `chord_ticks`.
///
/// An empty NoteSet produces only rests.
///
/// # Example
/// ```
/// use chordmidi::pattern::{lookup, schedule};
///
/// let steps = schedule(lookup("half"), &[60, 64, 67], 1920);
/// assert_eq!(steps.len(), 2);
/// assert_eq!(steps[0].notes, vec![60, 64, 67]);
/// assert_eq!(steps[0].length, 960);
/// ```
pub fn schedule(pattern: &Pattern, notes: &[u8], chord_ticks: u32) -> Vec<Step> {
    let unit = pattern.subdivision.unit_ticks(chord_ticks, notes.len());
    let mut steps = Vec::new();
    let mut elapsed: u32 = 0;

    if unit > 0 {
        let slots = pattern.lead.iter().chain(pattern.slots.iter().cycle());
        for (ordinal, slot) in slots.enumerate() {
            let length = unit.saturating_mul(slot.span);
            match elapsed.checked_add(length) {
                Some(end) if length > 0 && end <= chord_ticks => {
                    steps.push(resolve_slot(slot, notes, ordinal, length));
                    elapsed = end;
                }
                _ => break,
            }
        }
    }

    if elapsed < chord_ticks {
        steps.push(Step::rest(chord_ticks - elapsed));
    }
    steps
}

fn resolve_slot(slot: &Slot, notes: &[u8], ordinal: usize, length: u32) -> Step {
    let selected = slot.rule.select(notes, ordinal);
    if selected.is_empty() {
        return Step::rest(length);
    }
    Step {
        notes: selected,
        velocity: slot.velocity.min(127),
        length,
        hold: slot.hold.of(length),
    }
}
