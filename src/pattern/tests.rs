use super::*;
use std::collections::HashSet;

const BAR: u32 = 4 * 480;
const C_MAJOR: [u8; 3] = [60, 64, 67];
const G7: [u8; 4] = [55, 59, 62, 65];
// open C shape on guitar
const C_SHAPE: [u8; 5] = [48, 52, 55, 60, 64];

fn sounding(steps: &[Step]) -> Vec<&Step> {
    steps.iter().filter(|s| !s.is_rest()).collect()
}

#[test]
fn test_catalog_has_31_unique_names() {
    assert_eq!(CATALOG.len(), 31);
    let names: HashSet<&str> = pattern_names().collect();
    assert_eq!(names.len(), 31);
    for name in [
        "whole", "half", "quarter", "arpeggio-up", "arpeggio-down", "boom-chick",
        "pop-strum", "travis-picking", "alberti-bass", "triplet-arpeggio", "pop-stabs",
        "bossa-nova", "reggae-skank", "funk-16th", "jazz-swing", "rock-8th", "let-it-be",
        "stand-by-me", "creep-arpeggio", "twist-and-shout", "blues-shuffle",
        "sweet-home-alabama", "stairway-arpeggio", "hotel-california", "wonderwall-strum",
        "blackbird-pick", "palm-mute-8th", "off-beat-8th", "country-alt-bass",
        "pima-arpeggio", "four-on-the-floor",
    ] {
        assert!(is_known_pattern(name), "missing pattern {}", name);
    }
}

#[test]
fn test_unknown_and_empty_names_fall_back_to_whole() {
    assert_eq!(lookup("polka").name, "whole");
    assert_eq!(lookup("").name, "whole");
    assert_eq!(lookup("Quarter").name, "whole");
    assert!(find("polka").is_none());
}

#[test]
fn test_steps_fill_the_chord_exactly() {
    for pattern in CATALOG.iter() {
        for notes in [&C_MAJOR[..], &G7[..], &C_SHAPE[..], &[60][..]] {
            for beats in 1..=8 {
                let ticks = beats * 480;
                let steps = schedule(pattern, notes, ticks);
                let total: u32 = steps.iter().map(|s| s.length).sum();
                assert_eq!(total, ticks, "{} with {} notes over {} beats", pattern.name, notes.len(), beats);
                for step in &steps {
                    assert!(step.hold <= step.length, "{}: hold past step end", pattern.name);
                    assert!(step.is_rest() || step.hold > 0, "{}: silent note", pattern.name);
                }
            }
        }
    }
}

#[test]
fn test_selected_notes_come_from_the_chord() {
    for pattern in CATALOG.iter() {
        for step in schedule(pattern, &C_SHAPE, BAR) {
            for note in &step.notes {
                let in_chord = C_SHAPE.contains(note) || C_SHAPE.contains(&(note + 12));
                assert!(in_chord, "{} played {}", pattern.name, note);
            }
            let unique: HashSet<&u8> = step.notes.iter().collect();
            assert_eq!(unique.len(), step.notes.len(), "{}: duplicate in group", pattern.name);
        }
    }
}

#[test]
fn test_empty_note_set_only_rests() {
    for pattern in CATALOG.iter() {
        let steps = schedule(pattern, &[], BAR);
        assert!(steps.iter().all(Step::is_rest), "{}", pattern.name);
        assert_eq!(steps.iter().map(|s| s.length).sum::<u32>(), BAR);
    }
}

#[test]
fn test_whole_half_quarter() {
    let whole = schedule(lookup("whole"), &C_MAJOR, BAR);
    assert_eq!(whole.len(), 1);
    assert_eq!(whole[0].notes, C_MAJOR.to_vec());
    assert_eq!((whole[0].length, whole[0].hold, whole[0].velocity), (1920, 1920, 100));

    let half = schedule(lookup("half"), &C_MAJOR, BAR);
    assert_eq!(half.len(), 2);
    assert!(half.iter().all(|s| s.length == 960));

    let quarter = schedule(lookup("quarter"), &C_MAJOR, 3 * 480);
    assert_eq!(quarter.len(), 3);
    assert!(quarter.iter().all(|s| s.length == 480 && s.notes == C_MAJOR.to_vec()));
}

#[test]
fn test_arpeggios_split_the_chord_evenly() {
    let up = schedule(lookup("arpeggio-up"), &G7, BAR);
    let notes: Vec<u8> = up.iter().flat_map(|s| s.notes.clone()).collect();
    assert_eq!(notes, vec![55, 59, 62, 65]);
    assert!(up.iter().all(|s| s.length == 480));

    let down = schedule(lookup("arpeggio-down"), &C_MAJOR, BAR);
    let notes: Vec<u8> = down.iter().flat_map(|s| s.notes.clone()).collect();
    assert_eq!(notes, vec![67, 64, 60]);
    assert!(down.iter().all(|s| s.length == 640));
}

#[test]
fn test_arpeggio_remainder_becomes_rest() {
    // 1920 / 7 = 274 ticks per note, 2 ticks left over
    let notes = [40, 47, 52, 55, 59, 64, 67];
    let steps = schedule(lookup("arpeggio-up"), &notes, BAR);
    assert_eq!(sounding(&steps).len(), 7);
    assert_eq!(steps.last().map(|s| (s.is_rest(), s.length)), Some((true, 2)));
}

#[test]
fn test_boom_chick() {
    let steps = schedule(lookup("boom-chick"), &C_MAJOR, BAR);
    assert_eq!(steps[0].notes, vec![48]);
    assert_eq!(steps[0].velocity, 100);
    for step in &steps[1..] {
        assert_eq!(step.notes, vec![64, 67]);
        assert_eq!(step.velocity, 90);
    }
}

#[test]
fn test_boom_chick_bass_only_on_first_beat() {
    for beats in [5, 6] {
        let steps = schedule(lookup("boom-chick"), &C_MAJOR, beats * 480);
        assert_eq!(steps.len(), beats as usize);
        assert_eq!(steps[0].notes, vec![48]);
        for step in &steps[1..] {
            assert_eq!(step.notes, vec![64, 67], "{} beats", beats);
            assert_eq!(step.velocity, 90);
        }
    }
}

#[test]
fn test_lead_slots_play_once_per_chord() {
    let lead_only: Vec<&Pattern> = CATALOG.iter().filter(|p| !p.lead.is_empty()).collect();
    assert_eq!(lead_only.len(), 1);
    assert_eq!(lead_only[0].name, "boom-chick");

    // a chord too short for the lead still fills with a rest
    let steps = schedule(lookup("boom-chick"), &C_MAJOR, 240);
    assert_eq!(steps, vec![Step::rest(240)]);
}

#[test]
fn test_boom_chick_single_note_and_low_root() {
    let steps = schedule(lookup("boom-chick"), &[5], BAR);
    // no octave below 5, and the "upper" chord is the note itself
    assert_eq!(steps[0].notes, vec![5]);
    assert_eq!(steps[1].notes, vec![5]);
}

#[test]
fn test_pop_strum_cycles_five_strokes() {
    let steps = schedule(lookup("pop-strum"), &C_MAJOR, BAR);
    assert_eq!(steps.len(), 8);
    let velocities: Vec<u8> = steps.iter().map(|s| s.velocity).collect();
    assert_eq!(velocities, vec![100, 90, 80, 100, 80, 100, 90, 80]);
    assert_eq!(steps[2].notes, vec![67, 64, 60]); // upstroke
    assert_eq!(steps[3].notes, vec![60, 64, 67]);
    assert!(steps.iter().all(|s| s.length == 240));
}

#[test]
fn test_swing_patterns_split_beats_two_to_one() {
    for name in ["jazz-swing", "blues-shuffle"] {
        let steps = schedule(lookup(name), &C_MAJOR, BAR);
        let lengths: Vec<u32> = steps.iter().map(|s| s.length).collect();
        assert_eq!(lengths, vec![320, 160, 320, 160, 320, 160, 320, 160], "{}", name);
    }
    let shuffle = schedule(lookup("blues-shuffle"), &C_MAJOR, BAR);
    assert_eq!(shuffle[0].notes, vec![60, 67]);
}

#[test]
fn test_triplet_arpeggio_grid() {
    let steps = schedule(lookup("triplet-arpeggio"), &C_MAJOR, 480);
    let notes: Vec<u8> = steps.iter().flat_map(|s| s.notes.clone()).collect();
    assert_eq!(notes, vec![60, 64, 67]);
    assert!(steps.iter().all(|s| s.length == 160));
}

#[test]
fn test_fingerpicking_indices_clamp_on_small_chords() {
    // travis-picking reaches for index 4; a triad clamps it to the top note
    let steps = schedule(lookup("travis-picking"), &C_MAJOR, BAR);
    assert_eq!(steps[0].notes, vec![60, 67]);
    assert_eq!(steps[1].notes, vec![67]);
    assert_eq!(steps[4].notes, vec![64]);

    let steps = schedule(lookup("travis-picking"), &C_SHAPE, BAR);
    assert_eq!(steps[0].notes, vec![48, 64]);
    assert_eq!(steps[1].notes, vec![60]);
}

#[test]
fn test_stabs_are_staccato() {
    let steps = schedule(lookup("pop-stabs"), &C_MAJOR, BAR);
    let stabs = sounding(&steps);
    assert_eq!(stabs.len(), 3);
    assert!(stabs.iter().all(|s| s.length == 240 && s.hold == 120));

    let skank = schedule(lookup("reggae-skank"), &C_MAJOR, BAR);
    let hits = sounding(&skank);
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|s| s.hold == 80 && s.notes == vec![64, 67]));
}

#[test]
fn test_stand_by_me_spans() {
    let steps = schedule(lookup("stand-by-me"), &C_MAJOR, BAR);
    let lengths: Vec<u32> = steps.iter().map(|s| s.length).collect();
    assert_eq!(lengths, vec![720, 240, 480, 240, 240]);
    assert_eq!(steps[2].notes, vec![55]); // fifth, an octave down
}

#[test]
fn test_note_rules() {
    let notes = [60, 64, 67];
    assert_eq!(NoteRule::Root.select(&notes, 0), vec![60]);
    assert_eq!(NoteRule::Top.select(&notes, 0), vec![67]);
    assert_eq!(NoteRule::Index(9).select(&notes, 0), vec![67]);
    assert_eq!(NoteRule::Indices(&[0, 5, 2]).select(&notes, 0), vec![60, 67]);
    assert_eq!(NoteRule::OctaveDown(1).select(&notes, 0), vec![52]);
    assert_eq!(NoteRule::WalkUp.select(&notes, 4), vec![64]);
    assert_eq!(NoteRule::WalkDown.select(&notes, 4), vec![64]);
    assert_eq!(NoteRule::WalkDown.select(&notes, 0), vec![67]);
    assert!(NoteRule::Rest.select(&notes, 0).is_empty());
    assert!(NoteRule::All.select(&[], 0).is_empty());
}

#[test]
fn test_hold_fractions() {
    assert_eq!(Hold::FULL.of(240), 240);
    assert_eq!(Hold::HALF.of(240), 120);
    assert_eq!(Hold::THIRD.of(240), 80);
    assert_eq!(Hold::THREE_QUARTERS.of(320), 240);
    assert_eq!(Hold::THIRD.of(1), 1);
    assert_eq!(Hold::HALF.of(0), 0);
}
