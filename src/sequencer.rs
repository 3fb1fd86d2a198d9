//! Event sequencing
//!
//! Walks a progression chord by chord, schedules each chord with the selected
//! pattern and turns the resulting steps into delta-timed MIDI events.
//!
//! Each sounding step is emitted as a group: all note-ons at the same tick
//! (the first carrying any time elapsed since the previous event), then all
//! note-offs together once the step's hold time has passed. Groups never
//! overlap, so every note-on is closed before the next group starts.

use crate::pattern::{lookup, schedule, Step};
use crate::pitch::resolve_notes;
use crate::request::MidiRequest;
use crate::smf::{build_file, Event, Track, TICKS_PER_QUARTER};

/// Every note is written on the first MIDI channel.
pub const CHANNEL: u8 = 0;

/// Accumulates events, carrying silent time forward into the next delta.
pub struct Sequencer {
    track: Track,
    pending: u32,
}

impl Sequencer {
    /// Start a track with its tempo event.
    pub fn new(bpm: u32) -> Self {
        let mut track = Track::new();
        track.push(Event::tempo(bpm));
        Sequencer { track, pending: 0 }
    }

    /// Let `ticks` pass without sounding anything.
    pub fn rest(&mut self, ticks: u32) {
        self.pending = self.pending.saturating_add(ticks);
    }

    /// Emit one scheduled step.
    pub fn play(&mut self, step: &Step) {
        if step.is_rest() {
            self.rest(step.length);
            return;
        }

        for (i, &key) in step.notes.iter().enumerate() {
            let delta = if i == 0 { std::mem::take(&mut self.pending) } else { 0 };
            self.track.push(Event::note_on(delta, CHANNEL, key, step.velocity));
        }
        for (i, &key) in step.notes.iter().enumerate() {
            let delta = if i == 0 { step.hold } else { 0 };
            self.track.push(Event::note_off(delta, CHANNEL, key));
        }
        self.rest(step.length.saturating_sub(step.hold));
    }

    /// Close the track. Trailing silence is kept as the end-of-track delta.
    pub fn finish(mut self) -> Track {
        let delta = std::mem::take(&mut self.pending);
        self.track.push(Event::end_of_track(delta));
        self.track
    }
}

/// Length of one chord in ticks.
pub fn chord_ticks(beats: i32) -> u32 {
    u32::try_from(beats)
        .unwrap_or(0)
        .saturating_mul(u32::from(TICKS_PER_QUARTER))
}

/// Sequence a request into track events.
///
/// The request is used as given; call [`MidiRequest::normalized`] first to
/// apply defaults.
pub fn sequence(request: &MidiRequest) -> Track {
    let pattern = lookup(&request.pattern);
    let ticks = chord_ticks(request.beats);
    let bpm = u32::try_from(request.tempo).unwrap_or(0);

    let mut sequencer = Sequencer::new(bpm);
    for (index, chord) in request.chords.iter().enumerate() {
        let notes = resolve_notes(index, chord, request.octave, &request.frets, &request.open_midi);
        for step in schedule(pattern, &notes, ticks) {
            sequencer.play(&step);
        }
    }
    sequencer.finish()
}

/// Encode a request as MTrk chunk data.
pub fn build_track(request: &MidiRequest) -> Vec<u8> {
    sequence(request).to_bytes()
}

/// Encode a request as a complete Standard MIDI File.
pub fn render(request: &MidiRequest) -> Vec<u8> {
    build_file(&build_track(request))
}
