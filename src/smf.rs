//! Standard MIDI File encoding
//!
//! Format 0 files with a single track: a tempo meta-event, note-on/note-off
//! channel events and an end-of-track marker. Delta times are written as MIDI
//! variable-length quantities.

/// Track resolution in ticks per quarter note.
pub const TICKS_PER_QUARTER: u16 = 480;

/// Largest delta a 4-byte variable-length quantity can hold.
pub const MAX_VAR_LEN: u32 = 0x0FFF_FFFF;

/// Largest tempo the 3-byte set-tempo field can hold, in microseconds per quarter.
const MAX_MICROS_PER_QUARTER: u32 = 0x00FF_FFFF;

/// Microseconds per quarter note for a tempo in BPM.
pub fn micros_per_quarter(bpm: u32) -> u32 {
    (60_000_000 / bpm.max(1)).min(MAX_MICROS_PER_QUARTER)
}

/// What a track event does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Tempo { micros_per_quarter: u32 },
    NoteOn { channel: u8, key: u8, velocity: u8 },
    NoteOff { channel: u8, key: u8 },
    EndOfTrack,
}

/// A track event with its delta time in ticks since the previous event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub delta: u32,
    pub kind: EventKind,
}

impl Event {
    pub fn tempo(bpm: u32) -> Event {
        Event {
            delta: 0,
            kind: EventKind::Tempo {
                micros_per_quarter: micros_per_quarter(bpm),
            },
        }
    }

    pub fn note_on(delta: u32, channel: u8, key: u8, velocity: u8) -> Event {
        Event {
            delta,
            kind: EventKind::NoteOn { channel, key, velocity },
        }
    }

    pub fn note_off(delta: u32, channel: u8, key: u8) -> Event {
        Event {
            delta,
            kind: EventKind::NoteOff { channel, key },
        }
    }

    pub fn end_of_track(delta: u32) -> Event {
        Event {
            delta,
            kind: EventKind::EndOfTrack,
        }
    }

    /// Append the encoded event to `buf`.
    pub fn write_to(&self, buf: &mut Vec<u8>) {
        write_var_len(buf, self.delta);
        match self.kind {
            EventKind::Tempo { micros_per_quarter } => {
                let micros = micros_per_quarter.min(MAX_MICROS_PER_QUARTER);
                buf.extend_from_slice(&[0xFF, 0x51, 0x03]);
                buf.extend_from_slice(&micros.to_be_bytes()[1..]);
            }
            EventKind::NoteOn { channel, key, velocity } => {
                buf.extend_from_slice(&[0x90 | (channel & 0x0F), key & 0x7F, velocity & 0x7F]);
            }
            EventKind::NoteOff { channel, key } => {
                buf.extend_from_slice(&[0x80 | (channel & 0x0F), key & 0x7F, 0x00]);
            }
            EventKind::EndOfTrack => buf.extend_from_slice(&[0xFF, 0x2F, 0x00]),
        }
    }
}

/// Write a MIDI variable-length quantity: 7 bits per byte, most significant
/// group first, continuation bit on every byte but the last.
///
/// Values above [`MAX_VAR_LEN`] are clamped to it.
pub fn write_var_len(buf: &mut Vec<u8>, value: u32) {
    let mut value = value.min(MAX_VAR_LEN);
    let mut bytes = [0u8; 4];
    let mut i = 3;
    bytes[i] = (value & 0x7F) as u8;
    value >>= 7;
    while value > 0 {
        i -= 1;
        bytes[i] = ((value & 0x7F) | 0x80) as u8;
        value >>= 7;
    }
    buf.extend_from_slice(&bytes[i..]);
}

/// An ordered list of track events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Track {
    events: Vec<Event>,
}

impl Track {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Total length of the track in ticks.
    pub fn duration(&self) -> u64 {
        self.events.iter().map(|e| u64::from(e.delta)).sum()
    }

    /// Encode the events as MTrk chunk data (without the chunk header).
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.events.len() * 4);
        for event in &self.events {
            event.write_to(&mut buf);
        }
        buf
    }
}

/// Wrap encoded track data in a format 0 Standard MIDI File.
pub fn build_file(track: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(22 + track.len());

    // MThd  length=6  format=0  ntrks=1  division
    out.extend_from_slice(b"MThd");
    out.extend_from_slice(&6u32.to_be_bytes());
    out.extend_from_slice(&0u16.to_be_bytes());
    out.extend_from_slice(&1u16.to_be_bytes());
    out.extend_from_slice(&TICKS_PER_QUARTER.to_be_bytes());

    out.extend_from_slice(b"MTrk");
    out.extend_from_slice(&(track.len() as u32).to_be_bytes());
    out.extend_from_slice(track);

    out
}
