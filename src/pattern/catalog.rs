//! The pattern catalog
//!
//! Every rhythm the app offers, as literal slot tables. Adding a rhythm means
//! adding a table here and listing it in [`CATALOG`]; the engine never changes.
//!
//! Velocities follow a loose convention: 100-115 for accented downstrokes and
//! bass notes, 80-95 for normal strokes, 60-75 for upstrokes and ghost notes.

use super::types::{Hold, NoteRule, NoteRule::*, Pattern, Slot, Subdivision};

const fn hit(rule: NoteRule, velocity: u8) -> Slot {
    Slot::hit(rule, velocity)
}

const REST: Slot = Slot::rest();

/// Root and fifth of a triad, or the lowest and third-lowest strings of a fingering.
const POWER: &[usize] = &[0, 2];

// ── Block chords ────────────────────────────────────────────────────────────

const WHOLE: Pattern = Pattern {
    name: "whole",
    description: "One block chord held for the whole chord duration",
    subdivision: Subdivision::Whole,
    lead: &[],
    slots: &[hit(All, 100)],
};

const HALF: Pattern = Pattern {
    name: "half",
    description: "Two block chords, each half the chord duration",
    subdivision: Subdivision::Half,
    lead: &[],
    slots: &[hit(All, 100)],
};

const QUARTER: Pattern = Pattern {
    name: "quarter",
    description: "A block chord on every beat",
    subdivision: Subdivision::Quarter,
    lead: &[],
    slots: &[hit(All, 100)],
};

const FOUR_ON_THE_FLOOR: Pattern = Pattern {
    name: "four-on-the-floor",
    description: "Driving chord on every beat with a light top-note tick on the off-beats",
    subdivision: Subdivision::Eighth,
    lead: &[],
    slots: &[hit(All, 115), hit(Top, 60).hold(Hold::HALF)],
};

// ── Arpeggios ───────────────────────────────────────────────────────────────

const ARPEGGIO_UP: Pattern = Pattern {
    name: "arpeggio-up",
    description: "Each chord note once, low to high, in equal slices",
    subdivision: Subdivision::PerNote,
    lead: &[],
    slots: &[hit(WalkUp, 100)],
};

const ARPEGGIO_DOWN: Pattern = Pattern {
    name: "arpeggio-down",
    description: "Each chord note once, high to low, in equal slices",
    subdivision: Subdivision::PerNote,
    lead: &[],
    slots: &[hit(WalkDown, 100)],
};

const ALBERTI_BASS: Pattern = Pattern {
    name: "alberti-bass",
    description: "Classical low-high-middle-high broken chord in eighths",
    subdivision: Subdivision::Eighth,
    lead: &[],
    slots: &[hit(Index(0), 95), hit(Index(2), 70), hit(Index(1), 80), hit(Index(2), 70)],
};

const TRIPLET_ARPEGGIO: Pattern = Pattern {
    name: "triplet-arpeggio",
    description: "Root, third and fifth as eighth-note triplets on every beat",
    subdivision: Subdivision::EighthTriplet,
    lead: &[],
    slots: &[hit(Index(0), 100), hit(Index(1), 80), hit(Index(2), 85)],
};

const CREEP_ARPEGGIO: Pattern = Pattern {
    name: "creep-arpeggio",
    description: "Slow rising and falling eighth-note arpeggio over four voices",
    subdivision: Subdivision::Eighth,
    lead: &[],
    slots: &[
        hit(Index(0), 100),
        hit(Index(1), 75),
        hit(Index(2), 85),
        hit(Index(3), 75),
        hit(Index(2), 85),
        hit(Index(1), 75),
        hit(Index(2), 85),
        hit(Index(3), 75),
    ],
};

const STAIRWAY_ARPEGGIO: Pattern = Pattern {
    name: "stairway-arpeggio",
    description: "Fingerpicked climb to the top voice with a pinch on the back half",
    subdivision: Subdivision::Eighth,
    lead: &[],
    slots: &[
        hit(Index(0), 90),
        hit(Index(2), 70),
        hit(Index(3), 80),
        hit(Index(4), 85),
        hit(Index(3), 80),
        hit(Index(2), 70),
        hit(Indices(&[1, 4]), 85),
        hit(Index(2), 70),
    ],
};

const HOTEL_CALIFORNIA: Pattern = Pattern {
    name: "hotel-california",
    description: "Bass note below the chord, then a rolling eighth-note arpeggio",
    subdivision: Subdivision::Eighth,
    lead: &[],
    slots: &[
        hit(OctaveDown(0), 95),
        hit(Index(1), 75),
        hit(Index(2), 80),
        hit(Index(3), 85),
        hit(Index(2), 80),
        hit(Index(1), 75),
        hit(Index(2), 80),
        hit(Index(3), 85),
    ],
};

const PIMA_ARPEGGIO: Pattern = Pattern {
    name: "pima-arpeggio",
    description: "Classical thumb-index-middle-ring pattern, thumb on the bass",
    subdivision: Subdivision::Eighth,
    lead: &[],
    slots: &[
        hit(OctaveDown(0), 95),
        hit(Index(1), 70),
        hit(Index(2), 75),
        hit(Index(3), 80),
    ],
};

// ── Fingerpicking ───────────────────────────────────────────────────────────

const TRAVIS_PICKING: Pattern = Pattern {
    name: "travis-picking",
    description: "Alternating thumb bass under syncopated treble notes",
    subdivision: Subdivision::Eighth,
    lead: &[],
    slots: &[
        hit(Indices(&[0, 4]), 100),
        hit(Index(3), 70),
        hit(Index(2), 90),
        hit(Index(4), 75),
        hit(Index(1), 95),
        hit(Index(3), 70),
        hit(Index(2), 90),
        hit(Index(4), 75),
    ],
};

const BLACKBIRD_PICK: Pattern = Pattern {
    name: "blackbird-pick",
    description: "Bass and melody pinched together, a middle voice in between",
    subdivision: Subdivision::Eighth,
    lead: &[],
    slots: &[
        hit(Indices(&[0, 4]), 95),
        hit(Index(2), 70),
        hit(Indices(&[1, 4]), 90),
        hit(Index(2), 70),
    ],
};

// ── Bass and chord ──────────────────────────────────────────────────────────

const BOOM_CHICK: Pattern = Pattern {
    name: "boom-chick",
    description: "Bass note an octave down on beat one, upper chord on the other beats",
    subdivision: Subdivision::Quarter,
    lead: &[hit(OctaveDown(0), 100)],
    slots: &[hit(Upper, 90)],
};

const COUNTRY_ALT_BASS: Pattern = Pattern {
    name: "country-alt-bass",
    description: "Root and fifth alternating in the bass with chord strums between",
    subdivision: Subdivision::Quarter,
    lead: &[],
    slots: &[
        hit(OctaveDown(0), 100),
        hit(Upper, 85),
        hit(OctaveDown(2), 95),
        hit(Upper, 85),
    ],
};

const STAND_BY_ME: Pattern = Pattern {
    name: "stand-by-me",
    description: "Dotted-quarter bass riff walking root, fifth and third",
    subdivision: Subdivision::Eighth,
    lead: &[],
    slots: &[
        hit(OctaveDown(0), 100).span(3),
        hit(OctaveDown(0), 85),
        hit(OctaveDown(2), 95).span(2),
        hit(OctaveDown(1), 85),
        hit(OctaveDown(2), 90),
    ],
};

const BOSSA_NOVA: Pattern = Pattern {
    name: "bossa-nova",
    description: "Root and fifth bass on one and three under syncopated chord jabs",
    subdivision: Subdivision::Eighth,
    lead: &[],
    slots: &[
        hit(OctaveDown(0), 95),
        hit(Upper, 70),
        REST,
        hit(Upper, 75),
        hit(OctaveDown(2), 90),
        REST,
        hit(Upper, 75),
        REST,
    ],
};

const SWEET_HOME_ALABAMA: Pattern = Pattern {
    name: "sweet-home-alabama",
    description: "Picked bass and chord tones mixed with down/up strums",
    subdivision: Subdivision::Eighth,
    lead: &[],
    slots: &[
        hit(OctaveDown(0), 100),
        hit(Index(2), 80),
        hit(Index(3), 85),
        hit(All, 95),
        REST,
        hit(Index(2), 80),
        hit(AllReversed, 80),
        hit(Index(1), 75),
    ],
};

// ── Strums ──────────────────────────────────────────────────────────────────

const POP_STRUM: Pattern = Pattern {
    name: "pop-strum",
    description: "Down, down, up, down, up in eighth notes",
    subdivision: Subdivision::Eighth,
    lead: &[],
    slots: &[
        hit(All, 100),
        hit(All, 90),
        hit(AllReversed, 80),
        hit(All, 100),
        hit(AllReversed, 80),
    ],
};

const ROCK_8TH: Pattern = Pattern {
    name: "rock-8th",
    description: "Straight eighth-note downstrokes, accented on the beat",
    subdivision: Subdivision::Eighth,
    lead: &[],
    slots: &[hit(All, 110), hit(All, 85)],
};

const LET_IT_BE: Pattern = Pattern {
    name: "let-it-be",
    description: "Steady piano-ballad eighths with accents on one and three",
    subdivision: Subdivision::Eighth,
    lead: &[],
    slots: &[
        hit(All, 100),
        hit(All, 65),
        hit(All, 80),
        hit(All, 65),
        hit(All, 95),
        hit(All, 65),
        hit(All, 80),
        hit(All, 65),
    ],
};

const TWIST_AND_SHOUT: Pattern = Pattern {
    name: "twist-and-shout",
    description: "Upbeat down/up strum with missed strokes for push",
    subdivision: Subdivision::Eighth,
    lead: &[],
    slots: &[
        hit(All, 110),
        REST,
        hit(AllReversed, 80),
        hit(All, 95),
        REST,
        hit(AllReversed, 80),
        hit(All, 100),
        hit(AllReversed, 80),
    ],
};

const WONDERWALL_STRUM: Pattern = Pattern {
    name: "wonderwall-strum",
    description: "Busy sixteenth-note strum with skipped strokes",
    subdivision: Subdivision::Sixteenth,
    lead: &[],
    slots: &[
        hit(All, 105),
        REST,
        hit(All, 90),
        hit(AllReversed, 70),
        REST,
        hit(AllReversed, 70),
        hit(All, 95),
        hit(AllReversed, 70),
        hit(All, 100),
        REST,
        hit(All, 90),
        hit(AllReversed, 70),
        REST,
        hit(AllReversed, 70),
        hit(All, 95),
        hit(AllReversed, 70),
    ],
};

const FUNK_16TH: Pattern = Pattern {
    name: "funk-16th",
    description: "Choppy sixteenth-note scratch rhythm with ghosted upstrokes",
    subdivision: Subdivision::Sixteenth,
    lead: &[],
    slots: &[
        hit(All, 110).hold(Hold::HALF),
        REST,
        hit(AllReversed, 60).hold(Hold::HALF),
        hit(All, 90).hold(Hold::HALF),
        REST,
        hit(AllReversed, 60).hold(Hold::HALF),
        hit(All, 100).hold(Hold::HALF),
        REST,
        REST,
        hit(AllReversed, 65).hold(Hold::HALF),
        hit(All, 95).hold(Hold::HALF),
        REST,
        hit(All, 105).hold(Hold::HALF),
        REST,
        hit(AllReversed, 60).hold(Hold::HALF),
        hit(All, 85).hold(Hold::HALF),
    ],
};

// ── Syncopation and off-beats ───────────────────────────────────────────────

const POP_STABS: Pattern = Pattern {
    name: "pop-stabs",
    description: "Short stabs in a 3-3-2 grouping of eighths",
    subdivision: Subdivision::Eighth,
    lead: &[],
    slots: &[
        hit(All, 110).hold(Hold::HALF),
        REST,
        REST,
        hit(All, 100).hold(Hold::HALF),
        REST,
        REST,
        hit(All, 105).hold(Hold::HALF),
        REST,
    ],
};

const REGGAE_SKANK: Pattern = Pattern {
    name: "reggae-skank",
    description: "Clipped upper-chord skank on beats two and four",
    subdivision: Subdivision::Eighth,
    lead: &[],
    slots: &[
        REST,
        REST,
        hit(Upper, 105).hold(Hold::THIRD),
        REST,
        REST,
        REST,
        hit(Upper, 105).hold(Hold::THIRD),
        REST,
    ],
};

const OFF_BEAT_8TH: Pattern = Pattern {
    name: "off-beat-8th",
    description: "Short chord on every off-beat eighth",
    subdivision: Subdivision::Eighth,
    lead: &[],
    slots: &[REST, hit(All, 95).hold(Hold::HALF)],
};

const PALM_MUTE_8TH: Pattern = Pattern {
    name: "palm-mute-8th",
    description: "Muted power-chord eighths",
    subdivision: Subdivision::Eighth,
    lead: &[],
    slots: &[
        hit(Indices(POWER), 90).hold(Hold::HALF),
        hit(Indices(POWER), 75).hold(Hold::HALF),
    ],
};

// ── Swing ───────────────────────────────────────────────────────────────────

const JAZZ_SWING: Pattern = Pattern {
    name: "jazz-swing",
    description: "Swung comping: long downstroke, short upstroke, on a triplet grid",
    subdivision: Subdivision::EighthTriplet,
    lead: &[],
    slots: &[
        hit(All, 90).span(2).hold(Hold::THREE_QUARTERS),
        hit(AllReversed, 65),
    ],
};

const BLUES_SHUFFLE: Pattern = Pattern {
    name: "blues-shuffle",
    description: "Long-short shuffle on root and fifth",
    subdivision: Subdivision::EighthTriplet,
    lead: &[],
    slots: &[hit(Indices(POWER), 100).span(2), hit(Indices(POWER), 70)],
};

/// Every pattern, in the order the pattern selector shows them.
pub static CATALOG: [Pattern; 31] = [
    WHOLE,
    HALF,
    QUARTER,
    ARPEGGIO_UP,
    ARPEGGIO_DOWN,
    BOOM_CHICK,
    POP_STRUM,
    TRAVIS_PICKING,
    ALBERTI_BASS,
    TRIPLET_ARPEGGIO,
    POP_STABS,
    BOSSA_NOVA,
    REGGAE_SKANK,
    FUNK_16TH,
    JAZZ_SWING,
    ROCK_8TH,
    LET_IT_BE,
    STAND_BY_ME,
    CREEP_ARPEGGIO,
    TWIST_AND_SHOUT,
    BLUES_SHUFFLE,
    SWEET_HOME_ALABAMA,
    STAIRWAY_ARPEGGIO,
    HOTEL_CALIFORNIA,
    WONDERWALL_STRUM,
    BLACKBIRD_PICK,
    PALM_MUTE_8TH,
    OFF_BEAT_8TH,
    COUNTRY_ALT_BASS,
    PIMA_ARPEGGIO,
    FOUR_ON_THE_FLOOR,
];

/// Look up a pattern by name.
pub fn find(name: &str) -> Option<&'static Pattern> {
    CATALOG.iter().find(|pattern| pattern.name == name)
}

/// Look up a pattern by name, falling back to `whole` for unknown names.
pub fn lookup(name: &str) -> &'static Pattern {
    find(name).unwrap_or_else(|| {
        log::debug!("unknown pattern {:?}, playing whole notes", name);
        &CATALOG[0]
    })
}

/// Names of every pattern, in catalog order.
pub fn pattern_names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|pattern| pattern.name)
}

pub fn is_known_pattern(name: &str) -> bool {
    find(name).is_some()
}
