//! Chord symbol parsing and transposition
//!
//! Splits chord names (C, F#m7, Bbmaj7, ...) into a root pitch class and a
//! quality suffix, and moves them around the chromatic circle.

/// Pitch class of a note name, C = 0 through B = 11.
pub type PitchClass = u8;

/// Sharp spellings of the twelve pitch classes, indexed by [`PitchClass`].
pub const CHROMATIC: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat roots accepted on input and the sharp they are looked up as.
const FLAT_TO_SHARP: [(&str, &str); 5] = [
    ("Db", "C#"),
    ("Eb", "D#"),
    ("Gb", "F#"),
    ("Ab", "G#"),
    ("Bb", "A#"),
];

/// Map an accidental character to its ASCII spelling.
fn accidental(c: char) -> Option<char> {
    match c {
        '#' | '♯' => Some('#'),
        'b' | '♭' => Some('b'),
        _ => None,
    }
}

/// Byte length of the root (letter plus optional accidental) at the start of `symbol`.
fn root_len(symbol: &str) -> usize {
    let mut chars = symbol.chars();
    let Some(letter) = chars.next() else {
        return 0;
    };
    match chars.next() {
        Some(c) if accidental(c).is_some() => letter.len_utf8() + c.len_utf8(),
        _ => letter.len_utf8(),
    }
}

/// Semitone index (0-11) of the root of a chord name, or `None` if the root
/// cannot be identified.
///
/// # Examples
/// ```
/// use chordmidi::chord::root_index;
///
/// assert_eq!(root_index("C"), Some(0));
/// assert_eq!(root_index("F#m7"), Some(6));
/// assert_eq!(root_index("Bbm"), Some(10));
/// assert_eq!(root_index(""), None);
/// ```
pub fn root_index(symbol: &str) -> Option<PitchClass> {
    let mut chars = symbol.chars();
    let letter = chars.next()?;

    let mut root = String::with_capacity(2);
    root.push(letter);
    if let Some(acc) = chars.next().and_then(accidental) {
        root.push(acc);
    }

    let root = FLAT_TO_SHARP
        .iter()
        .find(|(flat, _)| *flat == root)
        .map_or(root.as_str(), |(_, sharp)| *sharp);

    CHROMATIC
        .iter()
        .position(|name| *name == root)
        .map(|i| i as PitchClass)
}

/// Everything after the root letter and optional accidental.
///
/// An empty suffix means a plain major triad.
pub fn suffix(symbol: &str) -> &str {
    &symbol[root_len(symbol)..]
}

/// Pitch class of a bare key name such as `"G"`, `"F#"` or `"Bb"`.
///
/// Unlike [`root_index`] the whole string must be a note name; `"Am"` is not a key.
pub fn pitch_class(name: &str) -> Option<PitchClass> {
    if name.is_empty() || root_len(name) != name.len() {
        return None;
    }
    root_index(name)
}

/// Shift a chord name by `semitones` (may be negative).
///
/// Chords whose root cannot be identified are returned unchanged. The new root
/// is always spelled with sharps.
///
/// # Examples
/// ```
/// use chordmidi::chord::transpose;
///
/// assert_eq!(transpose("C", 7), "G");
/// assert_eq!(transpose("F#m7", 6), "Cm7");
/// assert_eq!(transpose("Bb", 2), "C");
/// assert_eq!(transpose("N.C.", 3), "N.C.");
/// ```
pub fn transpose(symbol: &str, semitones: i32) -> String {
    let Some(root) = root_index(symbol) else {
        return symbol.to_string();
    };
    let shifted = (i32::from(root) + semitones).rem_euclid(12) as usize;
    format!("{}{}", CHROMATIC[shifted], suffix(symbol))
}

/// Number of semitones (0-11) to move up from `from_key` to reach `to_key`.
///
/// Returns 0 when either key is not a recognizable note name.
pub fn semitone_distance(from_key: &str, to_key: &str) -> i32 {
    match (pitch_class(from_key), pitch_class(to_key)) {
        (Some(from), Some(to)) => (i32::from(to) - i32::from(from)).rem_euclid(12),
        _ => 0,
    }
}

/// Transpose a whole progression from `from_key` to `to_key`.
///
/// Returns the distance used and each chord paired with its transposed name.
///
/// # Example
/// ```
/// use chordmidi::chord::transpose_progression;
///
/// let (semitones, pairs) = transpose_progression("G", "A", &["G", "Em7", "C"]);
/// assert_eq!(semitones, 2);
/// assert_eq!(pairs[1], ("Em7".to_string(), "F#m7".to_string()));
/// ```
pub fn transpose_progression<S: AsRef<str>>(
    from_key: &str,
    to_key: &str,
    chords: &[S],
) -> (i32, Vec<(String, String)>) {
    let semitones = semitone_distance(from_key, to_key);
    let pairs = chords
        .iter()
        .map(|chord| {
            let chord = chord.as_ref();
            (chord.to_string(), transpose(chord, semitones))
        })
        .collect();
    (semitones, pairs)
}
