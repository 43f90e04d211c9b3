//! Major key signatures — the 15 canonical roots from seven flats to seven sharps.

use super::{Accidental, Letter, TheoryError};

/// Which accidental a key signature uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccidentalKind {
    Natural,
    Sharp,
    Flat,
}

impl AccidentalKind {
    pub fn accidental(self) -> Accidental {
        match self {
            AccidentalKind::Natural => Accidental::Natural,
            AccidentalKind::Sharp => Accidental::Sharp,
            AccidentalKind::Flat => Accidental::Flat,
        }
    }
}

/// One row of the major key signature table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySignature {
    /// Canonical spelling of the root, e.g. "Bb".
    pub root: &'static str,
    /// Bare letter of the root.
    pub letter: Letter,
    /// Number of accidentals, 0..=7.
    pub count: u8,
    pub kind: AccidentalKind,
}

// Sharps are added F C G D A E B (a fifth apart), flats B E A D G C F (a fourth apart),
// expressed as index and stride in the C-major letter sequence.
const SHARP_START: usize = 3;
const SHARP_STEP: usize = 4;
const FLAT_START: usize = 6;
const FLAT_STEP: usize = 3;

impl KeySignature {
    /// Letters carrying the signature's accidental, in the order they are added.
    pub fn altered_letters(&self) -> impl Iterator<Item = Letter> {
        let (start, step) = match self.kind {
            AccidentalKind::Flat => (FLAT_START, FLAT_STEP),
            _ => (SHARP_START, SHARP_STEP),
        };
        (0..self.count as usize).map(move |i| Letter::ALL[(start + i * step) % Letter::ALL.len()])
    }

    /// Accidental carried by `letter` in this key.
    pub fn accidental_of(&self, letter: Letter) -> Accidental {
        if self.altered_letters().any(|l| l == letter) {
            self.kind.accidental()
        } else {
            Accidental::Natural
        }
    }
}

const fn entry(root: &'static str, letter: Letter, count: u8, kind: AccidentalKind) -> KeySignature {
    KeySignature {
        root,
        letter,
        count,
        kind,
    }
}

static MAJOR_KEY_SIGNATURES: [KeySignature; 15] = [
    entry("C", Letter::C, 0, AccidentalKind::Natural),
    entry("G", Letter::G, 1, AccidentalKind::Sharp),
    entry("D", Letter::D, 2, AccidentalKind::Sharp),
    entry("A", Letter::A, 3, AccidentalKind::Sharp),
    entry("E", Letter::E, 4, AccidentalKind::Sharp),
    entry("B", Letter::B, 5, AccidentalKind::Sharp),
    entry("F#", Letter::F, 6, AccidentalKind::Sharp),
    entry("C#", Letter::C, 7, AccidentalKind::Sharp),
    entry("F", Letter::F, 1, AccidentalKind::Flat),
    entry("Bb", Letter::B, 2, AccidentalKind::Flat),
    entry("Eb", Letter::E, 3, AccidentalKind::Flat),
    entry("Ab", Letter::A, 4, AccidentalKind::Flat),
    entry("Db", Letter::D, 5, AccidentalKind::Flat),
    entry("Gb", Letter::G, 6, AccidentalKind::Flat),
    entry("Cb", Letter::C, 7, AccidentalKind::Flat),
];

/// Normalize user input to canonical root casing: "bb" → "Bb", "f#" → "F#".
pub fn normalize_root(root: &str) -> String {
    let root = root.trim();
    let mut chars = root.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Look up the key signature of a major key root (case-insensitive).
pub fn key_signature(root: &str) -> Result<KeySignature, TheoryError> {
    let normalized = normalize_root(root);
    MAJOR_KEY_SIGNATURES
        .iter()
        .find(|sig| sig.root == normalized)
        .copied()
        .ok_or_else(|| TheoryError::UnknownKey(root.to_string()))
}

/// All 15 canonical root spellings.
pub fn canonical_roots() -> impl Iterator<Item = &'static str> {
    MAJOR_KEY_SIGNATURES.iter().map(|sig| sig.root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn c_major_has_no_accidentals() {
        let sig = key_signature("C").unwrap();
        assert_eq!(sig.count, 0);
        assert_eq!(sig.kind, AccidentalKind::Natural);
        assert_eq!(sig.altered_letters().count(), 0);
    }

    #[test]
    fn sharps_follow_circle_of_fifths() {
        let sig = key_signature("C#").unwrap();
        let letters: Vec<Letter> = sig.altered_letters().collect();
        use Letter::*;
        assert_eq!(letters, vec![F, C, G, D, A, E, B]);
    }

    #[test]
    fn flats_follow_circle_of_fourths() {
        let sig = key_signature("Cb").unwrap();
        let letters: Vec<Letter> = sig.altered_letters().collect();
        use Letter::*;
        assert_eq!(letters, vec![B, E, A, D, G, C, F]);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(key_signature("bb").unwrap().root, "Bb");
        assert_eq!(key_signature("f#").unwrap().root, "F#");
        assert_eq!(key_signature(" eb ").unwrap().count, 3);
    }

    #[test]
    fn unknown_roots_fail() {
        for root in ["H", "Fb", "E#", "Cbb", "", "G##"] {
            assert_eq!(
                key_signature(root),
                Err(TheoryError::UnknownKey(root.to_string())),
                "{root:?} should not be a key"
            );
        }
    }

    #[test]
    fn table_invariants() {
        assert_eq!(canonical_roots().count(), 15);
        for root in canonical_roots() {
            let sig = key_signature(root).unwrap();
            assert!(sig.count <= 7);
            assert_eq!(sig.kind == AccidentalKind::Natural, sig.count == 0);
            assert!(root.starts_with(sig.letter.as_char()));
        }
    }

    #[test]
    fn accidental_of_f_in_g_major() {
        let sig = key_signature("G").unwrap();
        assert_eq!(sig.accidental_of(Letter::F), Accidental::Sharp);
        assert_eq!(sig.accidental_of(Letter::C), Accidental::Natural);
    }
}
