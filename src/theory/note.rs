//! Note names — a letter plus an accidental, e.g. "C", "F#", "Ebb", "Gx".

use std::fmt;

use super::Accidental;

/// A natural letter name, in C-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// The natural C-major letter sequence.
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Position in the C-major letter sequence (C = 0 … B = 6).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The letter `steps` positions further along the cycle, wrapping after B.
    pub fn offset(self, steps: usize) -> Letter {
        Letter::ALL[(self.index() + steps) % Letter::ALL.len()]
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A spelled pitch class: letter plus accidental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Note {
    pub letter: Letter,
    pub accidental: Accidental,
}

impl Note {
    pub fn new(letter: Letter, accidental: Accidental) -> Self {
        Self { letter, accidental }
    }

    pub fn natural(letter: Letter) -> Self {
        Self::new(letter, Accidental::Natural)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.accidental)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_wraps_after_b() {
        assert_eq!(Letter::A.offset(2), Letter::C);
        assert_eq!(Letter::C.offset(7), Letter::C);
        assert_eq!(Letter::F.offset(4), Letter::C);
    }

    #[test]
    fn display_spells_accidental() {
        assert_eq!(Note::new(Letter::E, Accidental::Flat).to_string(), "Eb");
        assert_eq!(Note::new(Letter::F, Accidental::DoubleSharp).to_string(), "Fx");
        assert_eq!(Note::new(Letter::B, Accidental::DoubleFlat).to_string(), "Bbb");
        assert_eq!(Note::natural(Letter::G).to_string(), "G");
    }
}
