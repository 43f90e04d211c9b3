//! Accidentals and the semitone-offset ↔ spelling table.

use std::fmt;

use super::TheoryError;

/// An accidental attached to a letter name, from double flat to double sharp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Accidental {
    DoubleFlat,
    Flat,
    Natural,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    /// Look up the accidental for a semitone offset in `-2..=2`.
    pub fn from_semitones(semitones: i8) -> Result<Self, TheoryError> {
        match semitones {
            -2 => Ok(Accidental::DoubleFlat),
            -1 => Ok(Accidental::Flat),
            0 => Ok(Accidental::Natural),
            1 => Ok(Accidental::Sharp),
            2 => Ok(Accidental::DoubleSharp),
            _ => Err(TheoryError::AccidentalOutOfRange(semitones)),
        }
    }

    pub fn semitones(self) -> i8 {
        match self {
            Accidental::DoubleFlat => -2,
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "bb",
            Accidental::Flat => "b",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "x",
        }
    }

    /// Apply a semitone shift, failing if the result can't be spelled.
    pub fn shifted(self, delta: i8) -> Result<Self, TheoryError> {
        Self::from_semitones(self.semitones() + delta)
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
