//! Scale builder — spells the seven notes of a key in a given mode.
//!
//! Starts from C major, applies the key signature, rotates to the root letter,
//! then folds each mode delta into the accidental already present. Letters are
//! never respelled, so Db stays Db and a lowered B in a flat key becomes Bbb.

use std::fmt;

use super::{key_signature, Letter, Mode, Note, TheoryError, DEGREES};

/// The seven notes of a key/mode, starting on the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scale {
    notes: [Note; DEGREES],
}

impl Scale {
    pub fn notes(&self) -> &[Note; DEGREES] {
        &self.notes
    }

    /// The note on a 0-based degree.
    pub fn degree(&self, degree: usize) -> Result<Note, TheoryError> {
        self.notes
            .get(degree)
            .copied()
            .ok_or(TheoryError::InvalidDegree(degree))
    }

    pub fn root(&self) -> Note {
        self.notes[0]
    }

    /// Spelled note names, e.g. `["G", "A", "B", "C", "D", "E", "F#"]`.
    pub fn names(&self) -> Vec<String> {
        self.notes.iter().map(Note::to_string).collect()
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, note) in self.notes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{note}")?;
        }
        Ok(())
    }
}

/// Build the scale of `root` (one of the 15 canonical major keys) in `mode`.
pub fn build_scale(root: &str, mode: Mode) -> Result<Scale, TheoryError> {
    let signature = key_signature(root)?;
    let deltas = mode.deltas();

    let mut notes = [Note::natural(Letter::C); DEGREES];
    for (degree, slot) in notes.iter_mut().enumerate() {
        let letter = signature.letter.offset(degree);
        let accidental = signature.accidental_of(letter).shifted(deltas[degree])?;
        *slot = Note::new(letter, accidental);
    }

    Ok(Scale { notes })
}

/// [`build_scale`], returned as spelled names.
pub fn get_scale(root: &str, mode: Mode) -> Result<Vec<String>, TheoryError> {
    build_scale(root, mode).map(|scale| scale.names())
}
