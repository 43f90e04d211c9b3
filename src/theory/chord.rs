//! Chords — a spelled root plus a quality suffix.

use std::fmt;

use super::{build_scale, chord_quality, ChordQuality, Mode, Note, Scale, TheoryError, DEGREES};

/// A chord symbol such as "F#m7b5" or "Ebmaj7".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chord {
    pub root: Note,
    pub quality: ChordQuality,
}

impl Chord {
    pub fn new(root: Note, quality: ChordQuality) -> Self {
        Self { root, quality }
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.quality)
    }
}

/// The seventh chord on a 0-based degree of an already-built scale.
pub fn diatonic_chord(scale: &Scale, degree: usize, mode: Mode) -> Result<Chord, TheoryError> {
    let root = scale.degree(degree)?;
    let quality = chord_quality(degree, mode)?;
    Ok(Chord::new(root, quality))
}

/// All seven diatonic seventh chords of `root` in `mode`.
pub fn diatonic_chords(root: &str, mode: Mode) -> Result<Vec<Chord>, TheoryError> {
    let scale = build_scale(root, mode)?;
    (0..DEGREES)
        .map(|degree| diatonic_chord(&scale, degree, mode))
        .collect()
}
