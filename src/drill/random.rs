//! Chromatic chord selection — any letter, any incidental, one of five qualities.

use rand::Rng;

use crate::theory::{Accidental, Chord, ChordQuality, Letter, Note};

/// Incidentals a random root may carry.
pub const INCIDENTALS: [Accidental; 3] = [Accidental::Sharp, Accidental::Flat, Accidental::Natural];

/// Qualities drilled in chromatic mode.
pub const QUALITIES: [ChordQuality; 5] = [
    ChordQuality::MajorSeventh,
    ChordQuality::MinorSeventh,
    ChordQuality::DominantSeventh,
    ChordQuality::DiminishedSeventh,
    ChordQuality::HalfDiminished,
];

/// Pick a letter, incidental and quality independently and uniformly.
pub fn random_chord<R: Rng + ?Sized>(rng: &mut R) -> Chord {
    let letter = Letter::ALL[rng.gen_range(0..Letter::ALL.len())];
    let incidental = INCIDENTALS[rng.gen_range(0..INCIDENTALS.len())];
    let quality = QUALITIES[rng.gen_range(0..QUALITIES.len())];
    Chord::new(Note::new(letter, incidental), quality)
}
