//! Music theory engine — key signatures, modal scales, and diatonic chord qualities.
//!
//! Everything here is pure lookup and arithmetic. A practice session builds one
//! [`Scale`] up front and then asks for a [`ChordQuality`] per prompt.

pub mod accidental;
pub mod chord;
pub mod error;
pub mod interval;
pub mod key;
pub mod mode;
pub mod note;
pub mod quality;
pub mod scale;

pub use accidental::Accidental;
pub use chord::{diatonic_chord, diatonic_chords, Chord};
pub use error::TheoryError;
pub use interval::{chord_tones, ChordTones};
pub use key::{canonical_roots, key_signature, AccidentalKind, KeySignature};
pub use mode::Mode;
pub use note::{Letter, Note};
pub use quality::{chord_quality, ChordQuality};
pub use scale::{build_scale, get_scale, Scale};

/// Number of scale degrees (and letter names) in a diatonic scale.
pub const DEGREES: usize = 7;
