//! Chordcall — a spoken chord drill for practicing voicings in any key and mode.

pub mod config;
pub mod drill;
pub mod speech;
pub mod theory;
