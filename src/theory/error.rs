//! Error types for the theory engine.

use thiserror::Error;

use super::{canonical_roots, Mode};

/// A lookup failure in the theory tables.
///
/// These all point at a bad key/mode combination rather than a transient
/// condition, so callers should stop instead of retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    #[error("unknown key root {0:?} (expected one of {roots})", roots = join(canonical_roots()))]
    UnknownKey(String),
    #[error("unknown mode {0:?} (expected one of {names})", names = join(Mode::accepted_names()))]
    UnknownMode(String),
    #[error("no accidental spells a {0:+} semitone offset")]
    AccidentalOutOfRange(i8),
    #[error("scale degree {0} out of range (expected 0..7)")]
    InvalidDegree(usize),
}

fn join(names: impl Iterator<Item = &'static str>) -> String {
    names.collect::<Vec<_>>().join(" ")
}
