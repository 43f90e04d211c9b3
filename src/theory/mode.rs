//! Modes, described as semitone deltas relative to the major scale.

use std::fmt;
use std::str::FromStr;

use super::{TheoryError, DEGREES};

/// A diatonic mode (or minor-scale variant).
///
/// `major` and `minor` are not variants of their own: they are accepted as
/// names and canonicalized to [`Mode::Ionian`] and [`Mode::Aeolian`] when parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Lydian,
    Ionian,
    Mixolydian,
    Dorian,
    Aeolian,
    Phrygian,
    Locrian,
    HarmonicMinor,
    MelodicMinor,
}

/// Accepted names, aliases included. Lookup happens after lowercasing and
/// folding `-` and spaces to `_`.
const MODE_NAMES: [(&str, Mode); 11] = [
    ("lydian", Mode::Lydian),
    ("ionian", Mode::Ionian),
    ("major", Mode::Ionian),
    ("mixolydian", Mode::Mixolydian),
    ("dorian", Mode::Dorian),
    ("aeolian", Mode::Aeolian),
    ("minor", Mode::Aeolian),
    ("phrygian", Mode::Phrygian),
    ("locrian", Mode::Locrian),
    ("harmonic_minor", Mode::HarmonicMinor),
    ("melodic_minor", Mode::MelodicMinor),
];

impl Mode {
    pub const ALL: [Mode; 9] = [
        Mode::Lydian,
        Mode::Ionian,
        Mode::Mixolydian,
        Mode::Dorian,
        Mode::Aeolian,
        Mode::Phrygian,
        Mode::Locrian,
        Mode::HarmonicMinor,
        Mode::MelodicMinor,
    ];

    /// Per-degree semitone deltas applied on top of the major scale.
    pub fn deltas(self) -> [i8; DEGREES] {
        match self {
            Mode::Lydian => [0, 0, 0, 1, 0, 0, 0],
            Mode::Ionian => [0, 0, 0, 0, 0, 0, 0],
            Mode::Mixolydian => [0, 0, 0, 0, 0, 0, -1],
            Mode::Dorian => [0, 0, -1, 0, 0, 0, -1],
            Mode::Aeolian => [0, 0, -1, 0, 0, -1, -1],
            Mode::Phrygian => [0, -1, -1, 0, 0, -1, -1],
            Mode::Locrian => [0, -1, -1, 0, -1, -1, -1],
            Mode::HarmonicMinor => [0, 0, -1, 0, 0, -1, 0],
            Mode::MelodicMinor => [0, 0, -1, 0, 0, 0, 0],
        }
    }

    /// Canonical name (never an alias).
    pub fn name(self) -> &'static str {
        match self {
            Mode::Lydian => "lydian",
            Mode::Ionian => "ionian",
            Mode::Mixolydian => "mixolydian",
            Mode::Dorian => "dorian",
            Mode::Aeolian => "aeolian",
            Mode::Phrygian => "phrygian",
            Mode::Locrian => "locrian",
            Mode::HarmonicMinor => "harmonic_minor",
            Mode::MelodicMinor => "melodic_minor",
        }
    }

    /// Every name the parser accepts, aliases included.
    pub fn accepted_names() -> impl Iterator<Item = &'static str> {
        MODE_NAMES.iter().map(|(name, _)| *name)
    }
}

fn canonicalize(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

impl FromStr for Mode {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = canonicalize(s);
        MODE_NAMES
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, mode)| *mode)
            .ok_or_else(|| TheoryError::UnknownMode(s.to_string()))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_canonicalize() {
        assert_eq!("major".parse::<Mode>(), Ok(Mode::Ionian));
        assert_eq!("minor".parse::<Mode>(), Ok(Mode::Aeolian));
        assert_eq!(Mode::Ionian.name(), "ionian");
    }

    #[test]
    fn parse_is_forgiving_about_case_and_separators() {
        assert_eq!("Dorian".parse::<Mode>(), Ok(Mode::Dorian));
        assert_eq!("harmonic-minor".parse::<Mode>(), Ok(Mode::HarmonicMinor));
        assert_eq!("Melodic Minor".parse::<Mode>(), Ok(Mode::MelodicMinor));
    }

    #[test]
    fn unknown_mode_fails() {
        assert_eq!(
            "bebop".parse::<Mode>(),
            Err(TheoryError::UnknownMode("bebop".to_string()))
        );
    }

    #[test]
    fn deltas_stay_within_one_semitone() {
        for mode in Mode::ALL {
            assert!(mode.deltas().iter().all(|d| (-1..=1).contains(d)));
            assert_eq!(mode.deltas()[0], 0, "{mode} must not alter the root");
        }
    }

    #[test]
    fn every_name_round_trips() {
        for mode in Mode::ALL {
            assert_eq!(mode.name().parse::<Mode>(), Ok(mode));
        }
        assert_eq!(Mode::accepted_names().count(), 11);
    }
}
