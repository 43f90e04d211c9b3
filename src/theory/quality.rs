//! Chord quality classifier — maps stacked intervals to a chord symbol suffix.

use std::fmt;

use super::{chord_tones, ChordTones, Mode, TheoryError};

const MINOR_THIRD: i8 = 3;
const MAJOR_THIRD: i8 = 4;
const DIMINISHED_FIFTH: i8 = 6;
const PERFECT_FIFTH: i8 = 7;
const AUGMENTED_FIFTH: i8 = 8;
const DIMINISHED_SEVENTH: i8 = 9;
const MINOR_SEVENTH: i8 = 10;
const MAJOR_SEVENTH: i8 = 11;

/// Quality of a chord built by stacking thirds.
///
/// [`ChordQuality::Major`] and [`ChordQuality::Unclassified`] both render as an
/// empty suffix: a major triad is written as its bare root, and interval
/// combinations outside the rule table degrade to the bare root too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChordQuality {
    Major,
    Augmented,
    MajorSeventh,
    DominantSeventh,
    AugmentedMajorSeventh,
    AugmentedSeventh,
    Minor,
    MinorMajorSeventh,
    MinorSeventh,
    HalfDiminished,
    DiminishedSeventh,
    Unclassified,
}

impl ChordQuality {
    /// Classify a chord from its third, fifth and seventh.
    ///
    /// A major third allows an additive `aug` prefix before the seventh
    /// suffix. With a minor third, the diminished-fifth chords replace the
    /// whole label instead of extending `min`.
    pub fn classify(tones: ChordTones) -> Self {
        use ChordQuality::*;

        match tones.third {
            MAJOR_THIRD => {
                let augmented = tones.fifth == AUGMENTED_FIFTH;
                match (augmented, tones.seventh) {
                    (false, MAJOR_SEVENTH) => MajorSeventh,
                    (false, MINOR_SEVENTH) => DominantSeventh,
                    (false, _) => Major,
                    (true, MAJOR_SEVENTH) => AugmentedMajorSeventh,
                    (true, MINOR_SEVENTH) => AugmentedSeventh,
                    (true, _) => Augmented,
                }
            }
            MINOR_THIRD => match (tones.fifth, tones.seventh) {
                (PERFECT_FIFTH, MAJOR_SEVENTH) => MinorMajorSeventh,
                (PERFECT_FIFTH, MINOR_SEVENTH) => MinorSeventh,
                (PERFECT_FIFTH, _) => Minor,
                (DIMINISHED_FIFTH, MINOR_SEVENTH) => HalfDiminished,
                (DIMINISHED_FIFTH, DIMINISHED_SEVENTH) => DiminishedSeventh,
                _ => Unclassified,
            },
            _ => Unclassified,
        }
    }

    /// Chord symbol suffix, e.g. "maj7", "min7", "m7b5".
    pub fn label(self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Augmented => "aug",
            ChordQuality::MajorSeventh => "maj7",
            ChordQuality::DominantSeventh => "7",
            ChordQuality::AugmentedMajorSeventh => "augmaj7",
            ChordQuality::AugmentedSeventh => "aug7",
            ChordQuality::Minor => "min",
            ChordQuality::MinorMajorSeventh => "minmaj7",
            ChordQuality::MinorSeventh => "min7",
            ChordQuality::HalfDiminished => "m7b5",
            ChordQuality::DiminishedSeventh => "dim7",
            ChordQuality::Unclassified => "",
        }
    }

    pub fn is_classified(self) -> bool {
        self != ChordQuality::Unclassified
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Quality of the seventh chord on a 0-based `degree` of `mode`.
pub fn chord_quality(degree: usize, mode: Mode) -> Result<ChordQuality, TheoryError> {
    chord_tones(degree, mode).map(ChordQuality::classify)
}
