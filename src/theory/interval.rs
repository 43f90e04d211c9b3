//! Mode interval model — the third, fifth and seventh stacked on a scale degree.

use super::{Mode, TheoryError, DEGREES};

/// Semitones from the root for each degree of the major scale.
pub const MAJOR_SCALE_SEMITONES: [i8; DEGREES] = [0, 2, 4, 5, 7, 9, 11];

const OCTAVE_SEMITONES: i8 = 12;

/// Interval classes (in semitones) from a chord root to its chord tones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChordTones {
    pub third: i8,
    pub fifth: i8,
    pub seventh: i8,
}

/// Semitones from the tonic for each degree of `mode`.
pub fn mode_semitones(mode: Mode) -> [i8; DEGREES] {
    let deltas = mode.deltas();
    let mut table = MAJOR_SCALE_SEMITONES;
    for (semitones, delta) in table.iter_mut().zip(deltas) {
        *semitones += delta;
    }
    table
}

/// Semitone distance from `root` up `steps` scale degrees, adding an octave
/// for every wrap past the seventh degree.
fn interval_above(table: &[i8; DEGREES], root: usize, steps: usize) -> i8 {
    let index = root + steps;
    let octaves = (index / DEGREES) as i8;
    octaves * OCTAVE_SEMITONES + table[index % DEGREES] - table[root]
}

/// Stack thirds on a 0-based `degree` of `mode` and measure each chord tone.
pub fn chord_tones(degree: usize, mode: Mode) -> Result<ChordTones, TheoryError> {
    if degree >= DEGREES {
        return Err(TheoryError::InvalidDegree(degree));
    }
    let table = mode_semitones(mode);
    Ok(ChordTones {
        third: interval_above(&table, degree, 2),
        fifth: interval_above(&table, degree, 4),
        seventh: interval_above(&table, degree, 6),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tones(third: i8, fifth: i8, seventh: i8) -> ChordTones {
        ChordTones {
            third,
            fifth,
            seventh,
        }
    }

    #[test]
    fn ionian_tonic() {
        assert_eq!(chord_tones(0, Mode::Ionian), Ok(tones(4, 7, 11)));
    }

    #[test]
    fn ionian_dominant_wraps_octave() {
        assert_eq!(chord_tones(4, Mode::Ionian), Ok(tones(4, 7, 10)));
    }

    #[test]
    fn ionian_leading_tone() {
        assert_eq!(chord_tones(6, Mode::Ionian), Ok(tones(3, 6, 10)));
    }

    #[test]
    fn harmonic_minor_leading_tone_is_fully_diminished() {
        assert_eq!(chord_tones(6, Mode::HarmonicMinor), Ok(tones(3, 6, 9)));
    }

    #[test]
    fn mode_table_applies_deltas() {
        assert_eq!(mode_semitones(Mode::Aeolian), [0, 2, 3, 5, 7, 8, 10]);
        assert_eq!(mode_semitones(Mode::Lydian), [0, 2, 4, 6, 7, 9, 11]);
    }

    #[test]
    fn all_tones_are_positive_and_within_an_octave() {
        for mode in Mode::ALL {
            for degree in 0..DEGREES {
                let t = chord_tones(degree, mode).unwrap();
                assert!(0 < t.third && t.third < t.fifth && t.fifth < t.seventh);
                assert!(t.seventh < OCTAVE_SEMITONES, "{mode} degree {degree}");
            }
        }
    }

    #[test]
    fn degree_out_of_range() {
        assert_eq!(
            chord_tones(7, Mode::Ionian),
            Err(TheoryError::InvalidDegree(7))
        );
    }
}
