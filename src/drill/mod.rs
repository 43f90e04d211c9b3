//! Prompt generation — chromatic random chords or diatonic degrees of a key.
//!
//! A [`Drill`] owns a seeded `ChaCha8Rng` so a session can be replayed from
//! its seed. It remembers the previous chord (or degree) and never hands out
//! the same one twice in a row.

pub mod pick;
pub mod random;
pub mod session;

pub use pick::{pick_distinct, DEFAULT_MAX_RETRIES};
pub use random::random_chord;
pub use session::{Pacer, SessionError, SessionOptions, ThreadPacer};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::theory::{build_scale, diatonic_chord, key, Chord, Mode, Scale, TheoryError, DEGREES};

/// One prompt of a practice session.
#[derive(Debug, Clone, PartialEq)]
pub enum Prompt {
    /// A chord symbol to play straight away.
    Chromatic { chord: Chord },
    /// A degree question ("5 of G major"), followed by its answer.
    Diatonic {
        degree: usize,
        question: String,
        chord: Chord,
    },
}

impl Prompt {
    pub fn chord(&self) -> &Chord {
        match self {
            Prompt::Chromatic { chord } | Prompt::Diatonic { chord, .. } => chord,
        }
    }
}

#[derive(Debug, Clone)]
enum Source {
    Chromatic {
        last: Option<Chord>,
    },
    Diatonic {
        root: String,
        mode: Mode,
        mode_name: String,
        scale: Scale,
        last: Option<usize>,
    },
}

/// Prompt generator for one practice session.
#[derive(Debug, Clone)]
pub struct Drill {
    source: Source,
    rng: ChaCha8Rng,
    max_retries: u32,
}

impl Drill {
    /// Random chords across all twelve pitch classes.
    pub fn chromatic(seed: u64) -> Self {
        Self {
            source: Source::Chromatic { last: None },
            rng: ChaCha8Rng::seed_from_u64(seed),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Random degrees of `root` in the mode named `mode_name`.
    ///
    /// The scale is built once here, so a bad key or mode fails before the
    /// first prompt.
    pub fn diatonic(root: &str, mode_name: &str, seed: u64) -> Result<Self, TheoryError> {
        let mode: Mode = mode_name.parse()?;
        let scale = build_scale(root, mode)?;
        Ok(Self {
            source: Source::Diatonic {
                root: key::normalize_root(root),
                mode,
                mode_name: mode_name.trim().to_string(),
                scale,
                last: None,
            },
            rng: ChaCha8Rng::seed_from_u64(seed),
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// The session scale, for diatonic drills.
    pub fn scale(&self) -> Option<&Scale> {
        match &self.source {
            Source::Diatonic { scale, .. } => Some(scale),
            Source::Chromatic { .. } => None,
        }
    }

    /// Generate the next prompt, never repeating the previous one.
    pub fn next_prompt(&mut self) -> Result<Prompt, TheoryError> {
        let Self {
            source,
            rng,
            max_retries,
        } = self;

        let prompt = match source {
            Source::Chromatic { last } => {
                let chord = pick_distinct(last.as_ref(), *max_retries, || random_chord(rng));
                *last = Some(chord);
                Prompt::Chromatic { chord }
            }
            Source::Diatonic {
                root,
                mode,
                mode_name,
                scale,
                last,
            } => {
                let degree =
                    pick_distinct(last.as_ref(), *max_retries, || rng.gen_range(0..DEGREES));
                *last = Some(degree);
                let chord = diatonic_chord(scale, degree, *mode)?;
                if !chord.quality.is_classified() {
                    warn!(%chord, degree, %mode, "no known chord quality, announcing the root alone");
                }
                Prompt::Diatonic {
                    degree,
                    question: format!("{} of {} {}", degree + 1, root, mode_name),
                    chord,
                }
            }
        };

        debug!(chord = %prompt.chord(), "generated prompt");
        Ok(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chromatic_never_repeats() {
        let mut drill = Drill::chromatic(1);
        let mut previous = drill.next_prompt().unwrap();
        for _ in 0..500 {
            let next = drill.next_prompt().unwrap();
            assert_ne!(next, previous);
            previous = next;
        }
    }

    #[test]
    fn diatonic_never_repeats_degree() {
        let mut drill = Drill::diatonic("G", "major", 9).unwrap();
        let mut previous = None;
        for _ in 0..500 {
            let Prompt::Diatonic { degree, .. } = drill.next_prompt().unwrap() else {
                panic!("expected a diatonic prompt");
            };
            assert_ne!(Some(degree), previous);
            previous = Some(degree);
        }
    }

    #[test]
    fn diatonic_question_and_answer() {
        let mut drill = Drill::diatonic("bb", "minor", 5).unwrap();
        let scale = *drill.scale().unwrap();
        for _ in 0..20 {
            let Prompt::Diatonic {
                degree,
                question,
                chord,
            } = drill.next_prompt().unwrap()
            else {
                panic!("expected a diatonic prompt");
            };
            assert_eq!(question, format!("{} of Bb minor", degree + 1));
            assert_eq!(chord.root, scale.degree(degree).unwrap());
        }
    }

    #[test]
    fn same_seed_replays_session() {
        let mut a = Drill::diatonic("D", "dorian", 77).unwrap();
        let mut b = Drill::diatonic("D", "dorian", 77).unwrap();
        for _ in 0..50 {
            assert_eq!(a.next_prompt().unwrap(), b.next_prompt().unwrap());
        }
    }

    #[test]
    fn bad_configuration_fails_up_front() {
        assert!(matches!(
            Drill::diatonic("H", "major", 0),
            Err(TheoryError::UnknownKey(_))
        ));
        assert!(matches!(
            Drill::diatonic("C", "bebop", 0),
            Err(TheoryError::UnknownMode(_))
        ));
    }

    #[test]
    fn chromatic_has_no_scale() {
        let drill = Drill::chromatic(0);
        assert!(drill.scale().is_none());
    }
}
