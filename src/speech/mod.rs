//! Speech — turning chord symbols into speakable text and handing it to a synthesizer.

pub mod command;
pub mod config;

pub use command::{wav_duration, CommandSpeaker};
pub use config::SpeechConfig;

use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors from the speech collaborator.
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("{0} command is empty")]
    EmptyCommand(&'static str),
    #[error("failed to start {program:?}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("{program:?} exited with {status}")]
    Failed { program: String, status: ExitStatus },
    #[error("synthesized audio is not a valid WAV file: {0}")]
    Wav(#[from] hound::Error),
    #[error("synthesized audio is empty")]
    EmptyAudio,
    #[error("speech I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Something that can say a line of text out loud, blocking until done.
pub trait Speaker {
    fn say(&mut self, text: &str) -> Result<(), SpeechError>;
}

/// A speaker that stays quiet; prompts are only printed.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSpeaker;

impl Speaker for SilentSpeaker {
    fn say(&mut self, _text: &str) -> Result<(), SpeechError> {
        Ok(())
    }
}

/// Ordered text substitutions for reading chord symbols aloud.
///
/// Order matters: "m7b5" only becomes "half-diminished" after "b" has turned
/// into " flat", and "7" is replaced last so it isn't caught by earlier rules.
/// "x" must follow "b" because " double sharp" contains a "b".
const PRONUNCIATION_RULES: [(&str, &str); 10] = [
    ("A", "A-"),
    ("#", " sharp"),
    ("b", " flat"),
    ("x", " double sharp"),
    ("min", " minor"),
    ("maj", " major"),
    ("dim", " diminished"),
    ("m7 flat5", " half-diminished"),
    ("aug", " augmented"),
    ("7", " seven"),
];

/// Spell a chord symbol the way it should be spoken, e.g.
/// "Ebmaj7" → "E flat major seven".
pub fn pronounce(chord: &str) -> String {
    PRONUNCIATION_RULES
        .iter()
        .fold(chord.to_string(), |text, (from, to)| text.replace(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_diminished() {
        assert_eq!(pronounce("Dm7b5"), "D half-diminished");
        assert!(!pronounce("Dm7b5").contains('7'));
    }

    #[test]
    fn a_is_not_an_article() {
        assert_eq!(pronounce("Amin7"), "A- minor seven");
        assert_eq!(pronounce("Abmaj7"), "A- flat major seven");
    }

    #[test]
    fn sharps_flats_and_sevenths() {
        assert_eq!(pronounce("F#7"), "F sharp seven");
        assert_eq!(pronounce("Ebmaj7"), "E flat major seven");
        assert_eq!(pronounce("Cdim7"), "C diminished seven");
        assert_eq!(pronounce("Gminmaj7"), "G minor major seven");
    }

    #[test]
    fn augmented_and_double_accidentals() {
        assert_eq!(pronounce("Caugmaj7"), "C augmented major seven");
        assert_eq!(pronounce("Bbb"), "B flat flat");
        assert_eq!(pronounce("Fx"), "F double sharp");
    }

    #[test]
    fn bare_root_is_untouched() {
        assert_eq!(pronounce("G"), "G");
    }

    #[test]
    fn silent_speaker_accepts_anything() {
        assert!(SilentSpeaker.say("C major seven").is_ok());
    }
}
