//! Speech through external programs: synthesize to a temporary WAV, then play it.

use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;

use tracing::debug;

use super::config::WAV_PLACEHOLDER;
use super::{SpeechConfig, SpeechError, Speaker};

/// Speaks by running a synthesizer command and then a player command.
#[derive(Debug, Clone)]
pub struct CommandSpeaker {
    synth: Vec<String>,
    player: Vec<String>,
}

impl CommandSpeaker {
    pub fn new(config: &SpeechConfig) -> Result<Self, SpeechError> {
        if config.synth.is_empty() {
            return Err(SpeechError::EmptyCommand("synth"));
        }
        if config.player.is_empty() {
            return Err(SpeechError::EmptyCommand("player"));
        }
        Ok(Self {
            synth: config.synth.clone(),
            player: config.player.clone(),
        })
    }
}

impl Speaker for CommandSpeaker {
    fn say(&mut self, text: &str) -> Result<(), SpeechError> {
        let wav = tempfile::Builder::new()
            .prefix("chordcall-")
            .suffix(".wav")
            .tempfile()?;

        run(&self.synth, wav.path(), Some(text))?;
        let length = wav_duration(wav.path())?;
        debug!(text, ?length, "synthesized speech");
        run(&self.player, wav.path(), None)?;
        Ok(())
    }
}

/// Run `command` with `{wav}` substituted, optionally feeding `input` on stdin,
/// and wait for it to exit successfully.
fn run(command: &[String], wav: &Path, input: Option<&str>) -> Result<(), SpeechError> {
    let (program, args) = command
        .split_first()
        .ok_or(SpeechError::EmptyCommand("speech"))?;
    let wav = wav.to_string_lossy();

    let mut child = Command::new(program)
        .args(args.iter().map(|arg| arg.replace(WAV_PLACEHOLDER, &wav)))
        .stdin(if input.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::null())
        .spawn()
        .map_err(|source| SpeechError::Spawn {
            program: program.clone(),
            source,
        })?;

    if let (Some(text), Some(mut stdin)) = (input, child.stdin.take()) {
        // A program that exits without reading closes the pipe; its exit
        // status is the error worth reporting.
        match writeln!(stdin, "{text}") {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                debug!(program = %program, "stdin closed before the text was written");
            }
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(e.into());
            }
        }
    }

    let status = child.wait()?;
    if !status.success() {
        return Err(SpeechError::Failed {
            program: program.clone(),
            status,
        });
    }
    Ok(())
}

/// Playback length of a WAV file.
pub fn wav_duration(path: &Path) -> Result<Duration, SpeechError> {
    let reader = hound::WavReader::open(path)?;
    let frames = reader.duration();
    if frames == 0 {
        return Err(SpeechError::EmptyAudio);
    }
    Ok(Duration::from_secs_f64(
        frames as f64 / reader.spec().sample_rate as f64,
    ))
}
