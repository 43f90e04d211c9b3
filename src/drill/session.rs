//! Practice loop — print, speak, pause, repeat until stopped.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, info};

use super::{Drill, Prompt};
use crate::speech::{pronounce, SpeechError, Speaker};
use crate::theory::TheoryError;

/// Longest uninterrupted sleep while pausing, so Ctrl-C is noticed quickly.
const PAUSE_SLICE: Duration = Duration::from_millis(50);

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Theory(#[from] TheoryError),
    #[error(transparent)]
    Speech(#[from] SpeechError),
    #[error("failed to write prompt: {0}")]
    Io(#[from] io::Error),
    #[error("invalid prompt duration {0} s (must be a finite, non-negative number)")]
    InvalidDuration(f64),
}

/// Timing and length of a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionOptions {
    /// Time given to play each chord.
    pub prompt: Duration,
    /// Stop after this many prompts; `None` runs until stopped.
    pub count: Option<usize>,
}

impl SessionOptions {
    pub fn new(seconds: f64, count: Option<usize>) -> Result<Self, SessionError> {
        let prompt =
            Duration::try_from_secs_f64(seconds).map_err(|_| SessionError::InvalidDuration(seconds))?;
        Ok(Self { prompt, count })
    }
}

/// Waits between prompts.
pub trait Pacer {
    /// Pause for `duration`. Returns `false` if the session should stop.
    fn pause(&mut self, duration: Duration) -> bool;
}

/// Sleeps on the current thread, waking early when `stop` is set.
pub struct ThreadPacer {
    stop: Arc<AtomicBool>,
}

impl ThreadPacer {
    pub fn new(stop: Arc<AtomicBool>) -> Self {
        Self { stop }
    }
}

impl Pacer for ThreadPacer {
    fn pause(&mut self, duration: Duration) -> bool {
        let deadline = Instant::now() + duration;
        loop {
            if self.stop.load(Ordering::SeqCst) {
                return false;
            }
            let now = Instant::now();
            if now >= deadline {
                return true;
            }
            thread::sleep((deadline - now).min(PAUSE_SLICE));
        }
    }
}

fn announce<W: Write>(
    out: &mut W,
    speaker: &mut dyn Speaker,
    shown: &str,
    spoken: &str,
) -> Result<(), SessionError> {
    writeln!(out, "{shown}")?;
    out.flush()?;
    speaker.say(spoken)?;
    Ok(())
}

/// Announce, treating a speech failure after a stop request as the end of the
/// session. Ctrl-C reaches the synthesizer or player too, so it usually dies
/// mid-sentence. Returns `false` when the session should end.
fn announce_until_stopped<W: Write>(
    out: &mut W,
    speaker: &mut dyn Speaker,
    stop: &AtomicBool,
    shown: &str,
    spoken: &str,
) -> Result<bool, SessionError> {
    match announce(out, speaker, shown, spoken) {
        Ok(()) => Ok(true),
        Err(SessionError::Speech(e)) if stop.load(Ordering::SeqCst) => {
            debug!(error = %e, "speech interrupted");
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

/// Run a session, returning the number of prompts completed.
///
/// Diatonic prompts ask the degree, wait the full prompt time, reveal the
/// chord and wait half as long. Chromatic prompts show the chord and wait the
/// full prompt time.
pub fn run<W: Write>(
    drill: &mut Drill,
    speaker: &mut dyn Speaker,
    pacer: &mut dyn Pacer,
    out: &mut W,
    stop: &AtomicBool,
    options: &SessionOptions,
) -> Result<usize, SessionError> {
    let mut completed = 0;
    while !stop.load(Ordering::SeqCst) && options.count.map_or(true, |n| completed < n) {
        let prompt = drill.next_prompt()?;
        match &prompt {
            Prompt::Diatonic {
                question, chord, ..
            } => {
                if !announce_until_stopped(out, speaker, stop, question, question)? {
                    break;
                }
                if !pacer.pause(options.prompt) {
                    break;
                }
                let symbol = chord.to_string();
                if !announce_until_stopped(out, speaker, stop, &symbol, &pronounce(&symbol))? {
                    completed += 1;
                    break;
                }
                if !pacer.pause(options.prompt / 2) {
                    completed += 1;
                    break;
                }
            }
            Prompt::Chromatic { chord } => {
                let symbol = chord.to_string();
                if !announce_until_stopped(out, speaker, stop, &symbol, &pronounce(&symbol))? {
                    completed += 1;
                    break;
                }
                if !pacer.pause(options.prompt) {
                    completed += 1;
                    break;
                }
            }
        }
        completed += 1;
        debug!(completed, "prompt complete");
    }
    info!(completed, "session ended");
    Ok(completed)
}
