//! chordcall — announces chords to practice, one every few seconds.
//!
//! With `--root`, asks for random degrees of that key ("5 of G major") and then
//! reveals the diatonic seventh chord. Without it, calls out random chromatic
//! chords. Runs until Ctrl-C or `--count` prompts.

use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use chordcall::config::DrillConfig;
use chordcall::drill::{session, Drill, SessionOptions, ThreadPacer};
use chordcall::speech::{CommandSpeaker, SilentSpeaker, Speaker};
use chordcall::theory::{build_scale, diatonic_chords, Mode};

#[derive(Parser)]
#[command(name = "chordcall")]
#[command(about = "Generates chords for practicing chord voicings and reads them aloud")]
#[command(version)]
struct Cli {
    /// Scale root. When left empty, chords are generated chromatically instead of diatonically.
    #[arg(short, long)]
    root: Option<String>,

    /// Mode: major, minor, the 7 church modes, harmonic_minor or melodic_minor.
    #[arg(short, long)]
    mode: Option<String>,

    /// Seconds to play each chord.
    #[arg(short, long)]
    seconds: Option<f64>,

    /// RNG seed, for replaying a session.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many prompts.
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Print prompts without speaking them.
    #[arg(long)]
    silent: bool,

    /// Print the scale and its seventh chords, then exit.
    #[arg(long, requires = "root")]
    chart: bool,

    /// Config file (default: ~/.chordcall/config.yaml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();
}

fn print_chart(root: &str, mode_name: &str) -> Result<()> {
    let mode: Mode = mode_name.parse()?;
    let scale = build_scale(root, mode)?;
    println!("{} {}: {}", scale.root(), mode_name, scale);
    for (degree, chord) in diatonic_chords(root, mode)?.iter().enumerate() {
        println!("{:>3}  {}", degree + 1, chord);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => DrillConfig::load_from(path)?,
        None => DrillConfig::load().unwrap_or_default(),
    };
    let mode = cli.mode.clone().unwrap_or_else(|| config.mode.clone());
    let seconds = cli.seconds.unwrap_or(config.seconds);

    if cli.chart {
        let root = cli.root.as_deref().context("--chart requires --root")?;
        return print_chart(root, &mode);
    }

    let seed = cli.seed.or(config.seed).unwrap_or_else(rand::random);
    let drill = match &cli.root {
        Some(root) => Drill::diatonic(root, &mode, seed)?,
        None => {
            if cli.mode.is_some() {
                warn!("--mode has no effect without --root");
            }
            Drill::chromatic(seed)
        }
    };
    let mut drill = drill.with_max_retries(config.max_retries);
    let options = SessionOptions::new(seconds, cli.count)?;

    let mut speaker: Box<dyn Speaker> = if cli.silent {
        Box::new(SilentSpeaker)
    } else {
        Box::new(CommandSpeaker::new(&config.speech)?)
    };

    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = Arc::clone(&stop);
        ctrlc::set_handler(move || stop.store(true, Ordering::SeqCst))
            .context("failed to install Ctrl-C handler")?;
    }
    let mut pacer = ThreadPacer::new(Arc::clone(&stop));

    info!(seed, seconds, "starting drill");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    session::run(
        &mut drill,
        speaker.as_mut(),
        &mut pacer,
        &mut out,
        &stop,
        &options,
    )?;
    Ok(())
}
