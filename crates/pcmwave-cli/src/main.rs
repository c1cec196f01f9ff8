//! pcmwave CLI - convert between WAVE files, text samples, and sample formats.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pcmwave")]
#[command(author, version, about = "PCM WAVE conversion tools", long_about = None)]
struct Cli {
    /// Settings file (TOML). Defaults to the user config file when present.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log conversion steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a WAVE file to text samples
    Wav2txt(commands::wav2txt::Wav2TxtArgs),

    /// Convert text samples to a WAVE file
    Txt2wav(commands::txt2wav::Txt2WavArgs),

    /// Change channel count, bit depth, or sample rate of a WAVE file
    Wav2wav(commands::wav2wav::Wav2WavArgs),

    /// Display WAVE file information
    Info(commands::info::InfoArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout may carry converted data, so logs always go to stderr
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into())
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = commands::common::load_settings(cli.config.as_deref())?;
    tracing::debug!(?settings, "settings loaded");

    match cli.command {
        Commands::Wav2txt(args) => commands::wav2txt::run(args, &settings),
        Commands::Txt2wav(args) => commands::txt2wav::run(args, &settings),
        Commands::Wav2wav(args) => commands::wav2wav::run(args, &settings),
        Commands::Info(args) => commands::info::run(args),
    }
}
