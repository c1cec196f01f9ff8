//! Dump a WAVE file as text samples.

use super::common::{report_done, show_info};
use anyhow::Context;
use clap::Args;
use pcmwave_config::Settings;
use pcmwave_io::{read_wav_from, resolve, write_text_to};
use std::path::PathBuf;

/// Convert a WAVE file to text samples.
#[derive(Args)]
pub struct Wav2TxtArgs {
    /// Input WAVE file (standard input when omitted)
    pub input: Option<PathBuf>,

    /// Output text file (derived from INPUT, or standard output)
    pub output: Option<PathBuf>,
}

/// Run the wav2txt command.
pub fn run(args: Wav2TxtArgs, settings: &Settings) -> anyhow::Result<()> {
    let (source, sink) = resolve(
        args.input.as_deref(),
        args.output.as_deref(),
        "txt",
        settings,
    )?;

    let wave = read_wav_from(&source).with_context(|| format!("{source}: unable to read"))?;
    show_info(&source.to_string(), &wave);

    write_text_to(&sink, &wave).with_context(|| format!("{sink}: unable to write"))?;

    report_done(&source, &sink);
    Ok(())
}
