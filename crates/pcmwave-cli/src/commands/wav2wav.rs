//! Re-encode a WAVE file with a different channel count, depth, or rate.

use super::common::{report_done, show_info};
use anyhow::Context;
use clap::Args;
use pcmwave_config::Settings;
use pcmwave_core::{BitDepth, ChannelLayout, ConversionPlan};
use pcmwave_io::{read_wav_from, resolve, write_wav_to};
use std::path::PathBuf;

/// Change the sample format of a WAVE file.
#[derive(Args)]
pub struct Wav2WavArgs {
    /// Input WAVE file
    pub input: PathBuf,

    /// Output WAVE file (derived from INPUT when omitted)
    pub output: Option<PathBuf>,

    /// Target channel count (1 or 2)
    #[arg(short, long, value_parser = parse_channels)]
    pub channels: Option<ChannelLayout>,

    /// Target bits per sample (8 or 16)
    #[arg(short, long, value_parser = parse_bits)]
    pub bits: Option<BitDepth>,

    /// Target sample rate in Hz; samples are relabelled, not resampled
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub rate: Option<u32>,
}

/// Run the wav2wav command.
pub fn run(args: Wav2WavArgs, settings: &Settings) -> anyhow::Result<()> {
    // input file is mandatory, so standard input is never used here
    let (source, sink) = resolve(
        Some(args.input.as_path()),
        args.output.as_deref(),
        "wav",
        settings,
    )?;

    let wave = read_wav_from(&source).with_context(|| format!("{source}: unable to read"))?;
    show_info(&source.to_string(), &wave);

    let mut plan = ConversionPlan::new();
    if let Some(layout) = args.channels {
        plan = plan.with_channels(layout);
    }
    if let Some(depth) = args.bits {
        plan = plan.with_bit_depth(depth);
    }
    if let Some(rate) = args.rate {
        plan = plan.with_sample_rate(rate);
    }
    if plan.is_identity() {
        tracing::debug!("no target format given, copying samples unchanged");
    }

    let converted = plan
        .apply(wave)
        .with_context(|| format!("{source}: unable to convert"))?;
    show_info(&sink.to_string(), &converted);

    write_wav_to(&sink, &converted).with_context(|| format!("{sink}: unable to write"))?;
    report_done(&source, &sink);
    Ok(())
}

fn parse_channels(s: &str) -> Result<ChannelLayout, String> {
    s.parse::<u16>()
        .ok()
        .and_then(ChannelLayout::from_count)
        .ok_or_else(|| format!("'{s}' is not a supported channel count (use 1 or 2)"))
}

fn parse_bits(s: &str) -> Result<BitDepth, String> {
    s.parse::<u16>()
        .ok()
        .and_then(BitDepth::from_bits)
        .ok_or_else(|| format!("'{s}' is not a supported bit depth (use 8 or 16)"))
}
