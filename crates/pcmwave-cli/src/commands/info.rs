//! Display WAVE file metadata.

use clap::Args;
use pcmwave_core::SampleFormat;
use pcmwave_io::read_wav_info;

/// Display WAVE file information.
#[derive(Args)]
pub struct InfoArgs {
    /// Path to the WAVE file
    pub file: std::path::PathBuf,
}

/// Run the info command.
pub fn run(args: InfoArgs) -> anyhow::Result<()> {
    let info = read_wav_info(&args.file)?;

    let format = match SampleFormat::new(info.channels, info.bits_per_sample) {
        Ok(format) => format.to_string(),
        Err(_) => format!("{}-bit (unsupported)", info.bits_per_sample),
    };

    println!("File:        {}", args.file.display());
    println!("Format:      PCM {format}");
    println!("Channels:    {}", info.channels);
    println!("Sample Rate: {} Hz", info.sample_rate);
    println!(
        "Duration:    {:.3}s ({} frames)",
        info.duration_secs, info.num_frames
    );
    println!("Data Size:   {}", format_bytes(u64::from(info.data_size)));

    let file_size = std::fs::metadata(&args.file)?.len();
    println!("File Size:   {}", format_bytes(file_size));

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
