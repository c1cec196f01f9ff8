//! Text sample file reading and writing.

use crate::stream::{Sink, Source};
use crate::Result;
use pcmwave_core::{WaveContainer, decode_text, encode_text};
use std::path::Path;

/// Read a text sample file, assigning `sample_rate` to the result.
pub fn read_text<P: AsRef<Path>>(path: P, sample_rate: u32) -> Result<WaveContainer> {
    read_text_from(&Source::File(path.as_ref().to_path_buf()), sample_rate)
}

/// Decode text samples from a file or standard input.
pub fn read_text_from(source: &Source, sample_rate: u32) -> Result<WaveContainer> {
    let input = source.open()?;
    Ok(decode_text(input, sample_rate)?)
}

/// Write a container's samples as text, one frame per line.
pub fn write_text<P: AsRef<Path>>(path: P, wave: &WaveContainer) -> Result<()> {
    write_text_to(&Sink::File(path.as_ref().to_path_buf()), wave)
}

/// Write text samples to a file or standard output.
///
/// The container is checked before the sink is created, so an unwritable
/// container never truncates an existing file.
pub fn write_text_to(sink: &Sink, wave: &WaveContainer) -> Result<()> {
    wave.writable_format()?;
    let mut output = sink.create()?;
    encode_text(wave, &mut output)?;
    output.finish()
}
