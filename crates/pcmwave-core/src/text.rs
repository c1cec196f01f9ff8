//! Line-oriented text representation of sample data.
//!
//! One frame per line, one decimal integer per channel, separated by
//! whitespace. 8-bit samples are written unsigned, 16-bit samples signed.
//!
//! ```text
//! 128 130
//! 127 126
//! ```
//!
//! When decoding, the bit depth and channel count are inferred from the
//! content: if every value fits in `[0, 255]` the file is 8-bit, otherwise
//! 16-bit; the token count of the first frame line gives the channel count.

use crate::container::WaveContainer;
use crate::error::{Error, Result};
use crate::format::{BitDepth, ChannelLayout, SampleFormat};
use std::io::{BufWriter, ErrorKind, Read, Write};
use std::num::IntErrorKind;

fn parse_token(line: usize, token: &str) -> Result<i64> {
    token.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            Error::text(line, format!("{token} is outside the 16-bit range"))
        }
        _ => Error::text(line, format!("'{token}' is not an integer")),
    })
}

/// Parse every token of `text` as an integer, reporting the first bad one.
fn scan_values(text: &str) -> Result<Vec<i64>> {
    let mut values = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        for token in line.split_whitespace() {
            values.push(parse_token(idx + 1, token)?);
        }
    }
    Ok(values)
}

/// 8-bit when every value is in `[0, 255]`, else 16-bit.
fn detect_depth(values: &[i64]) -> BitDepth {
    let (lo, hi) = BitDepth::U8.range();
    let fits = values
        .iter()
        .all(|v| (i64::from(lo)..=i64::from(hi)).contains(v));
    if fits { BitDepth::U8 } else { BitDepth::I16 }
}

/// Channel count from the first non-blank line.
fn detect_layout(text: &str) -> Result<ChannelLayout> {
    let Some((idx, line)) = text
        .lines()
        .enumerate()
        .find(|(_, line)| !line.trim().is_empty())
    else {
        return Err(Error::text(0, "no sample frames"));
    };
    let count = line.split_whitespace().count();
    u16::try_from(count)
        .ok()
        .and_then(ChannelLayout::from_count)
        .ok_or_else(|| {
            Error::text(
                idx + 1,
                format!("first frame has {count} values; expected 1 or 2"),
            )
        })
}

/// Decode text already held in memory.
///
/// `sample_rate` is assigned to the result; text carries no rate.
pub fn parse_text(text: &str, sample_rate: u32) -> Result<WaveContainer> {
    let values = scan_values(text)?;
    let depth = detect_depth(&values);
    let layout = detect_layout(text)?;
    let format = SampleFormat::from_parts(layout, depth);
    let channels = usize::from(layout.count());
    let (lo, hi) = depth.range();

    let mut wave = WaveContainer::for_format(format, sample_rate);
    wave.reserve(values.len() * depth.bytes());

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        if tokens.len() != channels {
            return Err(Error::text(
                line_no,
                format!("expected {channels} values, found {}", tokens.len()),
            ));
        }
        for token in tokens {
            // every token already parsed in the scan pass
            let value = parse_token(line_no, token)?;
            if value < i64::from(lo) || value > i64::from(hi) {
                return Err(Error::text(
                    line_no,
                    format!("{value} is outside the {}-bit range [{lo}, {hi}]", depth.bits()),
                ));
            }
            match depth {
                BitDepth::U8 => wave.append_u8(value as u8),
                BitDepth::I16 => wave.append_i16(value as i16),
            }
        }
    }

    tracing::debug!(
        %format,
        frames = wave.num_frames(),
        rate = sample_rate,
        "decoded text"
    );
    Ok(wave)
}

/// Read all of `reader` and decode it as text samples.
pub fn decode_text<R: Read>(mut reader: R, sample_rate: u32) -> Result<WaveContainer> {
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(|e| match e.kind() {
        ErrorKind::InvalidData => Error::text(0, "input is not valid UTF-8"),
        _ => Error::Io(e),
    })?;
    parse_text(&text, sample_rate)
}

/// Write one line per frame.
///
/// An empty or inconsistent container is rejected before anything is
/// written, as for the binary encoder.
pub fn encode_text<W: Write>(wave: &WaveContainer, writer: W) -> Result<()> {
    let format = wave.writable_format()?;
    let align = format.block_align();
    let mut out = BufWriter::new(writer);

    for frame in wave.samples().chunks_exact(align) {
        match format.bit_depth() {
            BitDepth::U8 => write_frame(&mut out, frame.iter().copied())?,
            BitDepth::I16 => write_frame(
                &mut out,
                frame
                    .chunks_exact(2)
                    .map(|b| i16::from_le_bytes([b[0], b[1]])),
            )?,
        }
    }
    out.flush()?;

    tracing::debug!(%format, frames = wave.num_frames(), "encoded text");
    Ok(())
}

fn write_frame<W: Write, T: std::fmt::Display>(
    out: &mut W,
    values: impl Iterator<Item = T>,
) -> Result<()> {
    for (i, value) in values.enumerate() {
        if i > 0 {
            out.write_all(b" ")?;
        }
        write!(out, "{value}")?;
    }
    out.write_all(b"\n")?;
    Ok(())
}
