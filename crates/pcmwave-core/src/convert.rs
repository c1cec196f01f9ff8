//! Channel-count and bit-depth conversion.
//!
//! Every transform consumes its source container and returns a freshly
//! built one with the same sample rate. A source that does not meet the
//! transform's precondition is rejected and nothing is produced.
//!
//! Both the downmix and the depth reduction are lossy. Neither dithers nor
//! rounds: results use truncating integer division, so applying a transform
//! and then its counterpart does not in general restore the input.

use crate::container::WaveContainer;
use crate::error::{Error, Result};
use crate::format::{BitDepth, ChannelLayout, Sample, SampleFormat};

/// Affine remap of `value` from `[min1, max1]` onto `[min2, max2]`.
///
/// Uses truncating integer arithmetic, carried out in `i128` so no
/// intermediate overflows for any `i32` arguments:
/// `(value - min1) * (max2 - min2) / (max1 - min1) + min2`.
///
/// The result fits in `i32` whenever `value` lies in `[min1, max1]`.
///
/// # Panics
///
/// Panics on division by zero when `min1 == max1`.
pub fn linear_interpolation(value: i32, (min1, max1): (i32, i32), (min2, max2): (i32, i32)) -> i32 {
    let (value, min1, max1) = (i128::from(value), i128::from(min1), i128::from(max1));
    let (min2, max2) = (i128::from(min2), i128::from(max2));
    ((value - min1) * (max2 - min2) / (max1 - min1) + min2) as i32
}

/// Map one unsigned 8-bit sample onto the signed 16-bit range.
pub fn widen_sample(value: u8) -> i16 {
    i16::from_i32(linear_interpolation(
        i32::from(value),
        BitDepth::U8.range(),
        BitDepth::I16.range(),
    ))
}

/// Map one signed 16-bit sample onto the unsigned 8-bit range.
pub fn narrow_sample(value: i16) -> u8 {
    u8::from_i32(linear_interpolation(
        i32::from(value),
        BitDepth::I16.range(),
        BitDepth::U8.range(),
    ))
}

fn require_channels(src: &WaveContainer, layout: ChannelLayout) -> Result<SampleFormat> {
    let format = src.sample_format()?;
    if format.layout() != layout {
        return Err(Error::UnexpectedChannels {
            expected: layout.count(),
            found: src.num_channels(),
        });
    }
    Ok(format)
}

fn require_depth(src: &WaveContainer, depth: BitDepth) -> Result<SampleFormat> {
    let format = src.sample_format()?;
    if format.bit_depth() != depth {
        return Err(Error::UnexpectedBitDepth {
            expected: depth.bits(),
            found: src.bits_per_sample(),
        });
    }
    Ok(format)
}

/// Duplicate every mono sample into both channels of a stereo container.
///
/// Frame count is preserved; the byte length doubles.
pub fn mono_to_stereo(src: WaveContainer) -> Result<WaveContainer> {
    let format = require_channels(&src, ChannelLayout::Mono)?;
    let out = match format.bit_depth() {
        BitDepth::U8 => duplicate_channel::<u8>(src.samples()),
        BitDepth::I16 => duplicate_channel::<i16>(src.samples()),
    };
    tracing::debug!(frames = src.num_frames(), %format, "mono -> stereo");
    Ok(WaveContainer::with_samples(
        2,
        format.bits(),
        src.sample_rate(),
        out,
    ))
}

fn duplicate_channel<S: Sample>(data: &[u8]) -> Vec<u8> {
    let width = S::DEPTH.bytes();
    let mut out = Vec::with_capacity(data.len() * 2);
    for unit in data.chunks_exact(width) {
        let value = S::read_le(unit);
        value.push_le(&mut out);
        value.push_le(&mut out);
    }
    out
}

/// Mix each stereo frame down to the truncated mean of left and right.
pub fn stereo_to_mono(src: WaveContainer) -> Result<WaveContainer> {
    let format = require_channels(&src, ChannelLayout::Stereo)?;
    let out = match format.bit_depth() {
        BitDepth::U8 => mix_channels::<u8>(src.samples()),
        BitDepth::I16 => mix_channels::<i16>(src.samples()),
    };
    tracing::debug!(frames = src.num_frames(), %format, "stereo -> mono");
    Ok(WaveContainer::with_samples(
        1,
        format.bits(),
        src.sample_rate(),
        out,
    ))
}

fn mix_channels<S: Sample>(data: &[u8]) -> Vec<u8> {
    let width = S::DEPTH.bytes();
    let mut out = Vec::with_capacity(data.len() / 2);
    for frame in data.chunks_exact(width * 2) {
        let left = S::read_le(frame).to_i32();
        let right = S::read_le(&frame[width..]).to_i32();
        S::from_i32((left + right) / 2).push_le(&mut out);
    }
    out
}

/// Rescale unsigned 8-bit samples to signed 16-bit (`0 -> -32768`, `255 -> 32767`).
pub fn bits_8_to_16(src: WaveContainer) -> Result<WaveContainer> {
    let format = require_depth(&src, BitDepth::U8)?;
    let mut out = Vec::with_capacity(src.len() * 2);
    for value in src.samples_u8() {
        widen_sample(value).push_le(&mut out);
    }
    tracing::debug!(samples = src.len(), %format, "8-bit -> 16-bit");
    Ok(WaveContainer::with_samples(
        format.channels(),
        16,
        src.sample_rate(),
        out,
    ))
}

/// Rescale signed 16-bit samples to unsigned 8-bit (`-32768 -> 0`, `32767 -> 255`).
pub fn bits_16_to_8(src: WaveContainer) -> Result<WaveContainer> {
    let format = require_depth(&src, BitDepth::I16)?;
    let out: Vec<u8> = src.samples_i16().map(narrow_sample).collect();
    tracing::debug!(samples = out.len(), %format, "16-bit -> 8-bit");
    Ok(WaveContainer::with_samples(
        format.channels(),
        8,
        src.sample_rate(),
        out,
    ))
}

/// Target format for a whole-file conversion.
///
/// `None` fields leave that aspect of the source unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionPlan {
    /// Target channel layout.
    pub channels: Option<ChannelLayout>,
    /// Target bit depth.
    pub bit_depth: Option<BitDepth>,
    /// New declared sample rate. Audio is not resampled.
    pub sample_rate: Option<u32>,
}

impl ConversionPlan {
    /// Plan that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target channel layout.
    pub fn with_channels(mut self, layout: ChannelLayout) -> Self {
        self.channels = Some(layout);
        self
    }

    /// Set the target bit depth.
    pub fn with_bit_depth(mut self, depth: BitDepth) -> Self {
        self.bit_depth = Some(depth);
        self
    }

    /// Set the declared sample rate of the output.
    pub fn with_sample_rate(mut self, rate: u32) -> Self {
        self.sample_rate = Some(rate);
        self
    }

    /// `true` when applying the plan cannot change anything.
    pub fn is_identity(&self) -> bool {
        self.channels.is_none() && self.bit_depth.is_none() && self.sample_rate.is_none()
    }

    /// Run at most one channel transform, then at most one depth transform,
    /// then the rate relabel.
    pub fn apply(&self, src: WaveContainer) -> Result<WaveContainer> {
        let format = src.sample_format()?;

        let wave = match self.channels {
            Some(target) if target != format.layout() => match target {
                ChannelLayout::Stereo => mono_to_stereo(src)?,
                ChannelLayout::Mono => stereo_to_mono(src)?,
            },
            _ => src,
        };

        let mut wave = match self.bit_depth {
            Some(target) if target != format.bit_depth() => match target {
                BitDepth::I16 => bits_8_to_16(wave)?,
                BitDepth::U8 => bits_16_to_8(wave)?,
            },
            _ => wave,
        };

        if let Some(rate) = self.sample_rate {
            wave.set_sample_rate(rate);
        }
        Ok(wave)
    }
}
