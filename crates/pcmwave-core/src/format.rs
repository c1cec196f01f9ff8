//! Supported sample layouts and per-sample byte codecs.
//!
//! Only two channel layouts (mono, stereo) and two bit depths (8-bit
//! unsigned, 16-bit signed little-endian) are supported. [`SampleFormat`]
//! is the closed product of the two and is what every conversion and text
//! routine dispatches on.

use crate::error::{Error, Result};
use std::fmt;

/// Number of interleaved channels in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelLayout {
    /// One channel.
    Mono,
    /// Two channels, interleaved left then right.
    Stereo,
}

impl ChannelLayout {
    /// Channel count as stored in the header.
    pub const fn count(self) -> u16 {
        match self {
            ChannelLayout::Mono => 1,
            ChannelLayout::Stereo => 2,
        }
    }

    /// Layout for a channel count, if supported.
    pub const fn from_count(channels: u16) -> Option<Self> {
        match channels {
            1 => Some(ChannelLayout::Mono),
            2 => Some(ChannelLayout::Stereo),
            _ => None,
        }
    }
}

/// Width and signedness of one sample unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitDepth {
    /// 8-bit unsigned, range `[0, 255]`.
    U8,
    /// 16-bit signed little-endian, range `[-32768, 32767]`.
    I16,
}

impl BitDepth {
    /// Bits per sample as stored in the header.
    pub const fn bits(self) -> u16 {
        match self {
            BitDepth::U8 => 8,
            BitDepth::I16 => 16,
        }
    }

    /// Bytes per sample unit.
    pub const fn bytes(self) -> usize {
        match self {
            BitDepth::U8 => 1,
            BitDepth::I16 => 2,
        }
    }

    /// Inclusive value range of one sample unit.
    pub const fn range(self) -> (i32, i32) {
        match self {
            BitDepth::U8 => (u8::MIN as i32, u8::MAX as i32),
            BitDepth::I16 => (i16::MIN as i32, i16::MAX as i32),
        }
    }

    /// Depth for a bits-per-sample value, if supported.
    pub const fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            8 => Some(BitDepth::U8),
            16 => Some(BitDepth::I16),
            _ => None,
        }
    }
}

/// Closed tag over every supported channel layout and bit depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleFormat {
    /// 1 channel, 8-bit.
    Mono8,
    /// 1 channel, 16-bit.
    Mono16,
    /// 2 channels, 8-bit.
    Stereo8,
    /// 2 channels, 16-bit.
    Stereo16,
}

impl SampleFormat {
    /// Resolve a raw `(channels, bits)` pair.
    pub fn new(channels: u16, bits: u16) -> Result<Self> {
        match (ChannelLayout::from_count(channels), BitDepth::from_bits(bits)) {
            (Some(layout), Some(depth)) => Ok(Self::from_parts(layout, depth)),
            _ => Err(Error::UnsupportedFormat { channels, bits }),
        }
    }

    /// Combine a layout and a depth.
    pub const fn from_parts(layout: ChannelLayout, depth: BitDepth) -> Self {
        match (layout, depth) {
            (ChannelLayout::Mono, BitDepth::U8) => SampleFormat::Mono8,
            (ChannelLayout::Mono, BitDepth::I16) => SampleFormat::Mono16,
            (ChannelLayout::Stereo, BitDepth::U8) => SampleFormat::Stereo8,
            (ChannelLayout::Stereo, BitDepth::I16) => SampleFormat::Stereo16,
        }
    }

    /// Channel layout half of the tag.
    pub const fn layout(self) -> ChannelLayout {
        match self {
            SampleFormat::Mono8 | SampleFormat::Mono16 => ChannelLayout::Mono,
            SampleFormat::Stereo8 | SampleFormat::Stereo16 => ChannelLayout::Stereo,
        }
    }

    /// Bit depth half of the tag.
    pub const fn bit_depth(self) -> BitDepth {
        match self {
            SampleFormat::Mono8 | SampleFormat::Stereo8 => BitDepth::U8,
            SampleFormat::Mono16 | SampleFormat::Stereo16 => BitDepth::I16,
        }
    }

    /// Channel count.
    pub const fn channels(self) -> u16 {
        self.layout().count()
    }

    /// Bits per sample.
    pub const fn bits(self) -> u16 {
        self.bit_depth().bits()
    }

    /// Bytes per frame.
    pub const fn block_align(self) -> usize {
        self.channels() as usize * self.bit_depth().bytes()
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = match self.layout() {
            ChannelLayout::Mono => "mono",
            ChannelLayout::Stereo => "stereo",
        };
        write!(f, "{}-bit {}", self.bits(), layout)
    }
}

/// A fixed-width PCM sample unit with an explicit little-endian byte codec.
pub trait Sample: Copy {
    /// Matching depth tag.
    const DEPTH: BitDepth;

    /// Decode one unit from the first `DEPTH.bytes()` bytes of `bytes`.
    fn read_le(bytes: &[u8]) -> Self;

    /// Append the little-endian encoding of `self` to `buf`.
    fn push_le(self, buf: &mut Vec<u8>);

    /// Overwrite the first `DEPTH.bytes()` bytes of `bytes`.
    fn write_le(self, bytes: &mut [u8]);

    /// Widen to `i32` without changing the value.
    fn to_i32(self) -> i32;

    /// Narrow from `i32`; the value must already be in range.
    fn from_i32(value: i32) -> Self;
}

impl Sample for u8 {
    const DEPTH: BitDepth = BitDepth::U8;

    fn read_le(bytes: &[u8]) -> Self {
        bytes[0]
    }

    fn push_le(self, buf: &mut Vec<u8>) {
        buf.push(self);
    }

    fn write_le(self, bytes: &mut [u8]) {
        bytes[0] = self;
    }

    fn to_i32(self) -> i32 {
        i32::from(self)
    }

    fn from_i32(value: i32) -> Self {
        debug_assert!((0..=255).contains(&value));
        value as u8
    }
}

impl Sample for i16 {
    const DEPTH: BitDepth = BitDepth::I16;

    fn read_le(bytes: &[u8]) -> Self {
        i16::from_le_bytes([bytes[0], bytes[1]])
    }

    fn push_le(self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.to_le_bytes());
    }

    fn write_le(self, bytes: &mut [u8]) {
        bytes[..2].copy_from_slice(&self.to_le_bytes());
    }

    fn to_i32(self) -> i32 {
        i32::from(self)
    }

    fn from_i32(value: i32) -> Self {
        debug_assert!((-32768..=32767).contains(&value));
        value as i16
    }
}
