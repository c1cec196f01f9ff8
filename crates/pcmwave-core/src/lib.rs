//! pcmwave core - canonical PCM WAVE container and sample-format conversion.
//!
//! This crate holds everything that touches sample data; file handling and
//! argument parsing live in `pcmwave-io` and `pcmwave-cli`.
//!
//! # Components
//!
//! - [`WaveContainer`] - 44-byte canonical header plus owned sample bytes,
//!   with binary [`decode`](WaveContainer::decode) / [`encode`](WaveContainer::encode)
//! - [`WaveHeader`] - raw header fields and the consistency check
//! - [`SampleFormat`] - closed tag over mono/stereo x 8/16-bit
//! - Conversions: [`mono_to_stereo`], [`stereo_to_mono`], [`bits_8_to_16`],
//!   [`bits_16_to_8`], orchestrated by [`ConversionPlan`]
//! - Text codec: [`decode_text`], [`parse_text`], [`encode_text`]
//!
//! # Example
//!
//! ```rust
//! use pcmwave_core::{BitDepth, ChannelLayout, ConversionPlan, parse_text};
//!
//! let wave = parse_text("0 255\n128 128\n", 8000).unwrap();
//! assert!(wave.is_stereo());
//!
//! let plan = ConversionPlan::new()
//!     .with_channels(ChannelLayout::Mono)
//!     .with_bit_depth(BitDepth::I16);
//! let converted = plan.apply(wave).unwrap();
//! assert_eq!(converted.samples_i16().collect::<Vec<_>>(), vec![-129, 128]);
//! ```

mod container;
mod error;

pub mod convert;
pub mod format;
pub mod header;
pub mod text;

pub use container::{
    DEFAULT_BITS_PER_SAMPLE, DEFAULT_CHANNELS, DEFAULT_SAMPLE_RATE, WaveContainer,
};
pub use convert::{
    ConversionPlan, bits_8_to_16, bits_16_to_8, linear_interpolation, mono_to_stereo,
    stereo_to_mono,
};
pub use error::{Error, Result};
pub use format::{BitDepth, ChannelLayout, Sample, SampleFormat};
pub use header::{HEADER_LEN, WaveHeader};
pub use text::{decode_text, encode_text, parse_text};
