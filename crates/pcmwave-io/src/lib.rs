//! File and stream I/O layer for pcmwave.
//!
//! This crate provides:
//!
//! - **WAV file I/O**: [`read_wav`], [`write_wav`] and header-only [`read_wav_info`]
//! - **Text file I/O**: [`read_text`] and [`write_text`]
//! - **Endpoint I/O**: [`read_wav_from`], [`write_wav_to`], [`read_text_from`]
//!   and [`write_text_to`] work on a [`Source`] or [`Sink`], so a file and a
//!   standard stream go through the same code
//! - **Stream endpoints**: [`resolve`] turns optional paths into a [`Source`]
//!   and [`Sink`], falling back to standard input/output as configured
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pcmwave_core::{ChannelLayout, ConversionPlan};
//! use pcmwave_io::{read_wav, write_wav};
//!
//! let wave = read_wav("input.wav")?;
//! let mono = ConversionPlan::new()
//!     .with_channels(ChannelLayout::Mono)
//!     .apply(wave)?;
//! write_wav("output.wav", &mono)?;
//! # Ok::<(), pcmwave_io::Error>(())
//! ```

mod stream;
mod text;
mod wav;

pub use stream::{Input, Output, Sink, Source, resolve};
pub use text::{read_text, read_text_from, write_text, write_text_to};
pub use wav::{WavInfo, read_wav, read_wav_from, read_wav_info, write_wav, write_wav_to};

use std::path::PathBuf;

/// Error types for pcmwave I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Decode, encode, or conversion failure in the core.
    #[error("WAV error: {0}")]
    Wave(#[from] pcmwave_core::Error),

    /// An input file could not be opened.
    #[error("unable to open file '{path}': {source}")]
    Open {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An output file could not be created.
    #[error("unable to create file '{path}': {source}")]
    Create {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// No path was given and the standard stream fallback is disabled.
    #[error("no {0} file given")]
    MissingPath(&'static str),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for pcmwave I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
