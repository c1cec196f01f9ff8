//! CLI command implementations.

pub mod common;
pub mod info;
pub mod txt2wav;
pub mod wav2txt;
pub mod wav2wav;
