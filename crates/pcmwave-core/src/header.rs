//! The canonical 44-byte RIFF/WAVE header.
//!
//! | Offset | Size | Field           |
//! |-------:|-----:|-----------------|
//! |      0 |    4 | `"RIFF"`        |
//! |      4 |    4 | 36 + data size  |
//! |      8 |    4 | `"WAVE"`        |
//! |     12 |    4 | `"fmt "`        |
//! |     16 |    4 | 16              |
//! |     20 |    2 | 1 (PCM)         |
//! |     22 |    2 | channels        |
//! |     24 |    4 | sample rate     |
//! |     28 |    4 | byte rate       |
//! |     32 |    2 | block align     |
//! |     34 |    2 | bits per sample |
//! |     36 |    4 | `"data"`        |
//! |     40 |    4 | data size       |
//!
//! All multi-byte fields are little-endian.

use crate::error::{Error, Result};
use std::io::Read;

/// Size of the canonical header in bytes.
pub const HEADER_LEN: usize = 44;

/// RIFF container tag.
pub const RIFF_TAG: [u8; 4] = *b"RIFF";
/// WAVE format tag.
pub const WAVE_TAG: [u8; 4] = *b"WAVE";
/// Format chunk tag.
pub const FMT_TAG: [u8; 4] = *b"fmt ";
/// Data chunk tag.
pub const DATA_TAG: [u8; 4] = *b"data";
/// Format chunk body size for plain PCM.
pub const FMT_CHUNK_SIZE: u32 = 16;
/// Audio format code for uncompressed PCM.
pub const PCM_FORMAT: u16 = 1;

/// Bytes between the end of the RIFF chunk header and the data bytes.
const RIFF_OVERHEAD: u32 = 36;

/// Raw header fields, exactly as they appear on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveHeader {
    /// Container tag, `"RIFF"` when well formed.
    pub riff_tag: [u8; 4],
    /// Bytes following the first 8-byte chunk header.
    pub total_size: u32,
    /// Format tag, `"WAVE"` when well formed.
    pub wave_tag: [u8; 4],
    /// Format chunk tag, `"fmt "` when well formed.
    pub fmt_tag: [u8; 4],
    /// Format chunk body size, 16 when well formed.
    pub fmt_size: u32,
    /// Audio format code, 1 for PCM.
    pub audio_format: u16,
    /// Interleaved channel count.
    pub num_channels: u16,
    /// Playback rate in Hz.
    pub sample_rate: u32,
    /// `sample_rate * num_channels * bits_per_sample / 8`.
    pub byte_rate: u32,
    /// `num_channels * bits_per_sample / 8`.
    pub block_align: u16,
    /// Bits per sample unit.
    pub bits_per_sample: u16,
    /// Data chunk tag, `"data"` when well formed.
    pub data_tag: [u8; 4],
    /// Length of the sample data in bytes.
    pub data_size: u32,
}

/// Derived byte rate for a configuration.
pub fn byte_rate(channels: u16, bits: u16, rate: u32) -> u32 {
    (u64::from(rate) * u64::from(channels) * u64::from(bits) / 8) as u32
}

/// Derived block alignment for a configuration.
pub fn block_align(channels: u16, bits: u16) -> u16 {
    (u32::from(channels) * u32::from(bits) / 8) as u16
}

impl WaveHeader {
    /// Header with canonical tags for the given configuration and no data.
    pub fn canonical(channels: u16, bits: u16, rate: u32) -> Self {
        let mut header = Self {
            riff_tag: RIFF_TAG,
            total_size: 0,
            wave_tag: WAVE_TAG,
            fmt_tag: FMT_TAG,
            fmt_size: FMT_CHUNK_SIZE,
            audio_format: PCM_FORMAT,
            num_channels: channels,
            sample_rate: rate,
            byte_rate: 0,
            block_align: 0,
            bits_per_sample: bits,
            data_tag: DATA_TAG,
            data_size: 0,
        };
        header.refresh(0);
        header
    }

    /// Recompute every derived field for `data_len` bytes of sample data.
    pub fn refresh(&mut self, data_len: usize) {
        self.byte_rate = byte_rate(self.num_channels, self.bits_per_sample, self.sample_rate);
        self.block_align = block_align(self.num_channels, self.bits_per_sample);
        self.data_size = data_len as u32;
        self.total_size = RIFF_OVERHEAD.wrapping_add(self.data_size);
    }

    /// Decode the little-endian field layout.
    pub fn parse(bytes: &[u8; HEADER_LEN]) -> Self {
        let tag = |at: usize| -> [u8; 4] { [bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]] };
        let u32_at = |at: usize| u32::from_le_bytes(tag(at));
        let u16_at = |at: usize| u16::from_le_bytes([bytes[at], bytes[at + 1]]);

        Self {
            riff_tag: tag(0),
            total_size: u32_at(4),
            wave_tag: tag(8),
            fmt_tag: tag(12),
            fmt_size: u32_at(16),
            audio_format: u16_at(20),
            num_channels: u16_at(22),
            sample_rate: u32_at(24),
            byte_rate: u32_at(28),
            block_align: u16_at(32),
            bits_per_sample: u16_at(34),
            data_tag: tag(36),
            data_size: u32_at(40),
        }
    }

    /// Encode the little-endian field layout.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[0..4].copy_from_slice(&self.riff_tag);
        out[4..8].copy_from_slice(&self.total_size.to_le_bytes());
        out[8..12].copy_from_slice(&self.wave_tag);
        out[12..16].copy_from_slice(&self.fmt_tag);
        out[16..20].copy_from_slice(&self.fmt_size.to_le_bytes());
        out[20..22].copy_from_slice(&self.audio_format.to_le_bytes());
        out[22..24].copy_from_slice(&self.num_channels.to_le_bytes());
        out[24..28].copy_from_slice(&self.sample_rate.to_le_bytes());
        out[28..32].copy_from_slice(&self.byte_rate.to_le_bytes());
        out[32..34].copy_from_slice(&self.block_align.to_le_bytes());
        out[34..36].copy_from_slice(&self.bits_per_sample.to_le_bytes());
        out[36..40].copy_from_slice(&self.data_tag);
        out[40..44].copy_from_slice(&self.data_size.to_le_bytes());
        out
    }

    /// Read exactly [`HEADER_LEN`] bytes and decode them.
    ///
    /// No consistency check is applied; see [`WaveHeader::check`].
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let mut bytes = [0u8; HEADER_LEN];
        let got = read_full(reader, &mut bytes)?;
        if got < HEADER_LEN {
            return Err(Error::ShortRead {
                expected: HEADER_LEN,
                actual: got,
            });
        }
        Ok(Self::parse(&bytes))
    }

    /// Structural consistency check.
    ///
    /// Verifies the four tags, the PCM format chunk, and that `byte_rate`
    /// and `block_align` match their derivation. `total_size` is not
    /// checked; writers in the wild disagree on it.
    pub fn check(&self) -> Result<()> {
        let tags = [
            (self.riff_tag, RIFF_TAG, "container"),
            (self.wave_tag, WAVE_TAG, "format"),
            (self.fmt_tag, FMT_TAG, "fmt chunk"),
            (self.data_tag, DATA_TAG, "data chunk"),
        ];
        for (found, expected, what) in tags {
            if found != expected {
                return Err(Error::MalformedHeader(format!(
                    "{what} tag is {:?}, expected {:?}",
                    String::from_utf8_lossy(&found),
                    String::from_utf8_lossy(&expected),
                )));
            }
        }
        if self.fmt_size != FMT_CHUNK_SIZE {
            return Err(Error::MalformedHeader(format!(
                "fmt chunk size is {}, expected {FMT_CHUNK_SIZE}",
                self.fmt_size
            )));
        }
        if self.audio_format != PCM_FORMAT {
            return Err(Error::MalformedHeader(format!(
                "audio format is {}, expected {PCM_FORMAT} (PCM)",
                self.audio_format
            )));
        }
        let expected_rate = byte_rate(self.num_channels, self.bits_per_sample, self.sample_rate);
        if self.byte_rate != expected_rate {
            return Err(Error::MalformedHeader(format!(
                "byte rate is {}, expected {expected_rate}",
                self.byte_rate
            )));
        }
        let expected_align = block_align(self.num_channels, self.bits_per_sample);
        if self.block_align != expected_align {
            return Err(Error::MalformedHeader(format!(
                "block align is {}, expected {expected_align}",
                self.block_align
            )));
        }
        Ok(())
    }

    /// `true` when [`WaveHeader::check`] passes.
    pub fn is_consistent(&self) -> bool {
        self.check().is_ok()
    }
}

/// Fill `buf` from `reader`, stopping early only at end of stream.
///
/// Returns the number of bytes read.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_header_layout() {
        let mut header = WaveHeader::canonical(2, 16, 44100);
        header.refresh(8);
        let bytes = header.to_bytes();

        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(u32::from_le_bytes(bytes[4..8].try_into().unwrap()), 44);
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(&bytes[12..16], b"fmt ");
        assert_eq!(u32::from_le_bytes(bytes[16..20].try_into().unwrap()), 16);
        assert_eq!(u16::from_le_bytes([bytes[20], bytes[21]]), 1);
        assert_eq!(u16::from_le_bytes([bytes[22], bytes[23]]), 2);
        assert_eq!(u32::from_le_bytes(bytes[24..28].try_into().unwrap()), 44100);
        assert_eq!(u32::from_le_bytes(bytes[28..32].try_into().unwrap()), 176400);
        assert_eq!(u16::from_le_bytes([bytes[32], bytes[33]]), 4);
        assert_eq!(u16::from_le_bytes([bytes[34], bytes[35]]), 16);
        assert_eq!(&bytes[36..40], b"data");
        assert_eq!(u32::from_le_bytes(bytes[40..44].try_into().unwrap()), 8);
    }

    #[test]
    fn parse_inverts_to_bytes() {
        let mut header = WaveHeader::canonical(1, 8, 8000);
        header.refresh(100);
        assert_eq!(WaveHeader::parse(&header.to_bytes()), header);
    }

    #[test]
    fn derived_fields() {
        assert_eq!(byte_rate(1, 8, 8000), 8000);
        assert_eq!(byte_rate(2, 16, 48000), 192000);
        assert_eq!(block_align(2, 8), 2);
        assert_eq!(block_align(1, 16), 2);
    }

    #[test]
    fn check_rejects_bad_tag() {
        let mut header = WaveHeader::canonical(1, 8, 8000);
        header.wave_tag = *b"AVI ";
        let err = header.check().unwrap_err();
        assert!(err.to_string().contains("format tag"), "got: {err}");
    }

    #[test]
    fn check_rejects_non_pcm() {
        let mut header = WaveHeader::canonical(1, 16, 8000);
        header.audio_format = 3;
        assert!(matches!(header.check(), Err(Error::MalformedHeader(_))));
    }

    #[test]
    fn check_rejects_stale_block_align() {
        let mut header = WaveHeader::canonical(1, 16, 8000);
        header.num_channels = 2;
        header.byte_rate = byte_rate(2, 16, 8000);
        assert!(!header.is_consistent());
    }

    #[test]
    fn check_ignores_total_size() {
        let mut header = WaveHeader::canonical(1, 8, 8000);
        header.total_size = 0xFFFF_FFFF;
        assert!(header.is_consistent());
    }

    #[test]
    fn read_from_short_stream() {
        let bytes = [0u8; 20];
        let err = WaveHeader::read_from(&mut &bytes[..]).unwrap_err();
        assert!(matches!(
            err,
            Error::ShortRead {
                expected: 44,
                actual: 20
            }
        ));
    }
}
