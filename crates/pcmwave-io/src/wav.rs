//! WAV file reading and writing.

use crate::stream::{Sink, Source};
use crate::Result;
use pcmwave_core::{WaveContainer, WaveHeader};
use std::path::Path;

/// WAV file metadata extracted without loading sample data.
#[derive(Debug, Clone)]
pub struct WavInfo {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
    /// Declared sample data length in bytes.
    pub data_size: u32,
    /// Total number of sample frames (samples per channel).
    pub num_frames: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
}

/// Read WAV metadata without loading sample data.
///
/// Reads and checks the 44-byte header only. This is much faster than
/// [`read_wav`] for files where you only need metadata.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let mut input = Source::File(path.as_ref().to_path_buf()).open()?;
    let header = WaveHeader::read_from(&mut input)?;
    header.check()?;

    let num_frames = match header.block_align {
        0 => 0,
        align => u64::from(header.data_size) / u64::from(align),
    };
    let duration_secs = if header.sample_rate == 0 {
        0.0
    } else {
        num_frames as f64 / f64::from(header.sample_rate)
    };

    Ok(WavInfo {
        channels: header.num_channels,
        sample_rate: header.sample_rate,
        bits_per_sample: header.bits_per_sample,
        data_size: header.data_size,
        num_frames,
        duration_secs,
    })
}

/// Read a WAV file into a container.
///
/// # Example
/// ```ignore
/// let wave = read_wav("input.wav")?;
/// println!("Loaded {} frames at {} Hz", wave.num_frames(), wave.sample_rate());
/// ```
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<WaveContainer> {
    read_wav_from(&Source::File(path.as_ref().to_path_buf()))
}

/// Decode a container from a file or standard input.
pub fn read_wav_from(source: &Source) -> Result<WaveContainer> {
    let mut input = source.open()?;
    Ok(WaveContainer::decode(&mut input)?)
}

/// Write a container to a WAV file.
pub fn write_wav<P: AsRef<Path>>(path: P, wave: &WaveContainer) -> Result<()> {
    write_wav_to(&Sink::File(path.as_ref().to_path_buf()), wave)
}

/// Encode a container to a file or standard output.
///
/// The container is checked before the sink is created, so an unwritable
/// container never truncates or leaves behind an output file.
pub fn write_wav_to(sink: &Sink, wave: &WaveContainer) -> Result<()> {
    wave.writable_format()?;
    let mut output = sink.create()?;
    wave.encode(&mut output)?;
    output.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use tempfile::NamedTempFile;

    #[test]
    fn test_roundtrip_stereo_16() {
        let mut wave = WaveContainer::new(2, 16, 48000);
        for i in 0..1000i16 {
            wave.append_i16(i * 30);
            wave.append_i16(-i * 30);
        }

        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &wave).unwrap();

        let loaded = read_wav(file.path()).unwrap();
        assert_eq!(loaded, wave);
        assert_eq!(std::fs::metadata(file.path()).unwrap().len(), 44 + 4000);
    }

    #[test]
    fn test_info_without_samples() {
        let wave = WaveContainer::with_samples(1, 8, 8000, vec![128; 4000]);
        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &wave).unwrap();

        let info = read_wav_info(file.path()).unwrap();
        assert_eq!(info.channels, 1);
        assert_eq!(info.sample_rate, 8000);
        assert_eq!(info.bits_per_sample, 8);
        assert_eq!(info.data_size, 4000);
        assert_eq!(info.num_frames, 4000);
        assert!((info.duration_secs - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_container_creates_no_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("empty.wav");
        let err = write_wav(&path, &WaveContainer::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::Wave(pcmwave_core::Error::InvalidState(_))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_unsupported_format_keeps_existing_file() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), b"keep").unwrap();

        let wave = WaveContainer::with_samples(1, 24, 8000, vec![0; 6]);
        let err = write_wav(file.path(), &wave).unwrap_err();
        assert!(matches!(
            err,
            Error::Wave(pcmwave_core::Error::UnsupportedFormat { .. })
        ));
        assert_eq!(std::fs::read(file.path()).unwrap(), b"keep");
    }

    #[test]
    fn test_read_garbage_is_malformed() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), [b'X'; 64]).unwrap();
        assert!(matches!(
            read_wav(file.path()),
            Err(Error::Wave(pcmwave_core::Error::MalformedHeader(_)))
        ));
    }
}
