//! The in-memory WAVE container.

use crate::error::{Error, Result};
use crate::format::{Sample, SampleFormat};
use crate::header::{HEADER_LEN, WaveHeader};
use std::io::{ErrorKind, Read, Write};

/// Default channel count for a fresh container.
pub const DEFAULT_CHANNELS: u16 = 1;
/// Default bits per sample for a fresh container.
pub const DEFAULT_BITS_PER_SAMPLE: u16 = 8;
/// Default sample rate for a fresh container.
pub const DEFAULT_SAMPLE_RATE: u32 = 8000;

/// Canonical PCM WAVE header plus an owned buffer of interleaved sample bytes.
///
/// The derived header fields (`byte_rate`, `block_align`, `data_size`,
/// `total_size`) are recomputed by every mutator, so they never go stale.
/// A container is only [valid](WaveContainer::is_valid) for writing once it
/// holds at least one full frame.
///
/// # Example
///
/// ```rust
/// use pcmwave_core::WaveContainer;
///
/// let mut wave = WaveContainer::new(2, 16, 44100);
/// wave.append_i16(-1);
/// wave.append_i16(1);
/// assert_eq!(wave.num_frames(), 1);
/// assert_eq!(wave.byte_rate(), 176400);
///
/// let mut bytes = Vec::new();
/// wave.encode(&mut bytes).unwrap();
/// let back = pcmwave_core::WaveContainer::decode(&mut bytes.as_slice()).unwrap();
/// assert_eq!(back, wave);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveContainer {
    header: WaveHeader,
    data: Vec<u8>,
}

impl Default for WaveContainer {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNELS, DEFAULT_BITS_PER_SAMPLE, DEFAULT_SAMPLE_RATE)
    }
}

impl WaveContainer {
    /// Create an empty container with the given configuration.
    pub fn new(channels: u16, bits_per_sample: u16, sample_rate: u32) -> Self {
        Self {
            header: WaveHeader::canonical(channels, bits_per_sample, sample_rate),
            data: Vec::new(),
        }
    }

    /// Create a container holding `data` as its interleaved sample bytes.
    pub fn with_samples(
        channels: u16,
        bits_per_sample: u16,
        sample_rate: u32,
        data: impl Into<Vec<u8>>,
    ) -> Self {
        let mut wave = Self::new(channels, bits_per_sample, sample_rate);
        wave.set_samples(data);
        wave
    }

    /// Empty container shaped for a supported format.
    pub fn for_format(format: SampleFormat, sample_rate: u32) -> Self {
        Self::new(format.channels(), format.bits(), sample_rate)
    }

    /// Reconfigure channels, depth, and rate, discarding all sample data.
    pub fn configure(&mut self, channels: u16, bits_per_sample: u16, sample_rate: u32) {
        self.header = WaveHeader::canonical(channels, bits_per_sample, sample_rate);
        self.data.clear();
        self.refresh();
    }

    /// Reset to the default configuration with no data.
    pub fn clear(&mut self) {
        self.configure(DEFAULT_CHANNELS, DEFAULT_BITS_PER_SAMPLE, DEFAULT_SAMPLE_RATE);
    }

    fn refresh(&mut self) {
        self.header.refresh(self.data.len());
    }

    // --- header fields ---

    /// Raw header as it would be written.
    pub fn header(&self) -> &WaveHeader {
        &self.header
    }

    /// Interleaved channel count.
    pub fn num_channels(&self) -> u16 {
        self.header.num_channels
    }

    /// Change the channel count without touching sample data.
    pub fn set_num_channels(&mut self, channels: u16) {
        self.header.num_channels = channels;
        self.refresh();
    }

    /// Bits per sample unit.
    pub fn bits_per_sample(&self) -> u16 {
        self.header.bits_per_sample
    }

    /// Change the bit depth without touching sample data.
    pub fn set_bits_per_sample(&mut self, bits: u16) {
        self.header.bits_per_sample = bits;
        self.refresh();
    }

    /// Playback rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.header.sample_rate
    }

    /// Relabel the playback rate. Samples are not resampled.
    pub fn set_sample_rate(&mut self, rate: u32) {
        self.header.sample_rate = rate;
        self.refresh();
    }

    /// Bytes per second of playback.
    pub fn byte_rate(&self) -> u32 {
        self.header.byte_rate
    }

    /// Bytes per frame.
    pub fn block_align(&self) -> u16 {
        self.header.block_align
    }

    /// Declared sample data length in bytes.
    pub fn data_size(&self) -> u32 {
        self.header.data_size
    }

    /// Declared RIFF chunk size (`36 + data_size`).
    pub fn total_size(&self) -> u32 {
        self.header.total_size
    }

    /// `true` for one channel.
    pub fn is_mono(&self) -> bool {
        self.num_channels() == 1
    }

    /// `true` for two channels.
    pub fn is_stereo(&self) -> bool {
        self.num_channels() == 2
    }

    /// Resolve the configuration to a supported [`SampleFormat`].
    pub fn sample_format(&self) -> Result<SampleFormat> {
        SampleFormat::new(self.num_channels(), self.bits_per_sample())
    }

    /// Playback length in seconds.
    ///
    /// Only meaningful when channels, rate and bit depth are all nonzero;
    /// otherwise the result is infinite or NaN.
    pub fn duration_seconds(&self) -> f64 {
        f64::from(self.header.data_size)
            / f64::from(self.num_channels())
            / f64::from(self.sample_rate())
            / f64::from(self.bits_per_sample() / 8)
    }

    // --- sample data ---

    /// Sample data length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` when no sample bytes are held.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of complete frames.
    pub fn num_frames(&self) -> usize {
        match self.block_align() {
            0 => 0,
            align => self.data.len() / usize::from(align),
        }
    }

    /// Reserve room for `additional` more sample bytes.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Append one 8-bit sample unit.
    pub fn append_u8(&mut self, sample: u8) {
        self.data.push(sample);
        self.refresh();
    }

    /// Append one 16-bit sample unit, little-endian.
    pub fn append_i16(&mut self, sample: i16) {
        sample.push_le(&mut self.data);
        self.refresh();
    }

    /// Append one sample unit of either supported width.
    pub fn append<S: Sample>(&mut self, sample: S) {
        sample.push_le(&mut self.data);
        self.refresh();
    }

    /// Replace the sample buffer.
    pub fn set_samples(&mut self, data: impl Into<Vec<u8>>) {
        self.data = data.into();
        self.refresh();
    }

    /// Borrow the raw sample bytes.
    pub fn samples(&self) -> &[u8] {
        &self.data
    }

    /// Copy out the raw sample bytes.
    pub fn to_samples(&self) -> Vec<u8> {
        self.data.clone()
    }

    /// Consume the container, keeping only its sample bytes.
    pub fn into_samples(self) -> Vec<u8> {
        self.data
    }

    /// The `index`-th 8-bit sample unit.
    pub fn sample_u8(&self, index: usize) -> Option<u8> {
        self.sample_at::<u8>(index)
    }

    /// The `index`-th 16-bit sample unit.
    pub fn sample_i16(&self, index: usize) -> Option<i16> {
        self.sample_at::<i16>(index)
    }

    /// Overwrite the `index`-th 8-bit sample unit.
    pub fn set_sample_u8(&mut self, index: usize, value: u8) -> Result<()> {
        self.set_sample_at(index, value)
    }

    /// Overwrite the `index`-th 16-bit sample unit.
    pub fn set_sample_i16(&mut self, index: usize, value: i16) -> Result<()> {
        self.set_sample_at(index, value)
    }

    /// Iterate over the buffer as 8-bit sample units.
    pub fn samples_u8(&self) -> impl Iterator<Item = u8> + '_ {
        self.data.iter().copied()
    }

    /// Iterate over the buffer as 16-bit sample units. A trailing odd byte is ignored.
    pub fn samples_i16(&self) -> impl Iterator<Item = i16> + '_ {
        self.data.chunks_exact(2).map(i16::read_le)
    }

    fn sample_at<S: Sample>(&self, index: usize) -> Option<S> {
        let width = S::DEPTH.bytes();
        let start = index.checked_mul(width)?;
        let bytes = self.data.get(start..start.checked_add(width)?)?;
        Some(S::read_le(bytes))
    }

    fn set_sample_at<S: Sample>(&mut self, index: usize, value: S) -> Result<()> {
        let width = S::DEPTH.bytes();
        let len = self.data.len() / width;
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        let start = index * width;
        value.write_le(&mut self.data[start..start + width]);
        Ok(())
    }

    // --- validation ---

    /// Tags, format chunk, and derived rate/alignment are consistent.
    pub fn is_header_consistent(&self) -> bool {
        self.header.is_consistent()
    }

    /// Full write-readiness check, reporting the first failure.
    pub fn validate(&self) -> Result<()> {
        self.header.check()?;
        if self.data.is_empty() {
            return Err(Error::InvalidState("no sample data"));
        }
        if self.header.data_size as usize != self.data.len() {
            return Err(Error::InvalidState("data size does not match sample buffer"));
        }
        match self.block_align() {
            0 => Err(Error::InvalidState("block align is zero")),
            align if self.data.len() % usize::from(align) != 0 => Err(Error::InvalidState(
                "sample buffer is not a whole number of frames",
            )),
            _ => Ok(()),
        }
    }

    /// Header consistent, data non-empty, frame aligned, and `data_size` accurate.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// [`validate`](Self::validate), then resolve the format.
    ///
    /// Both encoders go through this: a consistent header for, say, 24-bit
    /// or 3-channel PCM is still rejected with `UnsupportedFormat`.
    pub fn writable_format(&self) -> Result<SampleFormat> {
        self.validate()?;
        self.sample_format()
    }

    // --- binary codec ---

    /// Read a header and exactly `data_size` bytes of sample data.
    pub fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        let header = WaveHeader::read_from(reader).inspect_err(|e| {
            tracing::warn!("wave header read failed: {e}");
        })?;
        header.check().inspect_err(|e| tracing::warn!("{e}"))?;
        if header.num_channels == 0 || header.bits_per_sample == 0 {
            return Err(Error::MalformedHeader(format!(
                "{} channel(s) at {}-bit carries no samples",
                header.num_channels, header.bits_per_sample
            )));
        }

        let expected = header.data_size as usize;
        let mut data = Vec::new();
        let got = reader
            .by_ref()
            .take(u64::from(header.data_size))
            .read_to_end(&mut data)?;
        if got < expected {
            tracing::warn!(expected, got, "wave data truncated");
            return Err(Error::ShortRead {
                expected: HEADER_LEN + expected,
                actual: HEADER_LEN + got,
            });
        }

        let wave = Self { header, data };
        match wave.validate() {
            Ok(()) => {
                tracing::debug!(
                    channels = wave.num_channels(),
                    bits = wave.bits_per_sample(),
                    rate = wave.sample_rate(),
                    bytes = wave.len(),
                    "decoded wave"
                );
                Ok(wave)
            }
            Err(Error::InvalidState(reason)) => Err(Error::MalformedHeader(reason.to_string())),
            Err(e) => Err(e),
        }
    }

    /// Decode into `self`, resetting to the default empty state on failure.
    pub fn decode_from<R: Read>(&mut self, reader: &mut R) -> Result<()> {
        match Self::decode(reader) {
            Ok(wave) => {
                *self = wave;
                Ok(())
            }
            Err(e) => {
                self.clear();
                Err(e)
            }
        }
    }

    /// Write the header and sample data.
    pub fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        if self.data.len() > u32::MAX as usize {
            return Err(Error::InvalidState("sample data exceeds 4 GiB"));
        }
        self.writable_format()?;
        write_all(writer, &self.header.to_bytes())?;
        write_all(writer, &self.data)?;
        tracing::debug!(bytes = HEADER_LEN + self.data.len(), "encoded wave");
        Ok(())
    }
}

fn write_all<W: Write>(writer: &mut W, bytes: &[u8]) -> Result<()> {
    writer.write_all(bytes).map_err(|e| match e.kind() {
        ErrorKind::WriteZero => Error::ShortWrite,
        _ => Error::Io(e),
    })
}
