//! Interop tests against hound, a widely used WAV reader/writer.

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use pcmwave_core::WaveContainer;
use std::io::Cursor;

fn encode(wave: &WaveContainer) -> Vec<u8> {
    let mut bytes = Vec::new();
    wave.encode(&mut bytes).unwrap();
    bytes
}

#[test]
fn hound_reads_stereo_16bit() {
    let values: [i16; 6] = [-32768, 32767, 0, -1, 1234, -4321];
    let mut wave = WaveContainer::new(2, 16, 44100);
    for v in values {
        wave.append_i16(v);
    }

    let reader = WavReader::new(Cursor::new(encode(&wave))).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 2);
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, SampleFormat::Int);

    let read: Vec<i16> = reader
        .into_samples::<i16>()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(read, values);
}

#[test]
fn hound_reads_mono_8bit_as_offset_signed() {
    let wave = WaveContainer::with_samples(1, 8, 8000, vec![0, 128, 255]);
    let reader = WavReader::new(Cursor::new(encode(&wave))).unwrap();
    assert_eq!(reader.spec().bits_per_sample, 8);
    assert_eq!(reader.duration(), 3);

    let read: Vec<i16> = reader
        .into_samples::<i16>()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(read, vec![-128, 0, 127]);
}

#[test]
fn decodes_hound_written_16bit() {
    let spec = WavSpec {
        channels: 1,
        sample_rate: 22050,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut cursor, spec).unwrap();
        for v in [0i16, 100, -100, 32767] {
            writer.write_sample(v).unwrap();
        }
        writer.finalize().unwrap();
    }

    let bytes = cursor.into_inner();
    let wave = WaveContainer::decode(&mut bytes.as_slice()).unwrap();
    assert_eq!(wave.num_channels(), 1);
    assert_eq!(wave.sample_rate(), 22050);
    assert_eq!(wave.bits_per_sample(), 16);
    assert_eq!(
        wave.samples_i16().collect::<Vec<_>>(),
        vec![0, 100, -100, 32767]
    );
    assert!((wave.duration_seconds() - 4.0 / 22050.0).abs() < 1e-12);
}
