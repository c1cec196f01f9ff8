//! Property-based tests for pcmwave-core.
//!
//! Binary and text round trips, plus frame-count and range invariants of
//! the format conversions, using proptest for randomized containers.

use pcmwave_core::{
    BitDepth, ChannelLayout, ConversionPlan, SampleFormat, WaveContainer, bits_8_to_16,
    bits_16_to_8, decode_text, encode_text, mono_to_stereo, stereo_to_mono,
};
use proptest::prelude::*;

fn format_strategy() -> impl Strategy<Value = SampleFormat> {
    prop_oneof![
        Just(SampleFormat::Mono8),
        Just(SampleFormat::Mono16),
        Just(SampleFormat::Stereo8),
        Just(SampleFormat::Stereo16),
    ]
}

/// A valid container: supported format, positive rate, 1..256 whole frames.
fn wave_strategy() -> impl Strategy<Value = WaveContainer> {
    (format_strategy(), 1u32..=192_000, 1usize..256).prop_flat_map(|(format, rate, frames)| {
        prop::collection::vec(any::<u8>(), frames * format.block_align())
            .prop_map(move |data| WaveContainer::with_samples(format.channels(), format.bits(), rate, data))
    })
}

fn wave_of(format: SampleFormat) -> impl Strategy<Value = WaveContainer> {
    (1usize..128).prop_flat_map(move |frames| {
        prop::collection::vec(any::<u8>(), frames * format.block_align())
            .prop_map(move |data| WaveContainer::with_samples(format.channels(), format.bits(), 8000, data))
    })
}

fn unit_values(wave: &WaveContainer) -> Vec<i32> {
    match wave.sample_format().unwrap().bit_depth() {
        BitDepth::U8 => wave.samples_u8().map(i32::from).collect(),
        BitDepth::I16 => wave.samples_i16().map(i32::from).collect(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// encode then decode reproduces header fields and sample bytes.
    #[test]
    fn binary_round_trip(wave in wave_strategy()) {
        prop_assert!(wave.is_valid());
        let mut bytes = Vec::new();
        wave.encode(&mut bytes).unwrap();
        prop_assert_eq!(bytes.len(), 44 + wave.len());
        let back = WaveContainer::decode(&mut bytes.as_slice()).unwrap();
        prop_assert_eq!(back, wave);
    }

    /// Text round trip keeps frame count and every sample value.
    #[test]
    fn text_round_trip(wave in wave_strategy()) {
        let mut text = Vec::new();
        encode_text(&wave, &mut text).unwrap();
        let back = decode_text(text.as_slice(), wave.sample_rate()).unwrap();
        prop_assert_eq!(back.num_frames(), wave.num_frames());
        prop_assert_eq!(back.num_channels(), wave.num_channels());
        prop_assert_eq!(unit_values(&back), unit_values(&wave));
    }

    /// Truncating the encoded stream anywhere fails without partial state.
    #[test]
    fn truncated_stream_never_decodes(wave in wave_strategy(), cut in any::<prop::sample::Index>()) {
        let mut bytes = Vec::new();
        wave.encode(&mut bytes).unwrap();
        let len = cut.index(bytes.len());
        let mut target = wave.clone();
        prop_assert!(target.decode_from(&mut &bytes[..len]).is_err());
        prop_assert_eq!(target, WaveContainer::default());
    }

    /// Upmix keeps frame count and puts the same value in both channels.
    #[test]
    fn mono_to_stereo_duplicates(wave in prop_oneof![wave_of(SampleFormat::Mono8), wave_of(SampleFormat::Mono16)]) {
        let src_values = unit_values(&wave);
        let frames = wave.num_frames();
        let dst = mono_to_stereo(wave).unwrap();
        prop_assert_eq!(dst.num_frames(), frames);
        let dst_values = unit_values(&dst);
        for (i, pair) in dst_values.chunks_exact(2).enumerate() {
            prop_assert_eq!(pair[0], src_values[i]);
            prop_assert_eq!(pair[1], src_values[i]);
        }
    }

    /// Downmix keeps frame count and lands between the two channel values.
    #[test]
    fn stereo_to_mono_between_channels(wave in prop_oneof![wave_of(SampleFormat::Stereo8), wave_of(SampleFormat::Stereo16)]) {
        let src_values = unit_values(&wave);
        let frames = wave.num_frames();
        let dst = stereo_to_mono(wave).unwrap();
        prop_assert_eq!(dst.num_frames(), frames);
        for (mono, pair) in unit_values(&dst).iter().zip(src_values.chunks_exact(2)) {
            prop_assert!(*mono >= pair[0].min(pair[1]) && *mono <= pair[0].max(pair[1]));
        }
    }

    /// Widening then narrowing returns every 8-bit value unchanged.
    #[test]
    fn widen_then_narrow_is_identity_on_8bit(wave in prop_oneof![wave_of(SampleFormat::Mono8), wave_of(SampleFormat::Stereo8)]) {
        let original = wave.clone();
        let back = bits_16_to_8(bits_8_to_16(wave).unwrap()).unwrap();
        prop_assert_eq!(back, original);
    }

    /// Narrowing is monotonic in the 16-bit input.
    #[test]
    fn narrowing_is_monotonic(a in any::<i16>(), b in any::<i16>()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let src = WaveContainer::with_samples(1, 16, 8000, [lo.to_le_bytes(), hi.to_le_bytes()].concat());
        let dst = bits_16_to_8(src).unwrap();
        prop_assert!(dst.samples()[0] <= dst.samples()[1]);
    }

    /// A full plan always yields a valid container of the requested format.
    #[test]
    fn plan_reaches_target(
        wave in wave_strategy(),
        target in format_strategy(),
        rate in 1u32..=96_000,
    ) {
        let frames = wave.num_frames();
        let plan = ConversionPlan::new()
            .with_channels(target.layout())
            .with_bit_depth(target.bit_depth())
            .with_sample_rate(rate);
        let dst = plan.apply(wave).unwrap();
        prop_assert_eq!(dst.sample_format().unwrap(), target);
        prop_assert_eq!(dst.sample_rate(), rate);
        prop_assert_eq!(dst.num_frames(), frames);
        prop_assert!(dst.is_valid());
    }
}

#[test]
fn layouts_cover_both_channel_counts() {
    assert_eq!(ChannelLayout::from_count(1), Some(ChannelLayout::Mono));
    assert_eq!(ChannelLayout::from_count(2), Some(ChannelLayout::Stereo));
    assert_eq!(ChannelLayout::from_count(0), None);
}
