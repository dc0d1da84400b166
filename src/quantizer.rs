/// Map continuous samples onto the signed integer code grid of the given bit depth
/// Input is expected in [-1, 1]; the grid spans [-2^(bits-1), 2^(bits-1)]
/// Out-of-range input is passed through and yields codes beyond the rails
/// (no clamping here; narrowing to the target width happens at serialization)
pub fn quantize(wave: &[f64], bits: u32) -> Vec<f64> {
    let step = 1.0 / (1u64 << bits) as f64;
    let half_range = (1u64 << (bits - 1)) as f64;

    wave.iter()
        .map(|&v| {
            let u = (v + 1.0) / 2.0;
            // Ties round to the nearest even code (matches the fixture files
            // already in circulation)
            (u / step - half_range).round_ties_even()
        })
        .collect()
}
