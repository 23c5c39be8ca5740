/// Anchor colours of a magma-like ramp, dark to light.
const MAGMA: [[u8; 3]; 5] = [
    [0, 0, 4],
    [81, 18, 124],
    [183, 55, 121],
    [252, 137, 97],
    [252, 253, 191],
];

/// Maps `t` in `[0, 1]` to an RGB colour. Values outside are clamped.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn magma(t: f64) -> [u8; 3] {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let segments = (MAGMA.len() - 1) as f64;

    let scaled = t * segments;
    let index = (scaled.floor() as usize).min(MAGMA.len() - 2);
    let frac = scaled - index as f64;

    let [lo, hi] = [MAGMA[index], MAGMA[index + 1]];
    std::array::from_fn(|c| {
        let (lo, hi) = (f64::from(lo[c]), f64::from(hi[c]));
        (lo + (hi - lo) * frac).round() as u8
    })
}
