use eqc_core::PixelBuffer;

use crate::kernel::{BICUBIC_SUPPORT, LANCZOS_SUPPORT, bicubic, lanczos};

/// Closed set of resampling filters. Adding a mode means adding a kernel
/// and a branch in [`sample`]; the exhaustive match keeps that a
/// compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationMode {
    Nearest,
    Bilinear,
    Bicubic,
    Lanczos,
}

/// Samples the three color channels of `src` at a continuous coordinate.
///
/// Alpha is not sampled; the caller fills it.
pub fn sample(src: &PixelBuffer, mode: InterpolationMode, x: f64, y: f64) -> [u8; 3] {
    match mode {
        InterpolationMode::Nearest => sample_nearest(src, x, y),
        InterpolationMode::Bilinear => sample_bilinear(src, x, y),
        InterpolationMode::Bicubic => resample(src, BICUBIC_SUPPORT, bicubic, x, y),
        InterpolationMode::Lanczos => resample(src, LANCZOS_SUPPORT, lanczos, x, y),
    }
}

/// Rounds to the closest pixel and copies its channels verbatim. The
/// integer copy introduces no rounding error.
pub fn sample_nearest(src: &PixelBuffer, x: f64, y: f64) -> [u8; 3] {
    let xi = clamp_index(x.round() as isize, src.width());
    let yi = clamp_index(y.round() as isize, src.height());
    let p = src.pixel(xi, yi);
    [p[0], p[1], p[2]]
}

/// 2x2 weighted blend. Corner indices are clamped per axis; the fractional
/// weights are taken from the unclamped coordinate. Per-channel results use
/// ceiling rounding (not round-to-nearest; see crate docs).
pub fn sample_bilinear(src: &PixelBuffer, x: f64, y: f64) -> [u8; 3] {
    let xl = clamp_index(x.floor() as isize, src.width());
    let xr = clamp_index(x.ceil() as isize, src.width());
    let yl = clamp_index(y.floor() as isize, src.height());
    let yr = clamp_index(y.ceil() as isize, src.height());

    let xf = x - x.floor();
    let yf = y - y.floor();

    let p00 = src.pixel(xl, yl);
    let p10 = src.pixel(xr, yl);
    let p01 = src.pixel(xl, yr);
    let p11 = src.pixel(xr, yr);

    let mut out = [0u8; 3];
    for (c, out_c) in out.iter_mut().enumerate() {
        let top = lerp(p00[c] as f64, p10[c] as f64, xf);
        let bottom = lerp(p01[c] as f64, p11[c] as f64, xf);
        *out_c = lerp(top, bottom, yf).ceil() as u8;
    }
    out
}

/// Generic separable convolution driver shared by bicubic and Lanczos.
///
/// For support radius `filter_size`, the tap window starts at
/// `floor(coord) - filter_size + 1` and spans `2 * filter_size` taps per
/// axis. The two 1D weight vectors are evaluated once, then the weighted
/// sum runs over the window with each tap's integer coordinate clamped
/// per axis (edge replication). Accumulated channel values are rounded to
/// nearest, with the saturating cast absorbing kernel over/undershoot.
pub fn resample(
    src: &PixelBuffer,
    filter_size: usize,
    kernel: fn(f64) -> f64,
    x: f64,
    y: f64,
) -> [u8; 3] {
    const MAX_SUPPORT: usize = LANCZOS_SUPPORT;
    assert!(
        filter_size >= 1 && filter_size <= MAX_SUPPORT,
        "support radius must be in 1..={MAX_SUPPORT}"
    );

    let taps = 2 * filter_size;
    let x_start = x.floor() as isize - filter_size as isize + 1;
    let y_start = y.floor() as isize - filter_size as isize + 1;

    let mut wx = [0.0f64; 2 * MAX_SUPPORT];
    let mut wy = [0.0f64; 2 * MAX_SUPPORT];
    for i in 0..taps {
        wx[i] = kernel(x - (x_start + i as isize) as f64);
        wy[i] = kernel(y - (y_start + i as isize) as f64);
    }

    let mut acc = [0.0f64; 3];
    for (j, &wyj) in wy.iter().enumerate().take(taps) {
        let sy = clamp_index(y_start + j as isize, src.height());
        for (i, &wxi) in wx.iter().enumerate().take(taps) {
            let sx = clamp_index(x_start + i as isize, src.width());
            let w = wxi * wyj;
            let p = src.pixel(sx, sy);
            acc[0] += w * p[0] as f64;
            acc[1] += w * p[1] as f64;
            acc[2] += w * p[2] as f64;
        }
    }

    [
        acc[0].round() as u8,
        acc[1].round() as u8,
        acc[2].round() as u8,
    ]
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[inline]
fn clamp_index(i: isize, len: usize) -> usize {
    if i < 0 { 0 } else { (i as usize).min(len - 1) }
}
