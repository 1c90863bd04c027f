//! Pure 1D weighting functions for discrete convolution.
//!
//! Conventions:
//! - `w(0) = 1` and `w(x) = 0` for `|x|` at or beyond the support radius.
//! - Kernels are evaluated at signed offsets `query - tap` and are symmetric
//!   in `|x|`.

use std::f64::consts::PI;

/// Support radius of [`bicubic`].
pub const BICUBIC_SUPPORT: usize = 2;

/// Support radius of [`lanczos`].
pub const LANCZOS_SUPPORT: usize = 5;

/// Sharpness parameter of the cubic convolution family. `-0.5` is the
/// Catmull-Rom member.
const B: f64 = -0.5;

/// Two-parameter cubic convolution kernel, `b = -0.5`, support radius 2.
///
/// Piecewise:
/// - `(b+2)|x|^3 - (b+3)|x|^2 + 1` for `|x| <= 1`,
/// - `b|x|^3 - 5b|x|^2 + 8b|x| - 4b` for `1 < |x| <= 2`,
/// - `0` otherwise.
pub fn bicubic(x: f64) -> f64 {
    let x = x.abs();
    if x <= 1.0 {
        (B + 2.0) * x * x * x - (B + 3.0) * x * x + 1.0
    } else if x <= 2.0 {
        B * x * x * x - 5.0 * B * x * x + 8.0 * B * x - 4.0 * B
    } else {
        0.0
    }
}

/// Windowed-sinc kernel, support radius 5.
///
/// `w(0) = 1`; `a*sin(pi*x)*sin(pi*x/a) / (pi*x)^2` for `0 < |x| <= a`;
/// `0` beyond the support radius.
pub fn lanczos(x: f64) -> f64 {
    const A: f64 = LANCZOS_SUPPORT as f64;

    if x == 0.0 {
        return 1.0;
    }

    let x = x.abs();
    if x > A {
        return 0.0;
    }

    let px = PI * x;
    A * px.sin() * (px / A).sin() / (px * px)
}
