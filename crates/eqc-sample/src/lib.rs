//! Subpixel sampling over RGBA8 buffers.
//!
//! Coordinates follow the pixel-center convention: sample `(i, j)` is located
//! at continuous position `x = i`, `y = j`.
//!
//! Four interpolation modes with different accuracy/cost tradeoffs:
//! - `Nearest` rounds to the closest pixel and copies it verbatim.
//! - `Bilinear` blends a 2x2 neighborhood with per-channel ceiling rounding.
//! - `Bicubic` runs the convolution driver with a Catmull-Rom-family cubic
//!   (support radius 2).
//! - `Lanczos` runs the convolution driver with a windowed sinc
//!   (support radius 5).
//!
//! Every tap coordinate is clamped per axis to the valid index range
//! (edge replication), so no mode ever reads outside the source buffer.
//!
//! Bilinear rounds with ceiling while the convolution driver rounds to
//! nearest. The mismatch is deliberate and load-bearing for bit-for-bit
//! output parity; do not normalize it.

pub mod kernel;
mod sample;

pub use sample::{
    InterpolationMode, resample, sample, sample_bilinear, sample_nearest,
};
