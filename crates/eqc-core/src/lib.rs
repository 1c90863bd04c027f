//! Foundational primitives for the `equirect-cubemap` workspace.
//!
//! ## Pixel Buffers
//! [`PixelBuffer`] holds interleaved 8-bit RGBA samples in row-major order.
//! Channel `c` of pixel `(x, y)` lives at index `4 * (y * width + x) + c`,
//! and constructors validate that the backing storage matches
//! `width * height * 4` exactly, so that index is always in bounds.
//!
//! ## Sampling Coordinates
//! Continuous coordinates use the pixel-center convention: integer
//! coordinates refer to pixel centers. Out-of-range coordinates are always
//! handled with edge replication (clamp), never wraparound.

mod buffer;
mod error;
mod geom;

pub use buffer::PixelBuffer;
pub use error::Error;
pub use geom::Vec3d;
