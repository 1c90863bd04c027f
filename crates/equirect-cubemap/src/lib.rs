//! Umbrella crate for the `equirect-cubemap` workspace.
//!
//! Re-exports the pixel-buffer foundation, the resampling layer, and the
//! face renderer. Decode, encode, parallel dispatch, and packaging live in
//! the `eqc-cli` front end.

pub use eqc_core::*;
pub use eqc_render::*;
pub use eqc_sample::*;
