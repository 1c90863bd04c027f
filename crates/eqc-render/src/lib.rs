//! Equirectangular-to-cube-face reprojection.
//!
//! The source panorama maps horizontal pixel position linearly to longitude
//! (a full turn across the width) and vertical position to latitude (half a
//! turn across the height), poles at `z = ±r`. Each cube face covers a
//! contiguous 90°x90° patch of the sphere with consistent winding across
//! face boundaries; the sign table in [`face::orient`] is canonical.
//!
//! Rendering one face is a pure function from `(source, request)` to a
//! freshly allocated destination buffer: no I/O, no shared mutable state,
//! no suspension points. Callers may render the six faces fully in parallel
//! over one shared immutable source with zero coordination.

mod face;
mod render;
mod reproject;

pub use face::{FaceId, orient};
pub use render::{DEFAULT_MAX_EDGE, RenderRequest, render_face};
pub use reproject::source_coords;
