use std::f64::consts::{PI, TAU};

use crate::face::{FaceId, orient};

/// Maps a destination pixel `(x, y)` on a face of edge length `edge` to
/// continuous source-image coordinates.
///
/// Destination pixels are sampled at cell centers, so `u, v` land in the
/// open interval `(-1, 1)`. Longitude is normalized with a floored modulo
/// and is therefore never negative; latitude comes out of `acos` in
/// `[0, pi]`. The trailing `-0.5` aligns the continuous coordinates with
/// pixel-center sampling.
///
/// Poles need no special casing: `atan2(0, 0)` is `0`, and downstream
/// sampling clamps.
pub fn source_coords(
    face: FaceId,
    x: usize,
    y: usize,
    edge: usize,
    rotation: f64,
    src_width: usize,
    src_height: usize,
) -> (f64, f64) {
    let u = 2.0 * (x as f64 + 0.5) / edge as f64 - 1.0;
    let v = 2.0 * (y as f64 + 0.5) / edge as f64 - 1.0;

    let d = orient(face, u, v);
    let r = d.norm();
    let lon = (d.y.atan2(d.x) + rotation).rem_euclid(TAU);
    let lat = (d.z / r).acos();

    let src_x = src_width as f64 * lon / TAU - 0.5;
    let src_y = src_height as f64 * lat / PI - 0.5;
    (src_x, src_y)
}
