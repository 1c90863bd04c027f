use eqc_core::{Error, PixelBuffer};
use eqc_sample::{InterpolationMode, sample};

use crate::face::FaceId;
use crate::reproject::source_coords;

pub const DEFAULT_MAX_EDGE: usize = 1024;

/// Everything needed to render one cube face from one panorama. Immutable
/// once constructed; consumed once by [`render_face`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub face: FaceId,
    /// Rotation applied to longitude, in radians. Any real value; the
    /// reprojection normalizes with a floored modulo.
    pub rotation: f64,
    pub interpolation: InterpolationMode,
    /// Upper bound on the output edge length, in pixels.
    pub max_edge: usize,
}

impl RenderRequest {
    pub fn new(face: FaceId, interpolation: InterpolationMode) -> Self {
        Self {
            face,
            rotation: 0.0,
            interpolation,
            max_edge: DEFAULT_MAX_EDGE,
        }
    }
}

/// Renders one complete cube face.
///
/// The output edge length is `min(max_edge, src_width / 4)`. Validation
/// happens before any pixel work, so a failed request produces no partial
/// output. The returned buffer is freshly allocated and exclusively owned
/// by the caller; alpha is fully opaque everywhere.
pub fn render_face(src: &PixelBuffer, req: &RenderRequest) -> Result<PixelBuffer, Error> {
    if src.width() < 4 {
        return Err(Error::SourceTooNarrow { width: src.width() });
    }
    if req.max_edge == 0 {
        return Err(Error::ZeroMaxEdge);
    }

    let edge = req.max_edge.min(src.width() / 4);
    debug_assert!(edge >= 1);

    let mut dst = PixelBuffer::new_fill(edge, edge, [0, 0, 0, 255]);
    for y in 0..edge {
        for x in 0..edge {
            let (sx, sy) = source_coords(
                req.face,
                x,
                y,
                edge,
                req.rotation,
                src.width(),
                src.height(),
            );
            let [r, g, b] = sample(src, req.interpolation, sx, sy);
            dst.set_pixel(x, y, [r, g, b, 255]);
        }
    }
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;

    use eqc_core::{Error, PixelBuffer};
    use eqc_sample::InterpolationMode;

    use super::{DEFAULT_MAX_EDGE, FaceId, RenderRequest, render_face};

    const MODES: [InterpolationMode; 4] = [
        InterpolationMode::Nearest,
        InterpolationMode::Bilinear,
        InterpolationMode::Bicubic,
        InterpolationMode::Lanczos,
    ];

    /// Panorama with a deterministic per-pixel pattern and non-opaque
    /// source alpha (the renderer must not copy it through).
    fn patterned(width: usize, height: usize) -> PixelBuffer {
        let mut data = Vec::with_capacity(width * height * 4);
        for i in 0..(width * height) {
            let v = (i * 31 % 251) as u8;
            data.extend_from_slice(&[v, v.wrapping_add(85), v.wrapping_mul(7), 7]);
        }
        PixelBuffer::from_vec(width, height, data).expect("valid buffer")
    }

    /// Longitude-linear red ramp: red = 4 * x, green/blue constant.
    fn longitude_ramp(width: usize, height: usize) -> PixelBuffer {
        let mut data = Vec::with_capacity(width * height * 4);
        for _ in 0..height {
            for x in 0..width {
                data.extend_from_slice(&[(4 * x) as u8, 128, 128, 255]);
            }
        }
        PixelBuffer::from_vec(width, height, data).expect("valid buffer")
    }

    #[test]
    fn edge_length_derivation() {
        let src = patterned(400, 200);
        let req = RenderRequest::new(FaceId::PosX, InterpolationMode::Nearest);
        assert_eq!(req.max_edge, DEFAULT_MAX_EDGE);

        let face = render_face(&src, &req).expect("valid request");
        assert_eq!((face.width(), face.height()), (100, 100));

        let clamped = RenderRequest {
            max_edge: 32,
            ..req
        };
        let face = render_face(&src, &clamped).expect("valid request");
        assert_eq!((face.width(), face.height()), (32, 32));
    }

    #[test]
    fn rejects_degenerate_requests() {
        let narrow = patterned(3, 2);
        let req = RenderRequest::new(FaceId::PosZ, InterpolationMode::Bilinear);
        assert_eq!(
            render_face(&narrow, &req),
            Err(Error::SourceTooNarrow { width: 3 })
        );

        let src = patterned(8, 4);
        let zero = RenderRequest {
            max_edge: 0,
            ..req
        };
        assert_eq!(render_face(&src, &zero), Err(Error::ZeroMaxEdge));
    }

    #[test]
    fn solid_4x1_source_yields_one_solid_pixel() {
        let src = PixelBuffer::new_fill(4, 1, [10, 20, 30, 255]);
        for mode in MODES {
            for rotation in [0.0, 1.23, -7.0] {
                let req = RenderRequest {
                    rotation,
                    ..RenderRequest::new(FaceId::NegY, mode)
                };
                let face = render_face(&src, &req).expect("valid request");
                assert_eq!((face.width(), face.height()), (1, 1));
                assert_eq!(face.pixel(0, 0), [10, 20, 30, 255], "mode {mode:?}");
            }
        }
    }

    #[test]
    fn alpha_is_opaque_for_every_face_and_mode() {
        let src = patterned(32, 16);
        for mode in MODES {
            for face_id in FaceId::ALL {
                let req = RenderRequest::new(face_id, mode);
                let face = render_face(&src, &req).expect("valid request");
                for y in 0..face.height() {
                    for x in 0..face.width() {
                        assert_eq!(
                            face.pixel(x, y)[3],
                            255,
                            "face {face_id:?} mode {mode:?} at ({x}, {y})"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn repeated_renders_are_byte_identical() {
        let src = patterned(64, 32);
        for mode in MODES {
            let req = RenderRequest {
                rotation: 0.4,
                ..RenderRequest::new(FaceId::PosY, mode)
            };
            let a = render_face(&src, &req).expect("valid request");
            let b = render_face(&src, &req).expect("valid request");
            assert_eq!(a.data(), b.data(), "mode {mode:?}");
        }
    }

    #[test]
    fn full_turn_rotation_is_identity() {
        let src = patterned(64, 32);
        for mode in MODES {
            let zero = RenderRequest::new(FaceId::NegX, mode);
            let turn = RenderRequest {
                rotation: TAU,
                ..zero
            };
            let a = render_face(&src, &zero).expect("valid request");
            let b = render_face(&src, &turn).expect("valid request");
            assert_eq!(a.data(), b.data(), "mode {mode:?}");
        }
    }

    #[test]
    fn ring_neighbors_meet_without_a_hard_seam() {
        // On a longitude-linear ramp the red channel changes by 4 per
        // source column. Columns either side of the nz/nx boundary sit
        // about one source column apart in longitude, so anything past a
        // couple of ramp steps would mean inconsistent orientation signs.
        let src = longitude_ramp(64, 32);
        let mode = InterpolationMode::Bilinear;

        let nz = render_face(&src, &RenderRequest::new(FaceId::NegZ, mode))
            .expect("valid request");
        let nx = render_face(&src, &RenderRequest::new(FaceId::NegX, mode))
            .expect("valid request");

        let edge = nz.width();
        assert_eq!(edge, 16);
        for y in 0..edge {
            let right = nz.pixel(edge - 1, y)[0] as i32;
            let left = nx.pixel(0, y)[0] as i32;
            assert!(
                (right - left).abs() <= 8,
                "seam jump {right} vs {left} at row {y}"
            );
        }
    }
}
