use eqc_core::Vec3d;

/// One of the six cube-map faces. The set is closed; every face maps to
/// exactly one orientation in [`orient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceId {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl FaceId {
    pub const ALL: [FaceId; 6] = [
        FaceId::PosX,
        FaceId::NegX,
        FaceId::PosY,
        FaceId::NegY,
        FaceId::PosZ,
        FaceId::NegZ,
    ];

    /// Short stable name used for output file names.
    pub fn name(self) -> &'static str {
        match self {
            FaceId::PosX => "px",
            FaceId::NegX => "nx",
            FaceId::PosY => "py",
            FaceId::NegY => "ny",
            FaceId::PosZ => "pz",
            FaceId::NegZ => "nz",
        }
    }
}

/// Maps a face-local coordinate to a direction on the unit cube.
///
/// `u, v` are in `[-1, 1]` with the face center at the origin. The six
/// axis assignments are fixed constants, chosen so neighboring faces meet
/// without mirroring.
pub fn orient(face: FaceId, u: f64, v: f64) -> Vec3d {
    match face {
        FaceId::PosZ => Vec3d::new(-1.0, -u, -v),
        FaceId::NegZ => Vec3d::new(1.0, u, -v),
        FaceId::PosX => Vec3d::new(u, -1.0, -v),
        FaceId::NegX => Vec3d::new(-u, 1.0, -v),
        FaceId::PosY => Vec3d::new(-v, -u, 1.0),
        FaceId::NegY => Vec3d::new(v, -u, -1.0),
    }
}
