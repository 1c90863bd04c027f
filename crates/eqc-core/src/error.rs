use core::fmt;

/// Invalid-request taxonomy. Every variant is detected synchronously,
/// before any pixel work begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    SizeMismatch { expected: usize, actual: usize },
    ZeroDimension,
    SourceTooNarrow { width: usize },
    ZeroMaxEdge,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "buffer size mismatch: expected {expected} bytes, got {actual}")
            }
            Self::ZeroDimension => write!(f, "image dimensions must be positive"),
            Self::SourceTooNarrow { width } => {
                write!(f, "source width {width} is below the 4-pixel minimum")
            }
            Self::ZeroMaxEdge => write!(f, "maximum face edge length must be positive"),
        }
    }
}

impl std::error::Error for Error {}
