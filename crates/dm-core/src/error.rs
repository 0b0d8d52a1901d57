use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    SizeMismatch { expected: usize, actual: usize },
    /// Image dimensions that do not fit the signed lattice coordinate range.
    DimensionOverflow { width: usize, height: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected}, got {actual}")
            }
            Self::DimensionOverflow { width, height } => {
                write!(f, "image dimensions {width}x{height} exceed the i32 lattice")
            }
        }
    }
}

impl std::error::Error for Error {}
