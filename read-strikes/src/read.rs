//! Errors that occur when reading strike records

/// An error that occurs when reading strike data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    OutOfBounds,
    InvalidArrayLen,
    NullPointer,
    InvalidStrikeIndex(usize),
    NoMatchingStrike { width: u32, height: u32 },
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReadError::OutOfBounds => write!(f, "A record was out of bounds"),
            ReadError::InvalidArrayLen => {
                write!(f, "Specified array length not a multiple of item size")
            }
            ReadError::NullPointer => write!(f, "A non-empty array had a null address"),
            ReadError::InvalidStrikeIndex(ix) => write!(f, "Invalid strike index {ix}"),
            ReadError::NoMatchingStrike { width, height } => {
                write!(f, "No strike matches the pixel size {width}x{height}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReadError {}
