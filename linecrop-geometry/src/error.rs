// BSL 1.0 License

use core::fmt;

/// Bounds that cannot be clipped against.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GeometryError {
    /// A polygon needs at least three vertices. Contains the number that was given.
    TooFewVertices(usize),
    /// The vertices of a polygon do not go around it in the direction it was declared with.
    WindingMismatch,
    /// The vertices of a polygon enclose no area, so they have no winding.
    ZeroArea,
    /// The minimum corner of a rectangle is not below and to the left of its maximum corner.
    InvalidBounds,
}

impl fmt::Display for GeometryError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewVertices(n) => write!(f, "Polygon has {} vertices, at least 3 are needed", n),
            Self::WindingMismatch => f.write_str("Polygon vertices do not match the declared winding"),
            Self::ZeroArea => f.write_str("Polygon encloses no area"),
            Self::InvalidBounds => f.write_str("Rectangle minimum corner exceeds its maximum corner"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GeometryError {}
