// MIT/Apache2 License

use crate::ElementId;
use linecrop_geometry::GeometryError;
use std::fmt;

/// Sum error type for linecrop operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The path data used a command other than `M`, `L`, `H`, `V` or `Z`. Curves and arcs end up here.
    UnsupportedCommand(char),
    /// A command was not followed by enough numbers.
    MissingArgument(char),
    /// A number appeared before any command.
    UnexpectedNumber,
    /// A token could not be read as a finite number.
    InvalidNumber(String),
    /// The path has fewer than two points, so there is no segment to clip. Contains the number of points.
    NotALine(usize),
    /// The document does not contain the given element.
    NoSuchElement(ElementId),
    /// The bounds could not be clipped against.
    Geometry(GeometryError),
}

impl std::error::Error for Error {
    #[inline]
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Geometry(g) => Some(g),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedCommand(c) => write!(f, "Path command \"{}\" is not supported", c),
            Self::MissingArgument(c) => write!(f, "Path command \"{}\" is missing an argument", c),
            Self::UnexpectedNumber => f.write_str("Path data starts with a number instead of a command"),
            Self::InvalidNumber(s) => write!(f, "\"{}\" is not a valid coordinate", s),
            Self::NotALine(n) => write!(f, "Path has {} points, at least 2 are needed", n),
            Self::NoSuchElement(e) => write!(f, "Element {} does not exist", e),
            Self::Geometry(g) => fmt::Display::fmt(g, f),
        }
    }
}

impl From<GeometryError> for Error {
    #[inline]
    fn from(ge: GeometryError) -> Self {
        Self::Geometry(ge)
    }
}

/// Convenience result type.
pub type Result<T = ()> = std::result::Result<T, Error>;
