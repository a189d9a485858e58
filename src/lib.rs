// MIT/Apache2 License

//! Crop straight-line path data against a rectangular canvas.
//!
//! Each element of a [`Document`] is decoded, the segment between its first two points is clipped against
//! the bounds, and the element is then left alone, rewritten to the clipped segment, or removed.

#![forbid(unsafe_code)]

mod crop;
mod document;
mod error;
mod path;

pub use crop::*;
pub use document::*;
pub use error::*;
pub use path::*;

#[doc(inline)]
pub use linecrop_geometry::{
    check_bounds, clip_convex, clip_rect, default_bounds, point, Box2D, ClipOutcome, ConvexPolygon,
    GeometryError, LineSegment, Point, Winding,
};
