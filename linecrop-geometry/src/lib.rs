// BSL 1.0 License

//! Line segment clipping primitives used by the `linecrop` crate.
//!
//! Two clippers live here. [`clip_convex`] is a Cyrus-Beck clipper that works against any
//! [`ConvexPolygon`], and [`clip_rect`] is a Liang-Barsky clipper specialized for axis-aligned
//! rectangles. Both take a [`LineSegment`] and produce a [`ClipOutcome`].
//!
//! Points, vectors, segments and boxes are the `lyon_geom`/`euclid` types, so clipped geometry can be
//! handed to the rest of the lyon ecosystem as-is.

#![no_std]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod convex;
pub use convex::*;

mod error;
pub use error::*;

mod float;

mod outcome;
pub use outcome::*;

mod polygon;
pub use polygon::*;

mod rect;
pub use rect::*;

pub use euclid::default::Box2D;
pub use lyon_geom::{point, vector, LineSegment, Point, Scalar, Vector};
