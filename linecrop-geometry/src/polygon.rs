// BSL 1.0 License

use super::{default_bounds, point, vector, Box2D, GeometryError, LineSegment, Point, Scalar, Vector};
use alloc::vec::Vec;

/// The direction in which the vertices of a polygon go around it.
///
/// Winding is measured with the Y axis pointing up: a ring of vertices with a negative signed area is
/// clockwise. On a canvas where the Y axis points down, the same ring appears counter-clockwise.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Winding {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Winding {
    /// Tell which way a ring of vertices winds. Returns `None` if the ring encloses no area.
    #[must_use]
    pub fn of<S: Scalar>(vertices: &[Point<S>]) -> Option<Winding> {
        let area = double_signed_area(vertices);
        if area < S::ZERO {
            Some(Winding::Clockwise)
        } else if area > S::ZERO {
            Some(Winding::CounterClockwise)
        } else {
            None
        }
    }

    /// The opposite winding.
    #[must_use]
    #[inline]
    pub fn reverse(self) -> Winding {
        match self {
            Winding::Clockwise => Winding::CounterClockwise,
            Winding::CounterClockwise => Winding::Clockwise,
        }
    }

    /// The normal of an edge vector, pointing into a polygon that winds this way.
    #[must_use]
    #[inline]
    pub fn inward_normal<S: Scalar>(self, edge: Vector<S>) -> Vector<S> {
        match self {
            Winding::Clockwise => vector(edge.y, -edge.x),
            Winding::CounterClockwise => vector(-edge.y, edge.x),
        }
    }
}

/// A convex polygon that line segments can be clipped against.
///
/// The polygon carries its [`Winding`], which decides the direction of its edge normals. Convexity itself
/// is never checked; clipping against a concave polygon gives meaningless results.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexPolygon<S> {
    vertices: Vec<Point<S>>,
    winding: Winding,
}

impl<S: Scalar> ConvexPolygon<S> {
    /// Create a new polygon, checking that it has at least three vertices and that they go around it in
    /// the direction of `winding`.
    ///
    /// # Errors
    ///
    /// Fails with [`GeometryError::TooFewVertices`], [`GeometryError::ZeroArea`] or
    /// [`GeometryError::WindingMismatch`].
    pub fn new(vertices: Vec<Point<S>>, winding: Winding) -> Result<Self, GeometryError> {
        let detected = detect(&vertices)?;
        if detected == winding {
            Ok(Self { vertices, winding })
        } else {
            Err(GeometryError::WindingMismatch)
        }
    }

    /// Create a new polygon, taking its winding from the order of its vertices.
    ///
    /// # Errors
    ///
    /// Fails with [`GeometryError::TooFewVertices`] or [`GeometryError::ZeroArea`].
    pub fn from_vertices(vertices: Vec<Point<S>>) -> Result<Self, GeometryError> {
        let winding = detect(&vertices)?;
        Ok(Self { vertices, winding })
    }

    /// Create a new polygon without checking anything. If `winding` does not describe `vertices`, the edge
    /// normals point outwards and clipping results are mirrored.
    #[must_use]
    #[inline]
    pub fn new_unchecked(vertices: Vec<Point<S>>, winding: Winding) -> Self {
        Self { vertices, winding }
    }

    /// The four corners of a rectangle, clockwise, starting at the top left.
    #[must_use]
    pub fn from_rect(rect: &Box2D<S>) -> Self {
        let Box2D { min, max } = *rect;
        Self {
            vertices: alloc::vec![
                point(min.x, max.y),
                max,
                point(max.x, min.y),
                min,
            ],
            winding: Winding::Clockwise,
        }
    }

    /// The vertices of this polygon.
    #[must_use]
    #[inline]
    pub fn vertices(&self) -> &[Point<S>] {
        &self.vertices
    }

    #[must_use]
    #[inline]
    pub fn winding(&self) -> Winding {
        self.winding
    }

    /// Iterate over the edges of this polygon, from each vertex to the next, wrapping around at the end.
    #[inline]
    pub fn edges(&self) -> impl Iterator<Item = LineSegment<S>> + '_ {
        ring(&self.vertices)
    }
}

impl<S: Scalar> Default for ConvexPolygon<S> {
    #[inline]
    fn default() -> Self {
        Self::from_rect(&default_bounds())
    }
}

fn detect<S: Scalar>(vertices: &[Point<S>]) -> Result<Winding, GeometryError> {
    if vertices.len() < 3 {
        return Err(GeometryError::TooFewVertices(vertices.len()));
    }

    Winding::of(vertices).ok_or(GeometryError::ZeroArea)
}

#[inline]
fn ring<S: Copy>(vertices: &[Point<S>]) -> impl Iterator<Item = LineSegment<S>> + '_ {
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(&from, &to)| LineSegment { from, to })
}

/// Twice the signed area of a ring of vertices, by the shoelace formula.
fn double_signed_area<S: Scalar>(vertices: &[Point<S>]) -> S {
    ring(vertices).fold(S::ZERO, |area, LineSegment { from, to }| {
        area + (from.x * to.y - to.x * from.y)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point<f64>> {
        alloc::vec![
            point(0.0, 100.0),
            point(100.0, 100.0),
            point(100.0, 0.0),
            point(0.0, 0.0),
        ]
    }

    #[test]
    fn test_winding() {
        let mut vertices = square();
        assert_eq!(Winding::of(&vertices), Some(Winding::Clockwise));
        vertices.reverse();
        assert_eq!(Winding::of(&vertices), Some(Winding::CounterClockwise));

        // three points on a line
        let flat = [point(0.0, 0.0), point(1.0, 1.0), point(2.0, 2.0)];
        assert_eq!(Winding::of(&flat), None);
    }

    #[test]
    fn test_new() {
        assert!(ConvexPolygon::new(square(), Winding::Clockwise).is_ok());
        assert_eq!(
            ConvexPolygon::new(square(), Winding::CounterClockwise),
            Err(GeometryError::WindingMismatch)
        );
        assert_eq!(
            ConvexPolygon::new(alloc::vec![point(0.0, 0.0), point(1.0, 0.0)], Winding::Clockwise),
            Err(GeometryError::TooFewVertices(2))
        );
        assert_eq!(
            ConvexPolygon::from_vertices(alloc::vec![
                point(0.0, 0.0),
                point(1.0, 0.0),
                point(2.0, 0.0)
            ]),
            Err(GeometryError::ZeroArea)
        );

        let mut reversed = square();
        reversed.reverse();
        let polygon = ConvexPolygon::from_vertices(reversed).unwrap();
        assert_eq!(polygon.winding(), Winding::CounterClockwise);
    }

    #[test]
    fn test_from_rect() {
        let rect = Box2D::new(point(0.0, 0.0), point(100.0, 100.0));
        let polygon = ConvexPolygon::from_rect(&rect);
        assert_eq!(polygon.vertices(), &square()[..]);
        assert_eq!(Winding::of(polygon.vertices()), Some(polygon.winding()));
        assert_eq!(polygon, ConvexPolygon::default());
    }

    #[test]
    fn test_edges_wrap_around() {
        let polygon = ConvexPolygon::from_vertices(square()).unwrap();
        let edges: Vec<LineSegment<f64>> = polygon.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3].from, point(0.0, 0.0));
        assert_eq!(edges[3].to, point(0.0, 100.0));
    }

    #[test]
    fn test_inward_normals() {
        let center = point(50.0, 50.0);

        for polygon in [
            ConvexPolygon::from_vertices(square()).unwrap(),
            ConvexPolygon::from_vertices(square().into_iter().rev().collect()).unwrap(),
        ] {
            for edge in polygon.edges() {
                let normal = polygon.winding().inward_normal(edge.to_vector());
                assert!(normal.dot(center - edge.from) > 0.0);
                let flipped = polygon.winding().reverse().inward_normal(edge.to_vector());
                assert!(flipped.dot(center - edge.from) < 0.0);
            }
        }
    }
}
