// BSL 1.0 License

use super::{
    float::{downscale, sample, scale_point, scale_segment},
    ClipOutcome, ConvexPolygon, LineSegment, Point, Scalar,
};
use num_traits::Float;
use tinyvec::TinyVec;

/// Polygons with up to this many edges are clipped without allocating, unless their coordinates are huge.
const MAX_EDGES_ON_STACK: usize = 8;

/// Clip a line segment against a convex polygon, using the Cyrus-Beck algorithm.
///
/// Every edge of the polygon limits the part of the segment that can be inside of it. Edges the segment
/// crosses on its way in raise the lower limit, edges it crosses on its way out lower the upper limit, and
/// edges parallel to the segment count as exits. If the limits cross, or the part between them is a single
/// point, the segment is rejected.
///
/// Endpoints cut by a horizontal or vertical edge lie exactly on it, and never outside of any horizontal or
/// vertical edge. For polygons built with [`ConvexPolygon::from_rect`], clipping the result again gives back
/// the same result.
///
/// The polygon's [`Winding`](crate::Winding) must be truthful, or every normal points the wrong way and
/// the result is mirrored. [`ConvexPolygon::new`] guarantees that.
#[must_use]
pub fn clip_convex<S: Scalar + Default>(
    segment: LineSegment<S>,
    polygon: &ConvexPolygon<S>,
) -> ClipOutcome<S> {
    // products of two coordinate differences must stay finite
    let limit = Float::sqrt(S::MAX) * S::value(0.25);
    let points = polygon
        .vertices()
        .iter()
        .copied()
        .chain([segment.from, segment.to]);

    match downscale(points, limit) {
        None => cyrus_beck(segment, polygon),
        Some(scale) => {
            let scaled = ConvexPolygon::new_unchecked(
                polygon
                    .vertices()
                    .iter()
                    .map(|&vertex| scale_point(vertex, scale))
                    .collect(),
                polygon.winding(),
            );
            let unscale = S::ONE / scale;
            cyrus_beck(scale_segment(segment, scale), &scaled)
                .map_points(|pt| scale_point(pt, unscale))
        }
    }
}

fn cyrus_beck<S: Scalar + Default>(
    segment: LineSegment<S>,
    polygon: &ConvexPolygon<S>,
) -> ClipOutcome<S> {
    let direction = segment.to_vector();
    let winding = polygon.winding();

    // the parameter each edge sets, and the index of that edge
    let mut entering: TinyVec<[(S, usize); MAX_EDGES_ON_STACK]> = TinyVec::new();
    let mut leaving: TinyVec<[(S, usize); MAX_EDGES_ON_STACK]> = TinyVec::new();

    for (i, edge) in polygon.edges().enumerate() {
        let normal = winding.inward_normal(edge.to_vector());
        let numerator = normal.dot(edge.from - segment.from);
        let denominator = normal.dot(direction);

        if denominator > S::ZERO {
            entering.push((numerator / denominator, i));
        } else if denominator < S::ZERO {
            leaving.push((numerator / denominator, i));
        } else if numerator > S::ZERO {
            // parallel, and entirely on the outer side of this edge
            leaving.push((S::neg_infinity(), i));
        } else {
            // parallel, on the inner side or along the edge
            leaving.push((S::infinity(), i));
        }
    }

    let (t_entering, entry) = entering
        .iter()
        .copied()
        .fold((S::ZERO, None), |best, (t, i)| {
            if t > best.0 {
                (t, Some(i))
            } else {
                best
            }
        });
    let (t_leaving, exit) = leaving
        .iter()
        .copied()
        .fold((S::ONE, None), |best, (t, i)| {
            if t < best.0 {
                (t, Some(i))
            } else {
                best
            }
        });

    if t_entering > t_leaving {
        return ClipOutcome::Rejected;
    }

    let from = settle(sample(segment, t_entering), entry, polygon);
    let to = settle(sample(segment, t_leaving), exit, polygon);

    if from == to {
        ClipOutcome::Rejected
    } else {
        ClipOutcome::Clipped(LineSegment { from, to })
    }
}

/// Put a sampled point exactly on the edge that cut it, and back on any edge it strayed past, as long as
/// that edge is horizontal or vertical.
fn settle<S: Scalar>(mut pt: Point<S>, cut: Option<usize>, polygon: &ConvexPolygon<S>) -> Point<S> {
    let winding = polygon.winding();

    for (i, edge) in polygon.edges().enumerate() {
        let outside = winding.inward_normal(edge.to_vector()).dot(pt - edge.from) < S::ZERO;
        if cut != Some(i) && !outside {
            continue;
        }

        if edge.from.x == edge.to.x {
            pt.x = edge.from.x;
        } else if edge.from.y == edge.to.y {
            pt.y = edge.from.y;
        }
    }

    pt
}
