// BSL 1.0 License

use super::{
    point,
    float::{downscale, sample, scale_point, scale_rect, scale_segment},
    Box2D, ClipOutcome, GeometryError, LineSegment, Point, Scalar,
};
use num_traits::Float;

/// The bounds used when none are given: a 100 by 100 square with its minimum corner at the origin.
#[must_use]
#[inline]
pub fn default_bounds<S: Scalar>() -> Box2D<S> {
    let size = S::value(100.0);
    Box2D::new(point(S::ZERO, S::ZERO), point(size, size))
}

/// Check that the minimum corner of `rect` is below and to the left of its maximum corner.
///
/// [`clip_rect`] assumes this holds and does not check it itself.
///
/// # Errors
///
/// Fails with [`GeometryError::InvalidBounds`] if either axis is inverted or not a number.
#[inline]
pub fn check_bounds<S: Scalar>(rect: &Box2D<S>) -> Result<(), GeometryError> {
    if rect.min.x <= rect.max.x && rect.min.y <= rect.max.y {
        Ok(())
    } else {
        Err(GeometryError::InvalidBounds)
    }
}

/// Clip a line segment against an axis-aligned rectangle, using the Liang-Barsky algorithm.
///
/// Endpoints cut by an edge lie exactly on that edge, and every endpoint lies inside of the rectangle, so
/// clipping the result again gives back the same result.
///
/// A segment that only touches the rectangle at a single point is reported as
/// [`ClipOutcome::Collapsed`], unlike [`clip_convex`](crate::clip_convex) which rejects it.
#[must_use]
pub fn clip_rect<S: Scalar>(segment: LineSegment<S>, rect: &Box2D<S>) -> ClipOutcome<S> {
    // differences between coordinates must stay finite
    let limit = S::MAX * S::value(0.25);

    match downscale([segment.from, segment.to, rect.min, rect.max], limit) {
        None => liang_barsky(segment, rect),
        Some(scale) => {
            let unscale = S::ONE / scale;
            liang_barsky(scale_segment(segment, scale), &scale_rect(rect, scale))
                .map_points(|pt| scale_point(pt, unscale))
        }
    }
}

fn liang_barsky<S: Scalar>(segment: LineSegment<S>, rect: &Box2D<S>) -> ClipOutcome<S> {
    let LineSegment { from, .. } = segment;
    let delta = segment.to_vector();

    let edges = [
        (Edge::Left, -delta.x, from.x - rect.min.x),
        (Edge::Right, delta.x, rect.max.x - from.x),
        (Edge::Bottom, -delta.y, from.y - rect.min.y),
        (Edge::Top, delta.y, rect.max.y - from.y),
    ];

    let mut t0 = S::ZERO;
    let mut t1 = S::ONE;
    let mut entry = None;
    let mut exit = None;

    for (edge, p, q) in edges.iter().copied() {
        if p == S::ZERO {
            // parallel to this edge
            if q < S::ZERO {
                return ClipOutcome::Rejected;
            }
            continue;
        }

        let r = q / p;
        if p < S::ZERO {
            // outside to inside
            if r > t1 {
                return ClipOutcome::Rejected;
            } else if r > t0 {
                t0 = r;
                entry = Some(edge);
            }
        } else if r < t0 {
            return ClipOutcome::Rejected;
        } else if r < t1 {
            t1 = r;
            exit = Some(edge);
        }
    }

    let start = settle(sample(segment, t0), entry, rect);
    let end = settle(sample(segment, t1), exit, rect);

    if start == end {
        ClipOutcome::Collapsed(start)
    } else {
        ClipOutcome::Clipped(LineSegment {
            from: start,
            to: end,
        })
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Edge {
    Left,
    Right,
    Bottom,
    Top,
}

/// Put a sampled point exactly on the edge that cut it, then inside of the rectangle.
#[inline]
fn settle<S: Scalar>(mut pt: Point<S>, cut: Option<Edge>, rect: &Box2D<S>) -> Point<S> {
    match cut {
        Some(Edge::Left) => pt.x = rect.min.x,
        Some(Edge::Right) => pt.x = rect.max.x,
        Some(Edge::Bottom) => pt.y = rect.min.y,
        Some(Edge::Top) => pt.y = rect.max.y,
        None => {}
    }

    point(
        Float::min(Float::max(pt.x, rect.min.x), rect.max.x),
        Float::min(Float::max(pt.y, rect.min.y), rect.max.y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> LineSegment<f64> {
        LineSegment {
            from: point(x1, y1),
            to: point(x2, y2),
        }
    }

    #[test]
    fn test_crossing() {
        let outcome = clip_rect(line(-10.0, 50.0, 110.0, 50.0), &default_bounds());
        assert_abs_diff_eq!(
            outcome,
            ClipOutcome::Clipped(line(0.0, 50.0, 100.0, 50.0)),
            epsilon = 1.0e-9
        );

        let outcome = clip_rect(line(50.0, -20.0, 50.0, 120.0), &default_bounds());
        assert_abs_diff_eq!(
            outcome,
            ClipOutcome::Clipped(line(50.0, 0.0, 50.0, 100.0)),
            epsilon = 1.0e-9
        );

        // direction is kept
        let outcome = clip_rect(line(150.0, 150.0, -50.0, -50.0), &default_bounds());
        assert_abs_diff_eq!(
            outcome,
            ClipOutcome::Clipped(line(100.0, 100.0, 0.0, 0.0)),
            epsilon = 1.0e-9
        );
    }

    #[test]
    fn test_inside() {
        let segment = line(10.0, 10.0, 90.0, 90.0);
        assert_eq!(
            clip_rect(segment, &default_bounds()),
            ClipOutcome::Clipped(segment)
        );

        // odd values still come back bit for bit
        let segment = line(0.1, 0.7, 99.3, 33.3);
        assert_eq!(
            clip_rect(segment, &default_bounds()),
            ClipOutcome::Clipped(segment)
        );
    }

    #[test]
    fn test_outside() {
        for segment in [
            line(200.0, 200.0, 300.0, 300.0),
            line(150.0, 0.0, 200.0, 50.0),
            line(-10.0, -10.0, -10.0, 200.0),
            line(90.0, -20.0, 120.0, 10.0),
        ]
        .iter()
        {
            assert_eq!(
                clip_rect(*segment, &default_bounds()),
                ClipOutcome::Rejected,
                "{:?}",
                segment
            );
        }
    }

    #[test]
    fn test_idempotent() {
        let once = clip_rect(line(-50.0, 50.0, 150.0, 50.0), &default_bounds());
        assert_eq!(once, ClipOutcome::Clipped(line(0.0, 50.0, 100.0, 50.0)));

        let twice = clip_rect(once.segment().unwrap(), &default_bounds());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_touching_collapses() {
        // touches the right edge at one point
        let outcome = clip_rect(line(100.0, 50.0, 150.0, 50.0), &default_bounds());
        assert_eq!(outcome, ClipOutcome::Collapsed(point(100.0, 50.0)));

        // a degenerate segment inside stays a point
        let outcome = clip_rect(line(20.0, 20.0, 20.0, 20.0), &default_bounds());
        assert_eq!(outcome, ClipOutcome::Collapsed(point(20.0, 20.0)));
    }

    #[test]
    fn test_f32() {
        let rect = Box2D::new(point(0.0f32, 0.0), point(10.0, 10.0));
        let segment = LineSegment {
            from: point(5.0f32, -5.0),
            to: point(5.0, 5.0),
        };
        assert_eq!(
            clip_rect(segment, &rect),
            ClipOutcome::Clipped(LineSegment {
                from: point(5.0, 0.0),
                to: point(5.0, 5.0),
            })
        );
    }

    #[test]
    fn test_check_bounds() {
        assert!(check_bounds(&default_bounds::<f64>()).is_ok());
        assert!(check_bounds(&Box2D::new(point(5.0, 5.0), point(5.0, 5.0))).is_ok());
        assert_eq!(
            check_bounds(&Box2D::new(point(10.0, 0.0), point(0.0, 10.0))),
            Err(GeometryError::InvalidBounds)
        );
        assert_eq!(
            check_bounds(&Box2D::new(point(0.0, f64::NAN), point(10.0, 10.0))),
            Err(GeometryError::InvalidBounds)
        );
    }

    #[test]
    fn test_idempotent_random() {
        let mut rng = StdRng::seed_from_u64(0x11_4e_c4_09);
        let rect = default_bounds();
        let inside = |pt: Point<f64>| (0.0..=100.0).contains(&pt.x) && (0.0..=100.0).contains(&pt.y);

        for _ in 0..20_000 {
            let segment = line(
                rng.gen_range(-150.0..250.0),
                rng.gen_range(-150.0..250.0),
                rng.gen_range(-150.0..250.0),
                rng.gen_range(-150.0..250.0),
            );

            let once = clip_rect(segment, &rect);
            if let Some(clipped) = once.segment() {
                assert!(inside(clipped.from) && inside(clipped.to), "{:?}", once);
                assert_eq!(clip_rect(clipped, &rect), once, "{:?}", segment);
            }
        }
    }

    #[test]
    fn test_lands_on_edges() {
        // enters through the bottom edge
        let outcome = clip_rect(line(42.19, -92.56, 7.03, 58.67), &default_bounds());
        let clipped = outcome.segment().unwrap();
        assert_eq!(clipped.from.y, 0.0);
        assert_eq!(clipped.to, point(7.03, 58.67));
        assert_abs_diff_eq!(
            clipped.from.x,
            42.19 - 35.16 * (92.56 / 151.23),
            epsilon = 1.0e-9
        );

        // enters through the left edge and leaves through the top one
        let outcome = clip_rect(line(-33.3, 10.1, 66.6, 200.2), &default_bounds());
        let clipped = outcome.segment().unwrap();
        assert_eq!(clipped.from.x, 0.0);
        assert_eq!(clipped.to.y, 100.0);
    }

    #[test]
    fn test_huge_coordinates() {
        // the delta of this segment does not fit in an f64
        let outcome = clip_rect(line(-1.0e308, 50.0, 1.0e308, 50.0), &default_bounds());
        assert_eq!(outcome, ClipOutcome::Clipped(line(0.0, 50.0, 100.0, 50.0)));

        let outcome = clip_rect(line(1.0e308, -1.0e308, 1.5e308, 1.0e308), &default_bounds());
        assert_eq!(outcome, ClipOutcome::Rejected);

        let rect = Box2D::new(point(-1.0e308, 0.0), point(1.0e308, 10.0));
        let outcome = clip_rect(line(-1.5e308, 5.0, 1.5e308, 5.0), &rect);
        assert_eq!(outcome, ClipOutcome::Clipped(line(-1.0e308, 5.0, 1.0e308, 5.0)));
    }
}
