// BSL 1.0 License

use super::{point, Box2D, LineSegment, Point, Scalar};
use num_traits::Float;

/// Find a power of two that brings the largest coordinate of `points` down to `limit` or less.
///
/// Returns `None` if no scaling is needed, or if a coordinate is not finite.
pub(crate) fn downscale<S: Scalar>(
    points: impl IntoIterator<Item = Point<S>>,
    limit: S,
) -> Option<S> {
    let largest = points.into_iter().fold(S::ZERO, |largest, pt| {
        Float::max(largest, Float::max(Float::abs(pt.x), Float::abs(pt.y)))
    });
    let mut excess = largest / limit;
    if excess <= S::ONE || !Float::is_finite(excess) {
        return None;
    }

    let mut scale = S::ONE;
    while excess > S::ONE {
        scale *= S::HALF;
        excess *= S::HALF;
    }

    Some(scale)
}

/// The point at `t` along `segment`.
///
/// The endpoints come back unchanged at `t = 0` and `t = 1`, and a coordinate the segment does not move
/// along stays exactly the same in between.
#[inline]
pub(crate) fn sample<S: Scalar>(segment: LineSegment<S>, t: S) -> Point<S> {
    if t <= S::ZERO {
        segment.from
    } else if t >= S::ONE {
        segment.to
    } else {
        segment.from + segment.to_vector() * t
    }
}

#[inline]
pub(crate) fn scale_point<S: Scalar>(pt: Point<S>, scale: S) -> Point<S> {
    point(pt.x * scale, pt.y * scale)
}

#[inline]
pub(crate) fn scale_segment<S: Scalar>(segment: LineSegment<S>, scale: S) -> LineSegment<S> {
    LineSegment {
        from: scale_point(segment.from, scale),
        to: scale_point(segment.to, scale),
    }
}

#[inline]
pub(crate) fn scale_rect<S: Scalar>(rect: &Box2D<S>, scale: S) -> Box2D<S> {
    Box2D::new(scale_point(rect.min, scale), scale_point(rect.max, scale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downscale() {
        assert_eq!(downscale([point(1.0, -2.0), point(3.0, 4.0)], 100.0), None);
        assert_eq!(downscale([point(-300.0, 0.0)], 100.0), Some(0.25));
        assert_eq!(downscale([point(f64::INFINITY, 0.0)], 100.0), None);

        // halving is exact, so scaling back restores the original
        let pt = point(-1.0e308, 0.1);
        let scale = downscale([pt], f64::MAX / 4.0).unwrap();
        assert_eq!(scale_point(scale_point(pt, scale), 1.0 / scale), pt);
    }

    #[test]
    fn test_sample() {
        let segment = LineSegment {
            from: point(0.1, 0.3),
            to: point(0.7, 0.3),
        };
        assert_eq!(sample(segment, 0.0), segment.from);
        assert_eq!(sample(segment, 1.0), segment.to);
        assert_eq!(sample(segment, 1.0 / 3.0).y, 0.3);
        assert!(sample(segment, 0.5).x > 0.1 && sample(segment, 0.5).x < 0.7);
    }
}
