// BSL 1.0 License

use super::{LineSegment, Point};
use approx::{AbsDiffEq, RelativeEq};

/// The result of clipping a line segment against some bounds.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ClipOutcome<S> {
    /// Part of the segment lies inside the bounds. The two endpoints of this segment are never equal.
    Clipped(LineSegment<S>),
    /// The part of the segment inside the bounds is a single point.
    ///
    /// Only [`clip_rect`](crate::clip_rect) produces this. [`clip_convex`](crate::clip_convex) reports the
    /// same situation as `Rejected`.
    Collapsed(Point<S>),
    /// No part of the segment lies inside the bounds.
    Rejected,
}

impl<S: Copy> ClipOutcome<S> {
    /// Is there nothing left of the segment?
    #[must_use]
    #[inline]
    pub fn is_rejected(&self) -> bool {
        matches!(self, ClipOutcome::Rejected)
    }

    /// Did the segment collapse into a single point?
    #[must_use]
    #[inline]
    pub fn is_collapsed(&self) -> bool {
        matches!(self, ClipOutcome::Collapsed(_))
    }

    /// The segment that survived clipping. A collapsed point becomes a segment of zero length.
    #[must_use]
    #[inline]
    pub fn segment(self) -> Option<LineSegment<S>> {
        match self {
            ClipOutcome::Clipped(segment) => Some(segment),
            ClipOutcome::Collapsed(at) => Some(LineSegment { from: at, to: at }),
            ClipOutcome::Rejected => None,
        }
    }

    /// Apply `f` to every point of this outcome.
    #[must_use]
    #[inline]
    pub fn map_points(self, mut f: impl FnMut(Point<S>) -> Point<S>) -> Self {
        match self {
            ClipOutcome::Clipped(segment) => ClipOutcome::Clipped(LineSegment {
                from: f(segment.from),
                to: f(segment.to),
            }),
            ClipOutcome::Collapsed(at) => ClipOutcome::Collapsed(f(at)),
            ClipOutcome::Rejected => ClipOutcome::Rejected,
        }
    }
}

impl<S: AbsDiffEq<Epsilon = S> + Copy> AbsDiffEq for ClipOutcome<S> {
    type Epsilon = S;

    #[inline]
    fn default_epsilon() -> S {
        S::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: S) -> bool {
        let eq = |a: &Point<S>, b: &Point<S>| {
            a.x.abs_diff_eq(&b.x, epsilon) && a.y.abs_diff_eq(&b.y, epsilon)
        };

        match (self, other) {
            (ClipOutcome::Clipped(a), ClipOutcome::Clipped(b)) => {
                eq(&a.from, &b.from) && eq(&a.to, &b.to)
            }
            (ClipOutcome::Collapsed(a), ClipOutcome::Collapsed(b)) => eq(a, b),
            (ClipOutcome::Rejected, ClipOutcome::Rejected) => true,
            _ => false,
        }
    }
}

impl<S: RelativeEq<Epsilon = S> + Copy> RelativeEq for ClipOutcome<S> {
    #[inline]
    fn default_max_relative() -> S {
        S::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: S, max_relative: S) -> bool {
        let eq = |a: &Point<S>, b: &Point<S>| {
            a.x.relative_eq(&b.x, epsilon, max_relative)
                && a.y.relative_eq(&b.y, epsilon, max_relative)
        };

        match (self, other) {
            (ClipOutcome::Clipped(a), ClipOutcome::Clipped(b)) => {
                eq(&a.from, &b.from) && eq(&a.to, &b.to)
            }
            (ClipOutcome::Collapsed(a), ClipOutcome::Collapsed(b)) => eq(a, b),
            (ClipOutcome::Rejected, ClipOutcome::Rejected) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point;
    use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq};

    #[test]
    fn test_segment() {
        let line = LineSegment {
            from: point(1.0, 2.0),
            to: point(3.0, 4.0),
        };
        assert_eq!(ClipOutcome::Clipped(line).segment(), Some(line));
        assert_eq!(ClipOutcome::<f64>::Rejected.segment(), None);

        // a collapsed point reads as a zero-length segment
        let collapsed = ClipOutcome::Collapsed(point(5.0, 5.0)).segment().unwrap();
        assert_eq!(collapsed.from, collapsed.to);

        let doubled = ClipOutcome::Clipped(line).map_points(|pt| point(pt.x * 2.0, pt.y * 2.0));
        assert_eq!(
            doubled,
            ClipOutcome::Clipped(LineSegment {
                from: point(2.0, 4.0),
                to: point(6.0, 8.0),
            })
        );
        assert_eq!(
            ClipOutcome::<f64>::Rejected.map_points(|pt| pt),
            ClipOutcome::Rejected
        );
    }

    #[test]
    fn test_approx() {
        let a = ClipOutcome::Clipped(LineSegment {
            from: point(0.0, 50.0),
            to: point(100.0, 50.0),
        });
        let b = ClipOutcome::Clipped(LineSegment {
            from: point(1.0e-15, 50.0),
            to: point(100.0, 50.000_000_000_001),
        });
        assert_abs_diff_eq!(a, b, epsilon = 1.0e-9);
        assert_relative_eq!(a, b, epsilon = 1.0e-9);

        // variants never compare equal to each other
        assert_abs_diff_ne!(a, ClipOutcome::Rejected, epsilon = 1.0e-9);
        assert_abs_diff_ne!(
            ClipOutcome::Collapsed(point(0.0, 50.0)),
            ClipOutcome::Rejected,
            epsilon = 1.0e-9
        );
    }
}
