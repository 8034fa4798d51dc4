use math::Vec2D;

use crate::QuadraticBezier;

/// A chain of quadratic Bézier curves with implied on-curve points.
///
/// The spline stores the start point, one control point per segment and the
/// end point, just like a run of off-curve points in a TrueType contour.
/// The on-curve point between two consecutive segments is the midpoint of
/// their control points and is not stored.
#[derive(Clone, Debug, PartialEq)]
pub struct QuadraticSpline {
    points: Vec<Vec2D>,
}

/// Iterator over the quadratic curves of a [QuadraticSpline]
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    spline: &'a QuadraticSpline,
    index: usize,
}

impl QuadraticSpline {
    pub(crate) fn new(points: Vec<Vec2D>) -> Self {
        debug_assert!(points.len() >= 3, "spline needs at least one segment");

        Self { points }
    }

    /// Start point, control points and end point of the spline
    #[inline]
    #[must_use]
    pub fn points(&self) -> &[Vec2D] {
        &self.points
    }

    #[inline]
    #[must_use]
    pub fn into_points(self) -> Vec<Vec2D> {
        self.points
    }

    #[inline]
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len() - 2
    }

    #[inline]
    #[must_use]
    pub fn start(&self) -> Vec2D {
        self.points[0]
    }

    #[inline]
    #[must_use]
    pub fn end(&self) -> Vec2D {
        self.points[self.points.len() - 1]
    }

    /// The quadratic curves making up the spline, with the implied on-curve
    /// points made explicit.
    #[must_use]
    pub fn segments(&self) -> Segments<'_> {
        Segments {
            spline: self,
            index: 0,
        }
    }

    /// Get the quadratic curve with the given index
    #[must_use]
    pub fn segment(&self, index: usize) -> Option<QuadraticBezier> {
        let n = self.segment_count();
        if index >= n {
            return None;
        }

        let controls = &self.points[1..=n];
        let control = controls[index];

        let start = match index {
            0 => self.start(),
            _ => controls[index - 1].midpoint(control),
        };

        let end = if index + 1 == n {
            self.end()
        } else {
            control.midpoint(controls[index + 1])
        };

        Some(QuadraticBezier::new(start, control, end))
    }

    /// Compute a point on the spline.
    ///
    /// Every segment covers an equal share of `t`, the same way the
    /// segments were cut from the original cubic curve.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Vec2D {
        let n = self.segment_count();
        let scaled = t.clamp(0., 1.) * n as f64;
        let index = (scaled.floor() as usize).min(n - 1);

        self.segment(index)
            .map(|segment| segment.evaluate(scaled - index as f64))
            .unwrap_or_else(|| self.end())
    }
}

impl From<QuadraticBezier> for QuadraticSpline {
    fn from(value: QuadraticBezier) -> Self {
        Self::new(vec![value.p0, value.p1, value.p2])
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = QuadraticBezier;

    fn next(&mut self) -> Option<Self::Item> {
        let segment = self.spline.segment(self.index)?;
        self.index += 1;
        Some(segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.spline.segment_count().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for Segments<'a> {}

impl<'a> IntoIterator for &'a QuadraticSpline {
    type Item = QuadraticBezier;
    type IntoIter = Segments<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments()
    }
}

#[cfg(test)]
mod tests {
    use super::{QuadraticBezier, QuadraticSpline, Vec2D};

    fn spline() -> QuadraticSpline {
        QuadraticSpline::new(vec![
            Vec2D::new(0., 0.),
            Vec2D::new(2., 4.),
            Vec2D::new(6., 4.),
            Vec2D::new(10., 0.),
            Vec2D::new(12., -2.),
        ])
    }

    #[test]
    fn single_segment() {
        let quad = QuadraticBezier::new(
            Vec2D::new(0., 0.),
            Vec2D::new(1., 1.),
            Vec2D::new(2., 0.),
        );
        let spline = QuadraticSpline::from(quad);

        assert_eq!(spline.segment_count(), 1);
        assert_eq!(spline.segments().collect::<Vec<_>>(), vec![quad]);
    }

    #[test]
    fn implied_on_curve_points() {
        let segments: Vec<_> = spline().segments().collect();

        assert_eq!(
            segments,
            vec![
                QuadraticBezier::new(Vec2D::new(0., 0.), Vec2D::new(2., 4.), Vec2D::new(4., 4.)),
                QuadraticBezier::new(Vec2D::new(4., 4.), Vec2D::new(6., 4.), Vec2D::new(8., 2.)),
                QuadraticBezier::new(
                    Vec2D::new(8., 2.),
                    Vec2D::new(10., 0.),
                    Vec2D::new(12., -2.)
                ),
            ]
        );
    }

    #[test]
    fn segments_know_their_length() {
        let spline = spline();
        let mut segments = spline.segments();

        assert_eq!(segments.len(), 3);
        segments.next();
        assert_eq!(segments.len(), 2);
        assert_eq!((&spline).into_iter().count(), 3);
        assert!(spline.segment(3).is_none());
    }

    #[test]
    fn evaluate_maps_to_segments() {
        let spline = spline();

        assert_eq!(spline.evaluate(0.), spline.start());
        assert_eq!(spline.evaluate(1.), spline.end());
        assert!(spline.evaluate(1. / 3.).distance_to(Vec2D::new(4., 4.)) < 1e-12);
        assert_eq!(spline.evaluate(0.5), Vec2D::new(6., 3.5));
        assert_eq!(spline.evaluate(-1.), spline.start());
    }
}
