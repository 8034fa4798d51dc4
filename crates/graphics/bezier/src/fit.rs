//! Fitting quadratic curves to a cubic curve at a fixed number of segments.

use math::Vec2D;

use crate::{CubicBezier, QuadraticBezier, QuadraticSpline};

/// Number of times [CubicBezier::fits_inside] may bisect a curve before giving up.
///
/// Every bisection roughly quarters the distance between the control polygon and
/// the curve, so glyph-sized curves settle after a handful of levels. Only curves
/// that touch the tolerance boundary tangentially get anywhere near this.
pub const MAX_FIT_DEPTH: u32 = 16;

/// Control points closer than this fraction of the chord length to the chord
/// are considered to be on it.
const FLATNESS_EPSILON: f64 = 1e-9;

/// Difference between the handle of a degree-elevated quadratic and the
/// corresponding handle of a cubic.
///
/// Elevating a quadratic places its cubic handle at `(on_curve + 2 * control) / 3`.
#[inline]
fn elevation_error(on_curve: Vec2D, control: Vec2D, handle: Vec2D) -> Vec2D {
    (on_curve + control * 2. - handle * 3.) / 3.
}

impl CubicBezier {
    /// Check whether the curve stays within `tolerance` of the origin.
    ///
    /// The control points are treated as error vectors rather than positions, which
    /// turns "does this approximation stay close to that curve" into "does the
    /// difference of the two curves stay close to zero".
    ///
    /// The end points themselves are not checked, only the inside of the curve.
    /// Curves that still cannot be decided after [MAX_FIT_DEPTH] bisections are
    /// considered to not fit.
    #[must_use]
    pub fn fits_inside(&self, tolerance: f64) -> bool {
        self.fits_inside_below_depth(tolerance, MAX_FIT_DEPTH)
    }

    fn fits_inside_below_depth(&self, tolerance: f64, remaining_depth: u32) -> bool {
        // p2 tends to have the larger error early on
        if self.p2.magnitude() <= tolerance && self.p1.magnitude() <= tolerance {
            return true;
        }

        if self.midpoint().magnitude() > tolerance {
            return false;
        }

        let Some(remaining_depth) = remaining_depth.checked_sub(1) else {
            log::trace!("Giving up on {self:?} after {MAX_FIT_DEPTH} bisections");
            return false;
        };

        let (left, right) = self.split_in_half();
        left.fits_inside_below_depth(tolerance, remaining_depth)
            && right.fits_inside_below_depth(tolerance, remaining_depth)
    }

    /// Approximate the curve with a single quadratic curve.
    ///
    /// The control point of the quadratic is the intersection of the tangents
    /// at the start and end of the cubic. Returns `None` if there is no such
    /// intersection or the quadratic deviates more than `tolerance` from the curve.
    #[must_use]
    pub fn approximate_quadratic(&self, tolerance: f64) -> Option<QuadraticBezier> {
        let control = self.tangent_intersection()?;

        let deviation = Self::new(
            Vec2D::ORIGIN,
            elevation_error(self.p0, control, self.p1),
            elevation_error(self.p3, control, self.p2),
            Vec2D::ORIGIN,
        );

        deviation
            .fits_inside(tolerance)
            .then(|| QuadraticBezier::new(self.p0, control, self.p3))
    }

    /// Approximate the curve with a spline made of `segments` quadratic curves.
    ///
    /// Returns `None` if the spline deviates more than `tolerance` from the curve.
    #[must_use]
    pub fn approximate_spline(&self, segments: usize, tolerance: f64) -> Option<QuadraticSpline> {
        match segments {
            0 => None,
            1 => self
                .approximate_quadratic(tolerance)
                .map(QuadraticSpline::from),
            _ => self.approximate_spline_with_joints(segments, tolerance),
        }
    }

    fn approximate_spline_with_joints(
        &self,
        segments: usize,
        tolerance: f64,
    ) -> Option<QuadraticSpline> {
        debug_assert!(segments > 1);

        let cubics = self.split(segments);
        let last = segments - 1;

        // The control points are spread along the line between the extrapolated
        // handles of the whole curve, not derived from each part on its own
        let mut points = Vec::with_capacity(segments + 2);
        points.push(self.p0);
        points.extend(
            cubics
                .iter()
                .enumerate()
                .map(|(i, cubic)| cubic.approximate_control(i as f64 / last as f64)),
        );

        let mut start = self.p0;
        let mut start_deviation = Vec2D::ORIGIN;
        for (i, cubic) in cubics.iter().enumerate() {
            let control = points[i + 1];

            // Consecutive controls imply the on-curve point between them
            let end = if i == last {
                cubic.p3
            } else {
                control.midpoint(points[i + 2])
            };

            let end_deviation = end - cubic.p3;
            if end_deviation.magnitude() > tolerance {
                return None;
            }

            let deviation = Self::new(
                start_deviation,
                elevation_error(start, control, cubic.p1),
                elevation_error(end, control, cubic.p2),
                end_deviation,
            );
            if !deviation.fits_inside(tolerance) {
                return None;
            }

            start = end;
            start_deviation = end_deviation;
        }

        points.push(self.p3);
        Some(QuadraticSpline::new(points))
    }

    /// Candidate control point for a quadratic replacing (part of) the curve.
    ///
    /// The handles are extended by half their length, which is where a quadratic
    /// with the same end tangents would put its control point, and `t` blends
    /// between the two.
    pub(crate) fn approximate_control(&self, t: f64) -> Vec2D {
        let p1 = self.p0 + (self.p1 - self.p0) * 1.5;
        let p2 = self.p3 + (self.p2 - self.p3) * 1.5;
        p1.lerp(p2, t)
    }

    /// Intersection of the line through `p0` and `p1` with the line through `p2` and `p3`
    fn tangent_intersection(&self) -> Option<Vec2D> {
        // The tangents of a straight line (or a single point) are parallel up to
        // rounding. Any point on the line would do, the extrapolated handles are
        // exact for evenly spaced control points.
        if self.is_flat() {
            return Some(self.approximate_control(0.5));
        }

        let start_tangent = self.p1 - self.p0;
        let end_tangent = self.p3 - self.p2;

        let normal = start_tangent.rotate_90();
        let denominator = normal.dot(end_tangent);

        if denominator == 0. {
            return None;
        }

        let h = normal.dot(self.p0 - self.p2) / denominator;
        Some(self.p2 + end_tangent * h)
    }

    /// Whether all control points lie on the line through the end points,
    /// relative to the length of that line
    fn is_flat(&self) -> bool {
        let chord = self.p3 - self.p0;
        let max_deviation = FLATNESS_EPSILON * chord.dot(chord);

        chord.cross_product(self.p1 - self.p0).abs() <= max_deviation
            && chord.cross_product(self.p2 - self.p0).abs() <= max_deviation
    }
}
