use math::Vec2D;

use crate::CubicBezier;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadraticBezier {
    /// Start point
    pub p0: Vec2D,

    /// Control point
    pub p1: Vec2D,

    /// End point
    pub p2: Vec2D,
}

impl QuadraticBezier {
    #[inline]
    #[must_use]
    pub const fn new(p0: Vec2D, p1: Vec2D, p2: Vec2D) -> Self {
        Self { p0, p1, p2 }
    }

    /// Compute the point on the curve at time `t`
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Vec2D {
        let inverse = 1. - t;
        self.p0 * (inverse * inverse) + self.p1 * (2. * inverse * t) + self.p2 * (t * t)
    }

    /// Express the same curve as a cubic Bézier curve.
    #[must_use]
    pub fn elevate(&self) -> CubicBezier {
        CubicBezier::new(
            self.p0,
            (self.p0 + self.p1 * 2.) / 3.,
            (self.p2 + self.p1 * 2.) / 3.,
            self.p2,
        )
    }
}
