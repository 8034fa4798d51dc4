use math::Vec2D;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    /// Start point
    pub p0: Vec2D,

    /// Handle leaving the start point
    pub p1: Vec2D,

    /// Handle arriving at the end point
    pub p2: Vec2D,

    /// End point
    pub p3: Vec2D,
}

impl CubicBezier {
    #[inline]
    #[must_use]
    pub const fn new(p0: Vec2D, p1: Vec2D, p2: Vec2D, p3: Vec2D) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Compute the point on the curve at time `t`
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Vec2D {
        let inverse = 1. - t;
        let inverse_squared = inverse * inverse;
        let t_squared = t * t;

        self.p0 * (inverse_squared * inverse)
            + self.p1 * (3. * inverse_squared * t)
            + self.p2 * (3. * inverse * t_squared)
            + self.p3 * (t_squared * t)
    }

    /// The point on the curve at `t = 0.5`
    #[inline]
    #[must_use]
    pub fn midpoint(&self) -> Vec2D {
        (self.p0 + (self.p1 + self.p2) * 3. + self.p3) * 0.125
    }

    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.p0.is_finite() && self.p1.is_finite() && self.p2.is_finite() && self.p3.is_finite()
    }

    /// Split the curve into `n` curves of equal length in curve time.
    ///
    /// The `i`-th curve covers `t` in `[i/n, (i+1)/n]`.
    /// Splitting into zero parts yields no curves.
    #[must_use]
    pub fn split(&self, n: usize) -> Vec<Self> {
        // The closed forms are exact for small n, the generic
        // reparameterization accumulates rounding errors
        match n {
            0 => vec![],
            1 => vec![*self],
            2 => {
                let (left, right) = self.split_in_half();
                vec![left, right]
            },
            3 => {
                let (left, middle, right) = self.split_in_thirds();
                vec![left, middle, right]
            },
            4 => {
                let (left, right) = self.split_in_half();
                let (a, b) = left.split_in_half();
                let (c, d) = right.split_in_half();
                vec![a, b, c, d]
            },
            6 => {
                let (left, right) = self.split_in_half();
                let (a, b, c) = left.split_in_thirds();
                let (d, e, f) = right.split_in_thirds();
                vec![a, b, c, d, e, f]
            },
            _ => self.split_generic(n),
        }
    }

    /// Split the curve at `t = 0.5`
    #[must_use]
    pub fn split_in_half(&self) -> (Self, Self) {
        let mid = self.midpoint();
        let derivative = (self.p3 + self.p2 - self.p1 - self.p0) * 0.125;

        let left = Self::new(
            self.p0,
            self.p0.midpoint(self.p1),
            mid - derivative,
            mid,
        );
        let right = Self::new(
            mid,
            mid + derivative,
            self.p2.midpoint(self.p3),
            self.p3,
        );
        (left, right)
    }

    /// Split the curve at `t = 1/3` and `t = 2/3`
    #[must_use]
    pub fn split_in_thirds(&self) -> (Self, Self, Self) {
        let Self { p0, p1, p2, p3 } = *self;

        let mid1 = (p0 * 8. + p1 * 12. + p2 * 6. + p3) / 27.;
        let derivative1 = (p3 + p2 * 3. - p0 * 4.) / 27.;
        let mid2 = (p0 + p1 * 6. + p2 * 12. + p3 * 8.) / 27.;
        let derivative2 = (p3 * 4. - p1 * 3. - p0) / 27.;

        let left = Self::new(p0, (p0 * 2. + p1) / 3., mid1 - derivative1, mid1);
        let middle = Self::new(mid1, mid1 + derivative1, mid2 - derivative2, mid2);
        let right = Self::new(mid2, mid2 + derivative2, (p2 + p3 * 2.) / 3., p3);
        (left, middle, right)
    }

    fn split_generic(&self, n: usize) -> Vec<Self> {
        let (a, b, c, d) = self.power_basis();

        let dt = (n as f64).recip();
        let dt_squared = dt * dt;
        let dt_cubed = dt_squared * dt;

        (0..n)
            .map(|i| {
                let t1 = i as f64 * dt;
                let t1_squared = t1 * t1;

                let a1 = a * dt_cubed;
                let b1 = (a * (3. * t1) + b) * dt_squared;
                let c1 = (b * (2. * t1) + c + a * (3. * t1_squared)) * dt;
                let d1 = a * (t1 * t1_squared) + b * t1_squared + c * t1 + d;
                Self::from_power_basis(a1, b1, c1, d1)
            })
            .collect()
    }

    /// Coefficients `(a, b, c, d)` of `B(t) = a*t^3 + b*t^2 + c*t + d`
    fn power_basis(&self) -> (Vec2D, Vec2D, Vec2D, Vec2D) {
        let c = (self.p1 - self.p0) * 3.;
        let b = (self.p2 - self.p1) * 3. - c;
        let d = self.p0;
        let a = self.p3 - d - c - b;
        (a, b, c, d)
    }

    fn from_power_basis(a: Vec2D, b: Vec2D, c: Vec2D, d: Vec2D) -> Self {
        let p1 = c / 3. + d;
        let p2 = (b + c) / 3. + p1;
        let p3 = a + d + c + b;
        Self::new(d, p1, p2, p3)
    }
}
