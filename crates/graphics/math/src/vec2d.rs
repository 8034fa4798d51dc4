use std::ops::{Add, Div, Mul, Neg, Sub};

/// Generate a trait impl for an operation involving two [Vec2D]s, like [Add] or [Sub]
macro_rules! impl_bin_op {
    ($trait: ident, $fn: ident, $op: tt) => {
        impl<T: $trait<T, Output = T>> $trait for Vec2D<T> {
            type Output = Vec2D<T>;

            #[must_use]
            fn $fn(self, rhs: Self) -> Self::Output {
                Self {
                    x: self.x $op rhs.x,
                    y: self.y $op rhs.y,
                }
            }
        }
    };
}

/// Generate a trait impl for an operation involving a [Vec2D] and a scalar value of unknown type
macro_rules! impl_scalar_op {
    ($trait: ident, $fn: ident, $op: tt, $rhs: ident) => {
        impl<T: $trait<$rhs, Output = T>> $trait<$rhs> for Vec2D<T> {
            type Output = Vec2D<T>;

            #[must_use]
            fn $fn(self, rhs: $rhs) -> Self::Output {
                Self {
                    x: self.x $op rhs,
                    y: self.y $op rhs,
                }
            }
        }
    };
}

/// A point or direction in the plane.
///
/// Curve math is done in `f64`, since the approximation code compares
/// accumulated errors against tolerances that can be arbitrarily tight.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2D<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Vec2D<T> {
    #[inline]
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl Vec2D<f64> {
    pub const ORIGIN: Self = Self::new(0., 0.);

    #[inline]
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    #[inline]
    #[must_use]
    pub fn distance_to(&self, other: Self) -> f64 {
        (*self - other).magnitude()
    }

    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    #[must_use]
    pub fn lerp(&self, other: Self, t: f64) -> Self {
        debug_assert!(0. <= t);
        debug_assert!(t <= 1.);

        Self {
            x: (other.x - self.x).mul_add(t, self.x),
            y: (other.y - self.y).mul_add(t, self.y),
        }
    }

    #[inline]
    #[must_use]
    pub fn midpoint(&self, other: Self) -> Self {
        (*self + other) * 0.5
    }

    // Compute the dot product of two vectors
    #[inline]
    #[must_use]
    pub fn dot(&self, other: Self) -> f64 {
        self.x.mul_add(other.x, self.y * other.y)
    }

    // Compute the cross product of two vectors
    #[inline]
    #[must_use]
    pub fn cross_product(&self, other: Self) -> f64 {
        self.x.mul_add(other.y, -self.y * other.x)
    }

    /// Multiply two vectors as if they were complex numbers `x + yi`.
    #[inline]
    #[must_use]
    pub fn complex_mul(&self, other: Self) -> Self {
        Self {
            x: self.x * other.x - self.y * other.y,
            y: self.x * other.y + self.y * other.x,
        }
    }

    /// Rotate the vector counter-clockwise by 90 degrees.
    ///
    /// This is the same as `self.complex_mul(Vec2D::new(0., 1.))`.
    #[inline]
    #[must_use]
    pub fn rotate_90(&self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }
}

impl<T: Neg<Output = T>> Neg for Vec2D<T> {
    type Output = Self;

    #[must_use]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl_bin_op!(Add, add, +);
impl_bin_op!(Sub, sub, -);

impl_scalar_op!(Mul, mul, *, f64);

impl_scalar_op!(Div, div, /, f64);

#[cfg(test)]
mod tests {
    use super::Vec2D;

    #[test]
    fn magnitude() {
        let vec = Vec2D::new(1., 1.);
        assert!((vec.magnitude() - std::f64::consts::SQRT_2).abs() < 1e-15);
        assert_eq!(Vec2D::new(3., -4.).magnitude(), 5.);
    }

    #[test]
    fn dot_product() {
        assert_eq!(Vec2D::new(1., 2.).dot(Vec2D::new(3., 4.)), 11.);
        assert_eq!(Vec2D::new(1., 0.).dot(Vec2D::new(0., 1.)), 0.);
    }

    #[test]
    fn rotate_by_90_degrees() {
        assert_eq!(Vec2D::new(1., 0.).rotate_90(), Vec2D::new(0., 1.));
        assert_eq!(Vec2D::new(2., 3.).rotate_90(), Vec2D::new(-3., 2.));

        let i = Vec2D::new(0., 1.);
        assert_eq!(Vec2D::new(2., 3.).complex_mul(i), Vec2D::new(2., 3.).rotate_90());
    }

    #[test]
    fn complex_multiplication() {
        // (1 + 2i)(3 + 4i) = 3 + 4i + 6i - 8 = -5 + 10i
        assert_eq!(
            Vec2D::new(1., 2.).complex_mul(Vec2D::new(3., 4.)),
            Vec2D::new(-5., 10.)
        );
    }

    #[test]
    fn lerp_and_midpoint() {
        let a = Vec2D::new(0., 0.);
        let b = Vec2D::new(4., -2.);
        assert_eq!(a.lerp(b, 0.), a);
        assert_eq!(a.lerp(b, 1.), b);
        assert_eq!(a.lerp(b, 0.25), Vec2D::new(1., -0.5));
        assert_eq!(a.midpoint(b), Vec2D::new(2., -1.));
    }

    #[test]
    fn vec2d_add() {
        assert_eq!(Vec2D::new(1., 0.) + Vec2D::new(1., 1.), Vec2D::new(2., 1.));
        assert_eq!(Vec2D::new(-2, 1) + Vec2D::new(1, 0), Vec2D::new(-1, 1));
    }

    #[test]
    fn vec2d_sub() {
        assert_eq!(Vec2D::new(1., 0.) - Vec2D::new(1., 1.), Vec2D::new(0., -1.));
        assert_eq!(-Vec2D::new(1., -2.), Vec2D::new(-1., 2.));
    }

    #[test]
    fn vec2d_mul() {
        assert_eq!(Vec2D::new(1., -1.) * 2., Vec2D::new(2., -2.));
        assert_eq!(Vec2D::new(0.5, 3.) * -4., Vec2D::new(-2., -12.));
    }

    #[test]
    fn vec2d_div() {
        assert_eq!(Vec2D::new(1., -1.) / 2., Vec2D::new(0.5, -0.5));
    }

    #[test]
    fn non_finite_coordinates() {
        assert!(Vec2D::new(1., 2.).is_finite());
        assert!(!Vec2D::new(f64::NAN, 2.).is_finite());
        assert!(!Vec2D::new(1., f64::INFINITY).is_finite());
    }
}
