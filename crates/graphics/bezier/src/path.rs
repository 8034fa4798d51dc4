//! Feeding converted curves into quadratic-only path consumers, like TrueType outlines.

use math::Vec2D;

use crate::{ConversionError, Converter, CubicBezier};

pub trait PathConsumer {
    fn move_to(&mut self, p: Vec2D);
    fn line_to(&mut self, p: Vec2D);
    fn quad_bez_to(&mut self, p1: Vec2D, p2: Vec2D);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathOperation {
    MoveTo(Vec2D),
    LineTo(Vec2D),
    QuadBezTo(Vec2D, Vec2D),
}

impl PathConsumer for Vec<PathOperation> {
    fn move_to(&mut self, p: Vec2D) {
        self.push(PathOperation::MoveTo(p));
    }

    fn line_to(&mut self, p: Vec2D) {
        self.push(PathOperation::LineTo(p));
    }

    fn quad_bez_to(&mut self, p1: Vec2D, p2: Vec2D) {
        self.push(PathOperation::QuadBezTo(p1, p2));
    }
}

/// A [PathConsumer] that additionally accepts cubic curves and
/// passes them on as quadratic ones.
#[derive(Clone, Debug)]
pub struct QuadraticPath<C: PathConsumer> {
    inner: C,
    converter: Converter,
    current_position: Vec2D,
}

impl<C: PathConsumer> QuadraticPath<C> {
    pub fn new(inner: C, converter: Converter) -> Self {
        Self {
            inner,
            converter,
            current_position: Vec2D::ORIGIN,
        }
    }

    #[inline]
    #[must_use]
    pub fn current_position(&self) -> Vec2D {
        self.current_position
    }

    /// Draw a cubic curve from the current position to `p3`.
    ///
    /// Nothing is drawn if the curve cannot be converted.
    pub fn cubic_bez_to(&mut self, p1: Vec2D, p2: Vec2D, p3: Vec2D) -> Result<(), ConversionError> {
        let curve = CubicBezier::new(self.current_position, p1, p2, p3);
        let spline = self.converter.convert(&curve)?;

        for segment in &spline {
            self.inner.quad_bez_to(segment.p1, segment.p2);
        }

        self.current_position = p3;
        Ok(())
    }

    #[must_use]
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: PathConsumer> PathConsumer for QuadraticPath<C> {
    fn move_to(&mut self, p: Vec2D) {
        self.current_position = p;
        self.inner.move_to(p);
    }

    fn line_to(&mut self, p: Vec2D) {
        self.current_position = p;
        self.inner.line_to(p);
    }

    fn quad_bez_to(&mut self, p1: Vec2D, p2: Vec2D) {
        self.current_position = p2;
        self.inner.quad_bez_to(p1, p2);
    }
}
