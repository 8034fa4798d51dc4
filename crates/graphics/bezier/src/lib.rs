//! Approximates cubic Bézier curves with splines of quadratic Bézier curves.
//!
//! PostScript/CFF outlines are made of cubic curves, while TrueType outlines and
//! many GPU glyph renderers can only deal with quadratic ones. This crate converts
//! between the two, keeping the approximation within a caller-specified distance
//! of the original curve.
//!
//! ## Algorithm
//! A cubic is first approximated by a single quadratic whose control point is the
//! intersection of the cubic's end tangents. If that is not accurate enough, the
//! cubic is split into `n` equal parts (by curve time) and each part gets its own
//! quadratic, with consecutive quadratics sharing an implied on-curve point.
//! `n` is increased until the error is small enough or [MAX_SEGMENTS] is reached.
//!
//! The error of a candidate is measured by degree-elevating the quadratic and
//! checking that the difference of the two cubics stays close to the origin, see
//! [CubicBezier::fits_inside].
//!
//! ## Related
//! * [cu2qu](https://github.com/fonttools/fonttools/tree/main/Lib/fontTools/cu2qu) (Python)
//! * [kurbo](https://github.com/linebender/kurbo) (Rust)

mod convert;
mod cubic;
mod error;
mod fit;
mod parse;
pub mod path;
mod quadratic;
mod spline;

pub use convert::{curve_to_quadratic, curves_to_quadratic, Converter, MAX_SEGMENTS};
pub use cubic::CubicBezier;
pub use error::ConversionError;
pub use fit::MAX_FIT_DEPTH;
pub use parse::ParseCurveError;
pub use quadratic::QuadraticBezier;
pub use spline::{QuadraticSpline, Segments};

pub use math::Vec2D;
