use crate::{ConversionError, CubicBezier, QuadraticSpline};

/// Maximum number of quadratic segments used to approximate a single cubic curve
pub const MAX_SEGMENTS: usize = 100;

/// Converts cubic curves to quadratic splines within a fixed tolerance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Converter {
    tolerance: f64,
    max_segments: usize,
}

impl Converter {
    /// Create a converter that allows the approximation to deviate at most
    /// `tolerance` units from the original curve.
    pub fn new(tolerance: f64) -> Result<Self, ConversionError> {
        validate_tolerance(tolerance)?;

        Ok(Self {
            tolerance,
            max_segments: MAX_SEGMENTS,
        })
    }

    /// Limit the number of quadratic segments per curve.
    ///
    /// The limit is at least one.
    #[must_use]
    pub fn with_max_segments(mut self, max_segments: usize) -> Self {
        self.max_segments = max_segments.max(1);
        self
    }

    #[inline]
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    #[inline]
    #[must_use]
    pub fn max_segments(&self) -> usize {
        self.max_segments
    }

    /// Approximate a cubic curve with as few quadratic segments as possible
    pub fn convert(&self, curve: &CubicBezier) -> Result<QuadraticSpline, ConversionError> {
        if !curve.is_finite() {
            return Err(ConversionError::NonFiniteCurve);
        }

        let spline = (1..=self.max_segments)
            .find_map(|segments| curve.approximate_spline(segments, self.tolerance));

        match spline {
            Some(spline) => {
                log::trace!(
                    "Approximated {curve:?} with {} quadratic segments",
                    spline.segment_count()
                );
                Ok(spline)
            },
            None => {
                log::debug!(
                    "Could not approximate {curve:?} within {} using up to {} segments",
                    self.tolerance,
                    self.max_segments
                );
                Err(ConversionError::ApproximationNotFound)
            },
        }
    }

    /// Approximate several cubic curves such that all resulting splines
    /// have the same number of segments.
    ///
    /// This keeps outlines that are meant to be interpolated (like the masters of
    /// a variable font) compatible with each other.
    pub fn convert_compatible(
        &self,
        curves: &[CubicBezier],
    ) -> Result<Vec<QuadraticSpline>, ConversionError> {
        let tolerances = vec![self.tolerance; curves.len()];
        self.convert_compatible_with_tolerances(curves, &tolerances)
    }

    /// Like [Converter::convert_compatible], but with a separate tolerance for every curve.
    ///
    /// The converter's own tolerance is ignored.
    pub fn convert_compatible_with_tolerances(
        &self,
        curves: &[CubicBezier],
        tolerances: &[f64],
    ) -> Result<Vec<QuadraticSpline>, ConversionError> {
        if curves.len() != tolerances.len() {
            return Err(ConversionError::MismatchedTolerances);
        }

        for &tolerance in tolerances {
            validate_tolerance(tolerance)?;
        }

        if curves.iter().any(|curve| !curve.is_finite()) {
            return Err(ConversionError::NonFiniteCurve);
        }

        if curves.is_empty() {
            return Ok(vec![]);
        }

        let mut splines = vec![None; curves.len()];
        let mut segments = 1;

        // Walk around the curves until all of them succeed with the same number of
        // segments. Whenever one fails, the walk restarts at that curve with more segments.
        let mut i = 0;
        let mut last_failure = 0;
        loop {
            match curves[i].approximate_spline(segments, tolerances[i]) {
                Some(spline) => {
                    splines[i] = Some(spline);
                    i = (i + 1) % curves.len();

                    if i == last_failure {
                        log::trace!(
                            "Approximated {} curves with {segments} quadratic segments each",
                            curves.len()
                        );
                        return splines
                            .into_iter()
                            .collect::<Option<Vec<_>>>()
                            .ok_or(ConversionError::ApproximationNotFound);
                    }
                },
                None => {
                    if segments >= self.max_segments {
                        log::debug!(
                            "Could not approximate {:?} using up to {} segments",
                            curves[i],
                            self.max_segments
                        );
                        return Err(ConversionError::ApproximationNotFound);
                    }

                    segments += 1;
                    last_failure = i;
                },
            }
        }
    }
}

fn validate_tolerance(tolerance: f64) -> Result<(), ConversionError> {
    if tolerance.is_finite() && tolerance >= 0. {
        Ok(())
    } else {
        Err(ConversionError::InvalidTolerance)
    }
}

/// Approximate a cubic curve with a quadratic spline that deviates at most
/// `tolerance` from the curve, using up to [MAX_SEGMENTS] segments.
pub fn curve_to_quadratic(
    curve: &CubicBezier,
    tolerance: f64,
) -> Result<QuadraticSpline, ConversionError> {
    Converter::new(tolerance)?.convert(curve)
}

/// Approximate cubic curves with quadratic splines that all have the same
/// number of segments.
///
/// `tolerances` contains the allowed deviation for each curve.
pub fn curves_to_quadratic(
    curves: &[CubicBezier],
    tolerances: &[f64],
) -> Result<Vec<QuadraticSpline>, ConversionError> {
    Converter::new(0.)?.convert_compatible_with_tolerances(curves, tolerances)
}

#[cfg(test)]
mod tests {
    use super::{curve_to_quadratic, curves_to_quadratic, Converter, MAX_SEGMENTS};
    use crate::{ConversionError, CubicBezier, Vec2D};

    fn curve() -> CubicBezier {
        CubicBezier::new(
            Vec2D::new(550., 258.),
            Vec2D::new(1044., 482.),
            Vec2D::new(2029., 1841.),
            Vec2D::new(1934., 1554.),
        )
    }

    #[test]
    fn rejects_invalid_tolerances() {
        assert_eq!(Converter::new(-1.), Err(ConversionError::InvalidTolerance));
        assert_eq!(
            Converter::new(f64::NAN),
            Err(ConversionError::InvalidTolerance)
        );
        assert_eq!(
            Converter::new(f64::INFINITY),
            Err(ConversionError::InvalidTolerance)
        );
        assert!(Converter::new(0.).is_ok());
    }

    #[test]
    fn default_segment_limit() {
        let converter = Converter::new(1.).unwrap();
        assert_eq!(converter.max_segments(), MAX_SEGMENTS);
        assert_eq!(converter.with_max_segments(0).max_segments(), 1);
    }

    #[test]
    fn finds_smallest_number_of_segments() {
        let spline = curve_to_quadratic(&curve(), 5.).unwrap();
        assert_eq!(spline.segment_count(), 6);

        assert_eq!(spline.start(), curve().p0);
        assert_eq!(spline.end(), curve().p3);
        assert!(spline.points()[1].distance_to(Vec2D::new(673.5, 314.)) < 1e-4);
        assert!(spline.points()[2].distance_to(Vec2D::new(88639. / 90., 52584. / 90.)) < 1e-4);
        assert!(spline.points()[6].distance_to(Vec2D::new(1957.75, 1625.75)) < 1e-4);
    }

    #[test]
    fn segment_limit_is_respected() {
        let converter = Converter::new(5.).unwrap().with_max_segments(5);
        assert_eq!(
            converter.convert(&curve()),
            Err(ConversionError::ApproximationNotFound)
        );
    }

    #[test]
    fn rejects_non_finite_curves() {
        let mut curve = curve();
        curve.p1.x = f64::INFINITY;

        assert_eq!(
            curve_to_quadratic(&curve, 1.),
            Err(ConversionError::NonFiniteCurve)
        );
    }

    #[test]
    fn compatible_splines_share_segment_count() {
        let curves = [
            curve(),
            CubicBezier::new(
                Vec2D::new(859., 384.),
                Vec2D::new(1998., 116.),
                Vec2D::new(1596., 1772.),
                Vec2D::new(8., 1824.),
            ),
            CubicBezier::new(
                Vec2D::new(1090., 937.),
                Vec2D::new(418., 1300.),
                Vec2D::new(125., 91.),
                Vec2D::new(104., 37.),
            ),
        ];

        let splines = curves_to_quadratic(&curves, &[5., 5., 5.]).unwrap();
        assert_eq!(splines.len(), 3);
        for spline in &splines {
            assert_eq!(spline.points().len(), 8);
        }
        assert!(splines[0].points()[1].distance_to(Vec2D::new(673.5, 314.)) < 1e-4);
        assert!(
            splines[0].points()[2].distance_to(Vec2D::new(88639. / 90., 52584. / 90.)) < 1e-4
        );
    }

    #[test]
    fn compatible_conversion_validates_input() {
        assert_eq!(
            curves_to_quadratic(&[curve()], &[]),
            Err(ConversionError::MismatchedTolerances)
        );
        assert_eq!(
            curves_to_quadratic(&[curve()], &[-2.]),
            Err(ConversionError::InvalidTolerance)
        );
        assert_eq!(curves_to_quadratic(&[], &[]), Ok(vec![]));
    }

    #[test]
    fn compatible_conversion_of_one_curve_matches_single_conversion() {
        let single = curve_to_quadratic(&curve(), 1.).unwrap();
        let compatible = curves_to_quadratic(&[curve()], &[1.]).unwrap();

        assert_eq!(compatible, vec![single]);
    }
}
