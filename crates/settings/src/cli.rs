use bezier::CubicBezier;

use crate::{OutputFormat, Settings};

#[derive(clap::Parser, Debug)]
#[command(name = "cu2qu", version, about = "Approximate cubic Bézier curves with quadratic splines", long_about = None)]
pub struct Arguments {
    /// Maximum distance between a curve and its approximation
    #[arg(short, long, value_parser = parse_tolerance)]
    tolerance: Option<f64>,

    /// Maximum number of quadratic segments per curve
    #[arg(long, value_parser = parse_max_segments)]
    max_segments: Option<usize>,

    /// How to print the resulting splines
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Use the same number of segments for all curves
    #[clap(
        long,
        action = clap::ArgAction::SetTrue,
    )]
    compatible: bool,

    /// Curves to convert, like "0,0 10,20 30,20 40,0". Read from stdin if omitted
    #[arg(value_parser = parse_curve, allow_hyphen_values = true)]
    curves: Vec<CubicBezier>,
}

impl Arguments {
    pub(crate) fn update_settings(self, settings: &mut Settings) {
        settings.compatible |= self.compatible;
        settings.curves.extend(self.curves);

        if let Some(tolerance) = self.tolerance {
            settings.tolerance = tolerance;
        }

        if let Some(max_segments) = self.max_segments {
            settings.max_segments = max_segments;
        }

        if let Some(format) = self.format {
            settings.format = format;
        }
    }
}

fn parse_tolerance(s: &str) -> Result<f64, String> {
    let tolerance: f64 = s.parse().map_err(|e| format!("{e}"))?;

    if !tolerance.is_finite() || tolerance < 0. {
        return Err(format!("{tolerance} is not a finite, non-negative number"));
    }

    Ok(tolerance)
}

fn parse_max_segments(s: &str) -> Result<usize, String> {
    match s.parse() {
        Ok(0) => Err("at least one segment is required".to_string()),
        Ok(max_segments) => Ok(max_segments),
        Err(e) => Err(format!("{e}")),
    }
}

fn parse_curve(s: &str) -> Result<CubicBezier, String> {
    s.parse().map_err(|e: bezier::ParseCurveError| format!("{e}"))
}
