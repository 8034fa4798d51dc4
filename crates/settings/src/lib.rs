//! Responsible for creating and managing the global cu2qu settings

mod cli;

use std::sync::LazyLock;

use bezier::CubicBezier;
use clap::Parser;

/// The global settings singleton
pub static SETTINGS: LazyLock<Settings> = LazyLock::new(Settings::init);

/// Tolerance used when none is given on the command line
pub const DEFAULT_TOLERANCE: f64 = 1.;

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The points of each spline, as "x,y"
    #[default]
    Text,

    /// SVG path data
    Svg,
}

/// Holds all the configurable information for a cu2qu run
#[derive(Debug)]
pub struct Settings {
    /// Maximum distance between a curve and its approximation
    pub tolerance: f64,

    pub max_segments: usize,
    pub format: OutputFormat,

    /// Whether all splines should have the same number of segments
    pub compatible: bool,

    /// Curves given on the command line
    pub curves: Vec<CubicBezier>,
}

impl Settings {
    #[must_use]
    pub fn init() -> Self {
        let mut settings = Self::default();

        let args = cli::Arguments::parse();

        args.update_settings(&mut settings);

        settings
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_segments: bezier::MAX_SEGMENTS,
            format: OutputFormat::default(),
            compatible: false,
            curves: vec![],
        }
    }
}
