//! Command line frontend for the `bezier` crate.
//!
//! Reads cubic curves from the command line (or stdin, one per line) and prints
//! the quadratic splines approximating them.

mod input;
mod output;

use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use bezier::{ConversionError, Converter, ParseCurveError};
use error_derive::Error;
use settings::{Settings, SETTINGS};

#[derive(Debug, Error)]
pub enum Error {
    #[msg = "i/o error"]
    Io(io::Error),

    #[msg = "conversion failed"]
    Conversion(ConversionError),

    #[msg = "invalid curve in line {line}: {error}"]
    InvalidCurve { line: usize, error: ParseCurveError },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(&SETTINGS, io::stdin().lock(), &mut io::stdout().lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            match std::error::Error::source(&error) {
                Some(source) => log::error!("{error}: {source}"),
                None => log::error!("{error}"),
            }
            ExitCode::FAILURE
        },
    }
}

/// Convert all input curves, returning whether every one of them succeeded.
///
/// `reader` is only read if no curves were given on the command line.
fn run<R: BufRead, W: Write>(
    settings: &Settings,
    reader: R,
    writer: &mut W,
) -> Result<bool, Error> {
    let converter = Converter::new(settings.tolerance)?.with_max_segments(settings.max_segments);

    let input = if settings.curves.is_empty() {
        input::read_curves(reader)?
    } else {
        input::Input {
            curves: settings.curves.clone(),
            rejected: 0,
        }
    };

    let mut success = input.rejected == 0;

    if settings.compatible {
        let splines = converter.convert_compatible(&input.curves)?;
        for spline in &splines {
            output::write_spline(&mut *writer, spline, settings.format)?;
        }
    } else {
        for curve in &input.curves {
            match converter.convert(curve) {
                Ok(spline) => output::write_spline(&mut *writer, &spline, settings.format)?,
                Err(error) => {
                    log::error!("Could not convert {curve:?}: {error}");
                    output::write_failure(&mut *writer)?;
                    success = false;
                },
            }
        }
    }

    Ok(success)
}
