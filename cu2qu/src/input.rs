use std::io::BufRead;

use bezier::CubicBezier;

use crate::Error;

/// Curves read from the input
#[derive(Debug, Default)]
pub struct Input {
    pub curves: Vec<CubicBezier>,

    /// Number of lines that did not contain a valid curve
    pub rejected: usize,
}

/// Read one curve per line, skipping empty lines and lines starting with `#`.
///
/// Lines that cannot be parsed are reported and skipped.
pub fn read_curves<R: BufRead>(reader: R) -> Result<Input, Error> {
    let mut input = Input::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line.parse() {
            Ok(curve) => input.curves.push(curve),
            Err(error) => {
                let error = Error::InvalidCurve {
                    line: index + 1,
                    error,
                };
                log::warn!("{error}");
                input.rejected += 1;
            },
        }
    }

    Ok(input)
}
