use std::{num::ParseFloatError, str::FromStr};

use error_derive::Error;
use math::Vec2D;

use crate::CubicBezier;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseCurveError {
    #[msg = "expected 4 points, found {found}"]
    WrongNumberOfPoints { found: usize },

    #[msg = "expected a point like \"x,y\", found {point:?}"]
    MalformedPoint { point: String },

    #[msg = "invalid coordinate"]
    InvalidCoordinate(ParseFloatError),
}

fn parse_point(point: &str) -> Result<Vec2D, ParseCurveError> {
    let Some((x, y)) = point.split_once(',') else {
        return Err(ParseCurveError::MalformedPoint {
            point: point.to_string(),
        });
    };

    Ok(Vec2D::new(x.trim().parse()?, y.trim().parse()?))
}

/// Parses curves written as four whitespace-separated points, like
/// `"0,0 10,20 30,20 40,0"`.
impl FromStr for CubicBezier {
    type Err = ParseCurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let points = s
            .split_whitespace()
            .map(parse_point)
            .collect::<Result<Vec<_>, _>>()?;

        match points[..] {
            [p0, p1, p2, p3] => Ok(Self::new(p0, p1, p2, p3)),
            _ => Err(ParseCurveError::WrongNumberOfPoints {
                found: points.len(),
            }),
        }
    }
}
