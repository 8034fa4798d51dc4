use std::io;

use bezier::{path::PathConsumer, QuadraticSpline, Vec2D};
use settings::OutputFormat;

/// Builds SVG path data
#[derive(Debug, Default)]
struct SvgPath {
    data: String,
}

impl SvgPath {
    fn push_command(&mut self, command: char, points: &[Vec2D]) {
        if !self.data.is_empty() {
            self.data.push(' ');
        }

        self.data.push(command);
        for point in points {
            self.data.push_str(&format!(" {} {}", point.x, point.y));
        }
    }
}

impl PathConsumer for SvgPath {
    fn move_to(&mut self, p: Vec2D) {
        self.push_command('M', &[p]);
    }

    fn line_to(&mut self, p: Vec2D) {
        self.push_command('L', &[p]);
    }

    fn quad_bez_to(&mut self, p1: Vec2D, p2: Vec2D) {
        self.push_command('Q', &[p1, p2]);
    }
}

pub fn write_spline<W: io::Write>(
    writer: &mut W,
    spline: &QuadraticSpline,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            let points: Vec<String> = spline
                .points()
                .iter()
                .map(|point| format!("{},{}", point.x, point.y))
                .collect();
            writeln!(writer, "{}", points.join(" "))
        },
        OutputFormat::Svg => {
            let mut path = SvgPath::default();
            path.move_to(spline.start());
            for segment in spline {
                path.quad_bez_to(segment.p1, segment.p2);
            }
            writeln!(writer, "{}", path.data)
        },
    }
}

/// Keep the output aligned with the input when a curve could not be converted
pub fn write_failure<W: io::Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use super::{write_spline, OutputFormat, PathConsumer, SvgPath, Vec2D};
    use bezier::{curve_to_quadratic, CubicBezier};

    fn spline_output(format: OutputFormat) -> String {
        let curve = CubicBezier::new(
            Vec2D::new(50., 50.),
            Vec2D::new(100., 100.),
            Vec2D::new(150., 100.),
            Vec2D::new(200., 50.),
        );
        let spline = curve_to_quadratic(&curve, 1.).unwrap();

        let mut output = vec![];
        write_spline(&mut output, &spline, format).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn text_output() {
        assert_eq!(spline_output(OutputFormat::Text), "50,50 125,125 200,50\n");
    }

    #[test]
    fn svg_output() {
        assert_eq!(spline_output(OutputFormat::Svg), "M 50 50 Q 125 125 200 50\n");
    }

    #[test]
    fn svg_commands() {
        let mut path = SvgPath::default();
        path.move_to(Vec2D::new(0., 0.));
        path.line_to(Vec2D::new(1.5, -2.));
        path.quad_bez_to(Vec2D::new(3., 4.), Vec2D::new(5., 6.));

        assert_eq!(path.data, "M 0 0 L 1.5 -2 Q 3 4 5 6");
    }
}
