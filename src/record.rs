use std::{error::Error, fmt::Display, io::Write};

use nalgebra::Point2;

/// Textual point record of a planar point placed in the `y = 0` plane: the point's `y`
/// coordinate becomes `z`. Coordinates use the shortest digits that read back to the same value,
/// always with a decimal point, switching to `1.5e-05` / `1e+16` exponent form outside
/// `[1e-4, 1e16)`.
/// # Example
/// ```
/// use nalgebra::Point2;
/// use spline_chain::PointRecord;
///
/// let point = Point2::new(1.5, -2.0);
/// assert_eq!(r#"<point x="1.5" y="0" z="-2.0" />"#, PointRecord(&point).to_string());
/// ```
pub struct PointRecord<'a>(pub &'a Point2<f64>);

impl Display for PointRecord<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            r#"<point x="{}" y="0" z="{}" />"#,
            format_coordinate(self.0.x),
            format_coordinate(self.0.y)
        )
    }
}

fn format_coordinate(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }

    // `{:e}` keeps the shortest round trip digits, e.g. "-1.25e3"
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if (-4..16).contains(&exponent) {
        let mut plain = value.to_string();
        if !plain.contains('.') {
            plain.push_str(".0");
        }
        plain
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}

/// Writes one [PointRecord] per line.
pub fn write_point_records<W: Write>(writer: &mut W, points: &[Point2<f64>]) -> Result<(), Box<dyn Error>> {
    for point in points {
        writeln!(writer, "{}", PointRecord(point))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_format() {
        let point = Point2::new(14.142135623730951, 0.25);

        assert_eq!(
            r#"<point x="14.142135623730951" y="0" z="0.25" />"#,
            PointRecord(&point).to_string()
        );
    }

    #[test]
    fn test_whole_numbers_keep_decimal_point() {
        let point = Point2::new(-10.0, 0.0);

        assert_eq!(r#"<point x="-10.0" y="0" z="0.0" />"#, PointRecord(&point).to_string());
        assert_eq!("-0.0", format_coordinate(-0.0));
        assert_eq!("1000000000000000.0", format_coordinate(1e15));
    }

    #[test]
    fn test_exponent_form() {
        assert_eq!("1.2246467991473532e-16", format_coordinate(1.2246467991473532e-16));
        assert_eq!("-2.5e-05", format_coordinate(-0.000025));
        assert_eq!("0.0001", format_coordinate(0.0001));
        assert_eq!("1e+16", format_coordinate(1e16));
        assert_eq!("1.5e+300", format_coordinate(1.5e300));
    }

    #[test]
    fn test_non_finite() {
        assert_eq!("nan", format_coordinate(f64::NAN));
        assert_eq!("inf", format_coordinate(f64::INFINITY));
        assert_eq!("-inf", format_coordinate(f64::NEG_INFINITY));
    }

    #[test]
    fn test_write_point_records() {
        let points = vec![Point2::new(0.0, 1.0), Point2::new(-3.5, 2.0)];
        let mut buffer = Vec::new();
        write_point_records(&mut buffer, &points).unwrap();

        assert_eq!(
            "<point x=\"0.0\" y=\"0\" z=\"1.0\" />\n<point x=\"-3.5\" y=\"0\" z=\"2.0\" />\n",
            String::from_utf8(buffer).unwrap()
        );
    }

    #[test]
    fn test_write_nothing() {
        let mut buffer = Vec::new();
        write_point_records(&mut buffer, &[]).unwrap();

        assert!(buffer.is_empty());
    }
}
