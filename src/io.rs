//! Plain-text point input and tour report output.
//!
//! Input is CSV: one `x,y` pair per line. An `x,y` header line is allowed
//! first; blank lines are skipped.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::solver::Solution;

/// Reads points from a CSV file.
pub fn read_points(path: impl AsRef<Path>) -> Result<Vec<Point>> {
    let text = fs::read_to_string(path.as_ref())?;
    parse_points(&text)
}

/// Parses CSV point text. Errors carry the 1-based line number.
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || (points.is_empty() && is_header(line)) {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != 2 {
            return Err(Error::parse(
                line_no,
                format!("expected 2 fields, got {}", fields.len()),
            ));
        }
        let x = parse_coord(fields[0], line_no)?;
        let y = parse_coord(fields[1], line_no)?;
        points.push(Point::new(x, y));
    }
    Ok(points)
}

fn is_header(line: &str) -> bool {
    line.replace(' ', "").eq_ignore_ascii_case("x,y")
}

fn parse_coord(field: &str, line_no: usize) -> Result<f64> {
    let value: f64 = field
        .parse()
        .map_err(|_| Error::parse(line_no, format!("invalid coordinate '{field}'")))?;
    if !value.is_finite() {
        return Err(Error::parse(line_no, format!("non-finite coordinate '{field}'")));
    }
    Ok(value)
}

/// Writes the tour and its total length.
///
/// ```text
/// Tour:
/// [0, 3, 2, 1, 0]
/// Total distance:
/// 4
/// ```
pub fn write_report<W: Write>(out: &mut W, solution: &Solution) -> Result<()> {
    let indices: Vec<String> = solution
        .tour
        .as_slice()
        .iter()
        .map(ToString::to_string)
        .collect();
    writeln!(out, "Tour:")?;
    writeln!(out, "[{}]", indices.join(", "))?;
    writeln!(out, "Total distance:")?;
    writeln!(out, "{}", solution.total_length)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{Solver, SolverConfig};

    #[test]
    fn test_parse_with_header_and_blanks() {
        let points = parse_points("x,y\n0,0\n\n 1.5 , -2\n").unwrap();
        assert_eq!(points, vec![Point::new(0.0, 0.0), Point::new(1.5, -2.0)]);
    }

    #[test]
    fn test_parse_without_header() {
        let points = parse_points("3,4\n5,6").unwrap();
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn test_parse_wrong_field_count() {
        let err = parse_points("x,y\n1,2\n3\n").unwrap_err();
        match err {
            Error::Parse { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("got 1"), "message: {message}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_non_numeric() {
        let err = parse_points("1,2\n3,abc\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }

    #[test]
    fn test_parse_rejects_nan() {
        assert!(parse_points("NaN,1\n").is_err());
    }

    #[test]
    fn test_header_only_after_points_is_error() {
        assert!(parse_points("1,2\nx,y\n").is_err());
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_points("/nonexistent/u-tsp/points.csv").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_write_report() {
        let points = parse_points("x,y\n0,0\n0,1\n1,1\n1,0\n").unwrap();
        let solution = Solver::solve(&points, &SolverConfig::default()).unwrap();
        let mut out = Vec::new();
        write_report(&mut out, &solution).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Tour:\n[0, 3, 2, 1, 0]\nTotal distance:\n4\n");
    }
}
