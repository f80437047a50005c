//! Coordinate file loader.
//!
//! Lines before `NODE_COORD_SECTION` are header and ignored. Each following
//! line holds `<id> <x> <y>`; reading stops at `EOF`. Lines that do not
//! parse are skipped with a warning.

use crate::cost::{CostMatrix, Point};
use crate::error::Result;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

const SECTION_MARKER: &str = "NODE_COORD_SECTION";
const EOF_MARKER: &str = "EOF";

/// Extracts the points of a coordinate file's contents.
pub fn parse_points(input: &str) -> Vec<Point> {
    let mut points = Vec::new();
    let mut in_section = false;

    for (line_no, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line == EOF_MARKER {
            break;
        }
        if line == SECTION_MARKER {
            in_section = true;
            continue;
        }
        if !in_section {
            continue;
        }
        match parse_point(line) {
            Some(point) => points.push(point),
            None => warn!(line = line_no + 1, content = raw, "skipping malformed coordinate line"),
        }
    }
    points
}

fn parse_point(line: &str) -> Option<Point> {
    let mut fields = line.split_whitespace();
    let id = fields.next()?.parse::<i64>().ok()?;
    let x = fields.next()?.parse::<f64>().ok()?;
    let y = fields.next()?.parse::<f64>().ok()?;
    Some(Point::new(id, x, y))
}

/// Reads and parses the coordinate file at `path`.
pub fn load_points(path: &Path) -> Result<Vec<Point>> {
    let contents = fs::read_to_string(path)?;
    let points = parse_points(&contents);
    debug!(path = %path.display(), points = points.len(), "loaded coordinates");
    Ok(points)
}

/// Loads `path` and builds its cost matrix.
///
/// Fails with [`Error::EmptyInput`](crate::Error::EmptyInput) when the file
/// holds no usable coordinates.
pub fn load_cost_matrix(path: &Path) -> Result<CostMatrix> {
    let points = load_points(path)?;
    CostMatrix::from_points(&points)
}
