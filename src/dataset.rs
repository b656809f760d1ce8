//! Dataset model and text-format loader.
//!
//! The input file is line-oriented: a count of data points, that many
//! `x y` lines, a count of centroids, then that many `x y` lines. Each
//! point occupies one line with two whitespace-separated reals (the
//! one-point-per-line variant of the format is the canonical one).
//!
//! A failed parse never yields a partial dataset: the loader either
//! returns a fully populated [`Dataset`] or an error naming the offending
//! line, so the renderer never runs on half-read input.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::geometry::Point;

/// The complete input to a render pass.
///
/// Both sequences preserve file order; order affects only draw order, not
/// semantics. The dataset is immutable for the duration of a render pass
/// and replaced wholesale when a new file is opened.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Data samples, in file order.
    pub data_points: Vec<Point>,
    /// Cluster centroids, in file order.
    pub centroids: Vec<Point>,
}

impl Dataset {
    /// Load a dataset from a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened or read, and a
    /// parse error (with the offending 1-based line number) if any count
    /// or coordinate field is malformed or the file is shorter than its
    /// declared counts.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let mut lines = Vec::new();
        for line in BufReader::new(file).lines() {
            lines.push(line?);
        }
        let dataset = parse_lines(&lines)?;
        debug!(
            path = %path.as_ref().display(),
            points = dataset.data_points.len(),
            centroids = dataset.centroids.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Parse a dataset from in-memory text.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Dataset::load`], minus I/O.
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<String> = text.lines().map(str::to_owned).collect();
        parse_lines(&lines)
    }
}

/// Cursor over the input lines, tracking the 1-based line number for
/// error reporting.
struct LineCursor<'a> {
    lines: &'a [String],
    next: usize,
}

impl<'a> LineCursor<'a> {
    fn new(lines: &'a [String]) -> Self {
        Self { lines, next: 0 }
    }

    /// 1-based number of the line most recently returned.
    fn line_number(&self) -> usize {
        self.next
    }

    fn next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.get(self.next)?;
        self.next += 1;
        Some(line.as_str())
    }

    /// Everything after the declared content must be blank.
    fn expect_only_trailing_blanks(&mut self) -> Result<()> {
        while let Some(line) = self.next_line() {
            if !line.trim().is_empty() {
                return Err(Error::MalformedLine {
                    line: self.line_number(),
                    reason: format!("unexpected trailing content: {:?}", line.trim()),
                });
            }
        }
        Ok(())
    }
}

fn parse_lines(lines: &[String]) -> Result<Dataset> {
    let mut cursor = LineCursor::new(lines);

    let point_count = parse_count(&mut cursor, "data point")?;
    let data_points = parse_points(&mut cursor, point_count, "point")?;

    let centroid_count = parse_count(&mut cursor, "centroid")?;
    let centroids = parse_points(&mut cursor, centroid_count, "centroid")?;

    cursor.expect_only_trailing_blanks()?;

    Ok(Dataset {
        data_points,
        centroids,
    })
}

fn parse_count(cursor: &mut LineCursor<'_>, what: &'static str) -> Result<usize> {
    let Some(line) = cursor.next_line() else {
        return Err(Error::TruncatedInput {
            what,
            expected: 1,
            found: 0,
        });
    };

    line.trim().parse::<usize>().map_err(|_| Error::MalformedLine {
        line: cursor.line_number(),
        reason: format!("invalid {what} count: {:?}", line.trim()),
    })
}

fn parse_points(
    cursor: &mut LineCursor<'_>,
    count: usize,
    what: &'static str,
) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    points
        .try_reserve_exact(count)
        .map_err(|_| Error::AllocationFailure { what, count })?;

    for index in 0..count {
        let Some(line) = cursor.next_line() else {
            return Err(Error::TruncatedInput {
                what,
                expected: count,
                found: index,
            });
        };
        let point = parse_point(line, cursor.line_number())?;
        debug!(what, index, x = point.x, y = point.y, "parsed");
        points.push(point);
    }

    Ok(points)
}

fn parse_point(line: &str, line_number: usize) -> Result<Point> {
    let mut fields = line.split_whitespace();

    let x = parse_coordinate(fields.next(), line_number)?;
    let y = parse_coordinate(fields.next(), line_number)?;

    if let Some(extra) = fields.next() {
        return Err(Error::MalformedLine {
            line: line_number,
            reason: format!("expected two coordinates, found extra field {extra:?}"),
        });
    }

    Ok(Point::new(x, y))
}

fn parse_coordinate(field: Option<&str>, line_number: usize) -> Result<f32> {
    let field = field.ok_or_else(|| Error::MalformedLine {
        line: line_number,
        reason: "expected two coordinates".to_string(),
    })?;

    field.parse::<f32>().map_err(|_| Error::MalformedLine {
        line: line_number,
        reason: format!("invalid coordinate: {field:?}"),
    })
}
