use crate::errors::{Result, SmoothError};
use ncollide2d::na::Point2;
use std::fs;
use std::path::Path;

/// An airfoil coordinate file: a free text title on the first line followed by one whitespace
/// separated x, y pair per line.
#[derive(Debug, Clone, PartialEq)]
pub struct AirfoilFile {
    pub title: String,
    pub points: Vec<Point2<f64>>,
}

impl AirfoilFile {
    pub fn new(title: impl Into<String>, points: Vec<Point2<f64>>) -> AirfoilFile {
        AirfoilFile {
            title: title.into(),
            points,
        }
    }

    pub fn read(path: &Path) -> Result<AirfoilFile> {
        let text = fs::read_to_string(path).map_err(|e| SmoothError::io(path, e))?;
        AirfoilFile::parse(&text, path)
    }

    /// Parses the contents of a coordinate file. The `source` path is only used for error
    /// reporting. Blank lines are skipped, and any other line which does not start with two
    /// numbers is reported with its line number.
    pub fn parse(text: &str, source: &Path) -> Result<AirfoilFile> {
        let mut lines = text.lines();
        let title = lines
            .next()
            .ok_or_else(|| SmoothError::parse(source, 1, "file is empty"))?
            .trim()
            .to_string();

        let mut points = Vec::new();
        for (i, line) in lines.enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let values = parse_row(line, 2).map_err(|m| SmoothError::parse(source, i + 2, m))?;
            points.push(Point2::new(values[0], values[1]));
        }

        Ok(AirfoilFile { title, points })
    }

    pub fn to_text(&self) -> String {
        let rows: Vec<String> = self
            .points
            .iter()
            .map(|p| format!("{:.7} {:.7}", p.x, p.y))
            .collect();
        format!("{}\n{}", self.title, rows.join("\n"))
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_text()).map_err(|e| SmoothError::io(path, e))
    }
}

/// Parses the first `count` whitespace separated numbers of a line. Extra trailing columns are
/// ignored.
pub(crate) fn parse_row(line: &str, count: usize) -> std::result::Result<Vec<f64>, String> {
    let values: Vec<f64> = line
        .split_whitespace()
        .take(count)
        .map(|v| {
            v.parse::<f64>()
                .map_err(|_| format!("'{}' is not a number", v))
        })
        .collect::<std::result::Result<_, _>>()?;

    if values.len() < count {
        return Err(format!(
            "expected {} columns, found {}",
            count,
            values.len()
        ));
    }

    Ok(values)
}
