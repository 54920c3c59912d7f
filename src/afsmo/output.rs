use super::config::SummaryColumns;
use crate::airfoil::dedup::collapse_adjacent_duplicates;
use crate::airfoil::resample::AngularProfile;
use crate::airfoil::SurfacePair;
use crate::dat::parse_row;
use crate::errors::{GeometryError, Result, SmoothError};
use ncollide2d::na::Point2;
use std::fs;
use std::path::Path;

fn read_existing(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(SmoothError::MissingOutput {
            path: path.to_path_buf(),
        });
    }
    fs::read_to_string(path).map_err(|e| SmoothError::io(path, e))
}

/// Reads the tool's coordinate dump, a headerless list of x, y pairs
pub fn read_coordinate_dump(path: &Path) -> Result<Vec<Point2<f64>>> {
    let text = read_existing(path)?;
    parse_coordinate_dump(&text, path)
}

pub fn parse_coordinate_dump(text: &str, source: &Path) -> Result<Vec<Point2<f64>>> {
    let mut points = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let v = parse_row(line, 2).map_err(|m| SmoothError::parse(source, i + 1, m))?;
        points.push(Point2::new(v[0], v[1]));
    }
    Ok(points)
}

/// Rebuilds a closed contour from the coordinate dump. The first `n_inter` points are the upper
/// surface interpolated from the leading edge, the remainder the lower surface also starting from
/// the leading edge. The result runs from the upper trailing edge to the lower one. Adjacent points
/// sharing an x coordinate are collapsed, which removes the doubled leading edge the tool leaves
/// behind. The two trailing edge points are not compared with each other, so both survive.
pub fn reassemble_interpolated(
    dump: &[Point2<f64>],
    n_inter: usize,
) -> std::result::Result<Vec<Point2<f64>>, GeometryError> {
    if dump.len() <= n_inter {
        return Err(GeometryError::Shape(format!(
            "coordinate dump has {} points, expected more than {} upper surface points",
            dump.len(),
            n_inter
        )));
    }

    let surfaces = SurfacePair::new(dump[..n_inter].to_vec(), dump[n_inter..].to_vec());
    Ok(collapse_adjacent_duplicates(&surfaces.to_contour()))
}

/// The columns of the summary table needed to rebuild a contour
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub theta: Vec<f64>,
    pub x: Vec<f64>,
    pub y_smoothed: Vec<f64>,
}

impl Summary {
    pub fn points(&self) -> Vec<Point2<f64>> {
        self.x
            .iter()
            .zip(self.y_smoothed.iter())
            .map(|(x, y)| Point2::new(*x, *y))
            .collect()
    }

    pub fn to_profile(&self) -> std::result::Result<AngularProfile, GeometryError> {
        AngularProfile::new(
            self.theta.clone(),
            self.x.clone(),
            self.y_smoothed.clone(),
        )
    }
}

pub fn read_summary(path: &Path, columns: &SummaryColumns) -> Result<Summary> {
    let text = read_existing(path)?;
    parse_summary(&text, path, columns)
}

/// Parses the summary table, skipping the header lines and picking the configured columns out of
/// every remaining non-blank row.
pub fn parse_summary(text: &str, source: &Path, columns: &SummaryColumns) -> Result<Summary> {
    let mut summary = Summary {
        theta: Vec::new(),
        x: Vec::new(),
        y_smoothed: Vec::new(),
    };

    for (i, line) in text.lines().enumerate().skip(columns.header_lines) {
        if line.trim().is_empty() {
            continue;
        }
        let v = parse_row(line, columns.width())
            .map_err(|m| SmoothError::parse(source, i + 1, m))?;
        summary.theta.push(v[columns.theta]);
        summary.x.push(v[columns.x]);
        summary.y_smoothed.push(v[columns.y_smoothed]);
    }

    Ok(summary)
}
