use crate::errors::{Result, SmoothError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The largest number of interpolation points the smoothing tool accepts
pub const MAX_INTERPOLATION_POINTS: usize = 100;

/// How the smoothed contour is rebuilt from the tool's output files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reconstruction {
    /// Use the smoothed coordinates from the summary table as they are, one per input point
    Summary,

    /// Use the tool's own interpolation at the cosine spaced abscissas from the coordinate dump,
    /// with the duplicate it leaves at the leading edge removed
    Interpolated,

    /// Fit splines to the summary table against theta and resample at a fixed number of points
    Resampled { points: usize },
}

/// Zero based column indices into the summary table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummaryColumns {
    pub header_lines: usize,
    pub theta: usize,
    pub x: usize,
    pub y_smoothed: usize,
}

impl Default for SummaryColumns {
    fn default() -> Self {
        SummaryColumns {
            header_lines: 5,
            theta: 1,
            x: 2,
            y_smoothed: 5,
        }
    }
}

impl SummaryColumns {
    pub fn width(&self) -> usize {
        self.theta.max(self.x).max(self.y_smoothed) + 1
    }
}

/// Parameters for one smoothing run. The integer options are passed through to the tool's input
/// file unchanged and are never interpreted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SmoothingConfig {
    pub max_iter: u32,
    pub plot_option: u32,
    pub punch_option: u32,
    pub input_option: u32,
    pub compute_thickness_camber: bool,
    pub check_bad_coords: bool,
    pub translate_rotate: bool,
    pub output_option: u32,

    /// Path to the smoothing executable. Relative paths are resolved against the caller's
    /// working directory, not the scratch directory the tool runs in.
    pub executable: PathBuf,

    /// Number of cosine spaced abscissas the tool interpolates each surface at
    pub n_inter: usize,

    pub reconstruction: Reconstruction,
    pub summary_columns: SummaryColumns,

    /// Move the leading edge to the origin and the trailing edge to (1, 0) before smoothing
    pub normalize_pose: bool,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        SmoothingConfig {
            max_iter: 80,
            plot_option: 10,
            punch_option: 1,
            input_option: 0,
            compute_thickness_camber: true,
            check_bad_coords: true,
            translate_rotate: true,
            output_option: 2,
            executable: default_executable(),
            n_inter: 80,
            reconstruction: Reconstruction::Summary,
            summary_columns: SummaryColumns::default(),
            normalize_pose: false,
        }
    }
}

fn default_executable() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from("afsmo.exe")
    } else {
        PathBuf::from("./afsmo")
    }
}

impl SmoothingConfig {
    /// Loads a configuration from a JSON file. Missing fields take their default values.
    pub fn from_file(path: &Path) -> Result<SmoothingConfig> {
        let text = fs::read_to_string(path).map_err(|e| SmoothError::io(path, e))?;
        let config: SmoothingConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(2..=MAX_INTERPOLATION_POINTS).contains(&self.n_inter) {
            return Err(SmoothError::Config(format!(
                "n_inter must be between 2 and {}, got {}",
                MAX_INTERPOLATION_POINTS, self.n_inter
            )));
        }

        if let Reconstruction::Resampled { points } = self.reconstruction {
            if points < 2 {
                return Err(SmoothError::Config(format!(
                    "resampling needs at least 2 points, got {}",
                    points
                )));
            }
        }

        Ok(())
    }

    /// The eight control values in the order the tool reads them
    pub fn control_values(&self) -> [u32; 8] {
        [
            self.max_iter,
            self.plot_option,
            self.punch_option,
            self.input_option,
            u32::from(self.compute_thickness_camber),
            u32::from(self.check_bad_coords),
            u32::from(self.translate_rotate),
            self.output_option,
        ]
    }
}
