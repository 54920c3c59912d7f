use super::config::{Reconstruction, SmoothingConfig};
use super::input::ToolInput;
use super::output::{read_coordinate_dump, read_summary, reassemble_interpolated};
use super::runner::{Executable, ToolRunner, Workspace};
use crate::airfoil::pose::normalize_pose;
use crate::airfoil::resample::resample_profile;
use crate::airfoil::sampling::cosine_spacing;
use crate::airfoil::split::split_at_leading_edge;
use crate::dat::AirfoilFile;
use crate::errors::{Result, SmoothError};
use ncollide2d::na::Point2;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Drives one airfoil through the smoothing tool: split the contour, write the tool's input into a
/// private scratch directory, run the tool there, and rebuild a contour from whatever it produced.
pub struct Smoother<R: ToolRunner> {
    config: SmoothingConfig,
    runner: R,
}

impl Smoother<Executable> {
    /// A smoother which runs the executable named in the configuration
    pub fn from_config(config: SmoothingConfig) -> Result<Self> {
        let runner = Executable::new(&config.executable)?;
        Smoother::new(config, runner)
    }
}

impl<R: ToolRunner> Smoother<R> {
    pub fn new(config: SmoothingConfig, runner: R) -> Result<Self> {
        config.validate()?;
        Ok(Smoother { config, runner })
    }

    pub fn config(&self) -> &SmoothingConfig {
        &self.config
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Prepares the contour that is handed to the tool, applying the pose normalization if it is
    /// enabled
    fn prepared(&self, points: &[Point2<f64>]) -> Result<Vec<Point2<f64>>> {
        if self.config.normalize_pose {
            debug!("normalizing pose");
            Ok(normalize_pose(points)?)
        } else {
            Ok(points.to_vec())
        }
    }

    /// Renders the tool input for an airfoil without running anything
    pub fn render_input(&self, airfoil: &AirfoilFile) -> Result<String> {
        let points = self.prepared(&airfoil.points)?;
        let surfaces = split_at_leading_edge(&points)?;
        let abscissas = cosine_spacing(self.config.n_inter)?;
        debug!(
            upper = surfaces.upper.len(),
            lower = surfaces.lower.len(),
            n_inter = abscissas.len(),
            "split contour at leading edge"
        );

        Ok(ToolInput::new(&airfoil.title, &self.config, &surfaces, &abscissas).render())
    }

    /// Smooths an airfoil, returning a new one with the same title
    pub fn smooth(&self, airfoil: &AirfoilFile) -> Result<AirfoilFile> {
        let input = self.render_input(airfoil)?;

        let workspace = Workspace::new()?;
        let input_file = workspace.input_file();
        fs::write(&input_file, input).map_err(|e| SmoothError::io(&input_file, e))?;

        self.runner.run(workspace.path(), &input_file)?;

        let points = self.reconstruct(&workspace)?;
        info!(
            title = %airfoil.title,
            input_points = airfoil.points.len(),
            output_points = points.len(),
            "smoothed airfoil"
        );

        workspace.close()?;
        Ok(AirfoilFile::new(airfoil.title.clone(), points))
    }

    fn reconstruct(&self, workspace: &Workspace) -> Result<Vec<Point2<f64>>> {
        match self.config.reconstruction {
            Reconstruction::Summary => {
                let summary =
                    read_summary(&workspace.summary_file(), &self.config.summary_columns)?;
                Ok(summary.points())
            }
            Reconstruction::Interpolated => {
                let dump = read_coordinate_dump(&workspace.dump_file())?;
                Ok(reassemble_interpolated(&dump, self.config.n_inter)?)
            }
            Reconstruction::Resampled { points } => {
                let summary =
                    read_summary(&workspace.summary_file(), &self.config.summary_columns)?;
                Ok(resample_profile(&summary.to_profile()?, points)?)
            }
        }
    }

    /// Reads an airfoil file, smooths it and writes the result
    pub fn smooth_file(&self, input: &Path, output: &Path) -> Result<AirfoilFile> {
        let airfoil = AirfoilFile::read(input)?;
        let smoothed = self.smooth(&airfoil)?;
        smoothed.write(output)?;
        info!(output = %output.display(), "wrote smoothed airfoil");
        Ok(smoothed)
    }
}

/// The conventional name for a smoothed file: the input's stem with `_sm.dat` appended, in the
/// same directory
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}_sm.dat", stem))
}
