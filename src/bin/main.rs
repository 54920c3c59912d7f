use afsmo_rs::afsmo::pipeline::default_output_path;
use afsmo_rs::airfoil::pose::Pose;
use afsmo_rs::{AirfoilFile, Reconstruction, Smoother, SmoothingConfig};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "afsmo-rs")]
#[command(
    about = "Prepare airfoil coordinates for the AFSMO smoothing program and rebuild its output"
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Smooth an airfoil coordinate file with the external tool.
    Smooth(SmoothArgs),

    /// Move the leading edge to the origin and scale/rotate to unit chord.
    Normalize {
        /// Input coordinate file.
        input: PathBuf,

        /// Output file; the result is printed to stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Write the tool input file for an airfoil without running the tool.
    GenInput {
        /// Input coordinate file.
        input: PathBuf,

        /// Output file, defaults to the input with an .in extension.
        #[arg(long)]
        out: Option<PathBuf>,

        #[command(flatten)]
        options: ConfigArgs,
    },
}

#[derive(Debug, Clone, Args)]
struct SmoothArgs {
    /// Input coordinate file.
    input: PathBuf,

    /// Output file, defaults to <stem>_sm.dat next to the input.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Path to the smoothing executable.
    #[arg(long)]
    exe: Option<PathBuf>,

    /// Use the tool's interpolated coordinate dump instead of the summary table.
    #[arg(long, conflicts_with = "resample")]
    interpolate: bool,

    /// Resample the smoothed summary to this many points with splines over theta.
    #[arg(long)]
    resample: Option<usize>,

    #[command(flatten)]
    options: ConfigArgs,
}

#[derive(Debug, Clone, Args)]
struct ConfigArgs {
    /// JSON file with smoothing parameters.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of cosine spaced points to interpolate, at most 100.
    #[arg(short, long)]
    n_inter: Option<usize>,

    /// Normalize the pose before smoothing.
    #[arg(long)]
    normalize: bool,
}

impl ConfigArgs {
    fn load(&self) -> Result<SmoothingConfig> {
        let mut config = match &self.config {
            Some(path) => SmoothingConfig::from_file(path)
                .with_context(|| format!("loading configuration {}", path.display()))?,
            None => SmoothingConfig::default(),
        };

        if let Some(n) = self.n_inter {
            config.n_inter = n;
        }
        if self.normalize {
            config.normalize_pose = true;
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Smooth(args) => run_smooth(&args),
        Commands::Normalize { input, out } => run_normalize(&input, out.as_deref()),
        Commands::GenInput {
            input,
            out,
            options,
        } => run_gen_input(&input, out, &options),
    }
}

fn run_smooth(args: &SmoothArgs) -> Result<()> {
    let mut config = args.options.load()?;
    if let Some(exe) = &args.exe {
        config.executable = exe.clone();
    }
    if args.interpolate {
        config.reconstruction = Reconstruction::Interpolated;
    }
    if let Some(points) = args.resample {
        config.reconstruction = Reconstruction::Resampled { points };
    }

    let out = args
        .out
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));

    let smoother = Smoother::from_config(config).context("invalid smoothing configuration")?;
    let smoothed = smoother
        .smooth_file(&args.input, &out)
        .with_context(|| format!("smoothing {} failed", args.input.display()))?;

    println!(
        "{}: {} points written to {}",
        smoothed.title,
        smoothed.points.len(),
        out.display()
    );
    Ok(())
}

fn run_normalize(input: &Path, out: Option<&Path>) -> Result<()> {
    let airfoil = AirfoilFile::read(input)?;
    let pose = Pose::estimate(&airfoil.points)
        .with_context(|| format!("cannot normalize {}", input.display()))?;

    let points = airfoil.points.iter().map(|p| pose.apply(p)).collect();
    let normalized = AirfoilFile::new(airfoil.title.clone(), points);

    eprintln!(
        "chord {:.6}, rotated by {:.4} degrees",
        pose.chord(),
        pose.rotation().to_degrees()
    );

    match out {
        Some(path) => normalized.write(path)?,
        None => println!("{}", normalized.to_text()),
    }
    Ok(())
}

fn run_gen_input(input: &Path, out: Option<PathBuf>, options: &ConfigArgs) -> Result<()> {
    let airfoil = AirfoilFile::read(input)?;
    let config = options.load()?;
    let smoother = Smoother::from_config(config)?;

    let text = smoother
        .render_input(&airfoil)
        .with_context(|| format!("cannot prepare {}", input.display()))?;

    let out = out.unwrap_or_else(|| input.with_extension("in"));
    fs::write(&out, text).with_context(|| format!("writing {}", out.display()))?;
    println!("wrote {}", out.display());
    Ok(())
}
