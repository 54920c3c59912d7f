use crate::errors::{Result, SmoothError};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;
use tracing::{debug, warn};

pub const INPUT_FILE: &str = "afsmo.in";
pub const DUMP_FILE: &str = "afsmo.dat";
pub const SUMMARY_FILE: &str = "afsmo.smr";

/// Something that can carry out a smoothing run. The tool communicates only through fixed file
/// names in its working directory, so a runner is handed the directory to run in and the input
/// file already written there, and must leave `afsmo.dat` and/or `afsmo.smr` behind.
pub trait ToolRunner {
    fn run(&self, workdir: &Path, input_file: &Path) -> Result<()>;
}

/// Runs the smoothing executable as a blocking child process
#[derive(Debug, Clone)]
pub struct Executable {
    program: PathBuf,
}

impl Executable {
    /// Relative paths with a directory component are resolved against the current working
    /// directory now, since the child process runs from a scratch directory. Bare program names are
    /// left for the operating system to look up.
    pub fn new(program: &Path) -> Result<Executable> {
        let program = if program.is_relative() && program.components().count() > 1 {
            std::env::current_dir()
                .map_err(|e| SmoothError::io(program, e))?
                .join(program)
        } else {
            program.to_path_buf()
        };

        Ok(Executable { program })
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl ToolRunner for Executable {
    fn run(&self, workdir: &Path, input_file: &Path) -> Result<()> {
        debug!(
            program = %self.program.display(),
            input = %input_file.display(),
            "running smoothing tool"
        );

        // The input sits in the working directory, so its bare name keeps the argument short
        let arg = input_file.file_name().unwrap_or(input_file.as_os_str());
        let output = Command::new(&self.program)
            .arg(arg)
            .current_dir(workdir)
            .output()
            .map_err(|e| SmoothError::io(&self.program, e))?;

        // Success is judged by the output files, not by the exit status
        if !output.status.success() {
            warn!(status = %output.status, "smoothing tool exited abnormally");
        }
        debug!(
            stdout_bytes = output.stdout.len(),
            stderr = %String::from_utf8_lossy(&output.stderr).trim(),
            "smoothing tool finished"
        );

        Ok(())
    }
}

/// A scratch directory holding one run's files. The directory and everything in it is removed when
/// the workspace is dropped, so concurrent or repeated runs never see each other's outputs.
#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Result<Workspace> {
        let dir = tempfile::Builder::new()
            .prefix("afsmo-")
            .tempdir()
            .map_err(|e| SmoothError::io(std::env::temp_dir(), e))?;
        debug!(path = %dir.path().display(), "created workspace");
        Ok(Workspace { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn input_file(&self) -> PathBuf {
        self.path().join(INPUT_FILE)
    }

    pub fn dump_file(&self) -> PathBuf {
        self.path().join(DUMP_FILE)
    }

    pub fn summary_file(&self) -> PathBuf {
        self.path().join(SUMMARY_FILE)
    }

    /// Removes the directory now, reporting any failure instead of ignoring it as drop would
    pub fn close(self) -> Result<()> {
        let path = self.path().to_path_buf();
        self.dir.close().map_err(|e| SmoothError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_removed_on_drop() {
        let path = {
            let ws = Workspace::new().unwrap();
            std::fs::write(ws.dump_file(), "0 0\n").unwrap();
            assert!(ws.dump_file().exists());
            ws.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn test_workspaces_are_distinct() {
        let a = Workspace::new().unwrap();
        let b = Workspace::new().unwrap();
        assert_ne!(a.input_file(), b.input_file());
        assert!(a.input_file().ends_with(INPUT_FILE));
    }

    #[test]
    fn test_workspace_close() {
        let ws = Workspace::new().unwrap();
        let path = ws.path().to_path_buf();
        ws.close().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_executable_resolves_relative_path() {
        let exe = Executable::new(Path::new("./afsmo")).unwrap();
        assert!(exe.program().is_absolute());

        let bare = Executable::new(Path::new("afsmo")).unwrap();
        assert_eq!(Path::new("afsmo"), bare.program());
    }

    #[test]
    fn test_missing_executable() {
        let ws = Workspace::new().unwrap();
        let exe = Executable::new(&ws.path().join("does-not-exist")).unwrap();
        assert!(matches!(
            exe.run(ws.path(), &ws.input_file()),
            Err(SmoothError::Io { .. })
        ));
    }
}
