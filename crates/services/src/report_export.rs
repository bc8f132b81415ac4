use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use progression_core::{OutcomeRecord, REPORT_FILE_NAME, render_report};
use tracing::info;

use crate::error::ExportError;

pub const REPORT_DIR_ENV: &str = "PROGRESSION_REPORT_DIR";

/// Writes the progression report to `<dir>/Progression.txt`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportExporter {
    dir: PathBuf,
}

impl ReportExporter {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `PROGRESSION_REPORT_DIR`, else the user's download directory, else the working directory.
    #[must_use]
    pub fn from_env() -> Self {
        let dir = env::var_os(REPORT_DIR_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir)
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn target_path(&self) -> PathBuf {
        self.dir.join(REPORT_FILE_NAME)
    }

    /// Render `records` and write them, replacing any previous report.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Io` if the directory or file cannot be written.
    pub fn export(&self, records: &[OutcomeRecord]) -> Result<PathBuf, ExportError> {
        let path = self.target_path();
        let io_err = |source| ExportError::Io {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(io_err)?;
        fs::write(&path, render_report(records)).map_err(io_err)?;

        info!(path = %path.display(), records = records.len(), "progression report written");
        Ok(path)
    }
}
