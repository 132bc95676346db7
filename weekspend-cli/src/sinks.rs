use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use weekspend_finance::{ReportSink, WeekReport};

/// Writes `<dir>/<week key>.csv`, optionally echoing each report to stdout.
pub struct DirectorySink {
    dir: PathBuf,
    echo: bool,
}

impl DirectorySink {
    pub fn create(dir: impl Into<PathBuf>, echo: bool) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
        Ok(Self { dir, echo })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, report: &WeekReport) -> PathBuf {
        self.dir.join(format!("{}.csv", report.week_key))
    }
}

impl ReportSink for DirectorySink {
    fn persist(&mut self, report: &WeekReport) -> Result<()> {
        let csv = report.to_csv()?;

        if self.echo {
            println!("\nFilename: {}", report.week_key);
            println!("----------------------------------");
            println!("{}", csv.trim_end());
            println!("----------------------------------");
        }

        let path = self.path_for(report);
        fs::write(&path, csv).with_context(|| format!("write {}", path.display()))?;
        tracing::debug!(path = %path.display(), "wrote report");
        Ok(())
    }
}
