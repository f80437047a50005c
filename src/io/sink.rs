//! Destinations for per-worker trajectories and the final tour.

use crate::anneal::RunMetrics;
use crate::error::Result;
use crate::tour::Tour;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Receives the output of a search.
///
/// Implementations are shared by every worker, hence `Send + Sync`.
pub trait ResultSink: Send + Sync {
    /// Stores the trajectory of worker `worker`.
    fn record_run(&self, worker: usize, metrics: &RunMetrics) -> Result<()>;

    /// Stores a finished tour under `title`.
    fn record_best(&self, _title: &str, _tour: &Tour, _cost: f64) -> Result<()> {
        Ok(())
    }
}

/// Writes one `thread<worker>.txt` per worker into a directory.
///
/// Each line is `<iteration> <cost>`, the cost being that of the current
/// tour after the iteration's accept/revert decision. Files are truncated
/// on every run.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of worker `worker`'s trajectory file.
    pub fn run_path(&self, worker: usize) -> PathBuf {
        self.dir.join(format!("thread{worker}.txt"))
    }

    /// Path of the file `record_best` appends to.
    pub fn best_path(&self) -> PathBuf {
        self.dir.join("best_tour.txt")
    }
}

impl ResultSink for FileSink {
    fn record_run(&self, worker: usize, metrics: &RunMetrics) -> Result<()> {
        let mut out = BufWriter::new(File::create(self.run_path(worker))?);
        for sample in metrics {
            writeln!(out, "{} {}", sample.iteration, sample.current_cost)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Appends `title`, the cost and the node sequence as three lines.
    fn record_best(&self, title: &str, tour: &Tour, cost: f64) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.best_path())?;
        let mut out = BufWriter::new(file);
        writeln!(out, "{title}")?;
        writeln!(out, "{cost}")?;
        let nodes: Vec<String> = tour.as_slice().iter().map(usize::to_string).collect();
        writeln!(out, "{}", nodes.join(" "))?;
        out.flush()?;
        Ok(())
    }
}

/// Keeps everything in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    runs: Mutex<Vec<(usize, RunMetrics)>>,
    best: Mutex<Vec<(String, Tour, f64)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded runs, ordered by worker index.
    pub fn runs(&self) -> Vec<(usize, RunMetrics)> {
        let mut runs = self.runs.lock().unwrap_or_else(PoisonError::into_inner).clone();
        runs.sort_by_key(|(worker, _)| *worker);
        runs
    }

    pub fn best(&self) -> Vec<(String, Tour, f64)> {
        self.best.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl ResultSink for MemorySink {
    fn record_run(&self, worker: usize, metrics: &RunMetrics) -> Result<()> {
        self.runs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((worker, metrics.clone()));
        Ok(())
    }

    fn record_best(&self, title: &str, tour: &Tour, cost: f64) -> Result<()> {
        self.best
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((title.to_string(), tour.clone(), cost));
        Ok(())
    }
}
