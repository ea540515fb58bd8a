use crate::error::Result;
use crate::models::Observation;
use crate::processors::{ExtractionReport, YearGrouper, YearShuffle};
use crate::readers::{ConcurrentReader, FileExtraction};
use crate::utils::progress::ProgressReporter;
use std::path::PathBuf;
use tracing::info;

/// Orchestrates the extraction pipeline: parallel per-file mapping, the
/// in-process shuffle, and the grouping pass that produces output lines.
#[derive(Clone)]
pub struct ParallelExtractor {
    max_workers: usize,
    use_mmap: bool,
}

impl ParallelExtractor {
    pub fn new(max_workers: usize) -> Self {
        Self {
            max_workers,
            use_mmap: false,
        }
    }

    pub fn with_mmap(mut self, use_mmap: bool) -> Self {
        self.use_mmap = use_mmap;
        self
    }

    /// Run the full map/shuffle/reduce pass over the given files.
    ///
    /// The blocking work runs off the async runtime; progress messages
    /// mark phase boundaries.
    pub async fn extract_all(
        &self,
        files: Vec<PathBuf>,
        progress: Option<&ProgressReporter>,
    ) -> Result<(Vec<String>, ExtractionReport)> {
        if let Some(p) = progress {
            p.set_message(&format!("Mapping {} record files...", files.len()));
        }

        let config = self.clone();
        let extractions = tokio::task::spawn_blocking(move || {
            let reader = ConcurrentReader::new(config.max_workers).with_mmap(config.use_mmap);
            reader.map_files(&files, None)
        })
        .await??;

        if let Some(p) = progress {
            p.set_message("Grouping observations by year...");
        }

        let (lines, report) = Self::shuffle_and_reduce(extractions);

        info!(
            accepted = report.accepted,
            discarded = report.discarded(),
            years = report.year_statistics.len(),
            "extraction complete"
        );

        Ok((lines, report))
    }

    /// Synchronous variant with per-file progress updates, for callers
    /// already running on a blocking thread.
    pub fn extract_all_sync(
        &self,
        files: &[PathBuf],
        progress: Option<&ProgressReporter>,
    ) -> Result<(Vec<String>, ExtractionReport)> {
        let reader = ConcurrentReader::new(self.max_workers).with_mmap(self.use_mmap);
        let extractions = reader.map_files(files, progress)?;
        Ok(Self::shuffle_and_reduce(extractions))
    }

    /// Map phase only: all accepted observations plus the extraction
    /// accounting, without grouping or output formatting.
    pub async fn scan_all(
        &self,
        files: Vec<PathBuf>,
    ) -> Result<(Vec<Observation>, ExtractionReport)> {
        let config = self.clone();
        tokio::task::spawn_blocking(move || {
            let reader = ConcurrentReader::new(config.max_workers).with_mmap(config.use_mmap);
            let extractions = reader.map_files(&files, None)?;

            let mut report = ExtractionReport::default();
            let mut observations = Vec::new();
            for extraction in extractions {
                report.merge(extraction.report);
                observations.extend(extraction.observations);
            }

            Ok((observations, report))
        })
        .await?
    }

    fn shuffle_and_reduce(extractions: Vec<FileExtraction>) -> (Vec<String>, ExtractionReport) {
        let mut report = ExtractionReport::default();
        let mut shuffle = YearShuffle::new();

        // Per-file results arrive in input order, so the shuffle sees
        // observations in the same order a sequential pass would.
        for extraction in extractions {
            report.merge(extraction.report);
            shuffle.extend(extraction.observations);
        }

        let grouper = YearGrouper::new();
        let mut lines = Vec::with_capacity(shuffle.observation_count());
        for (year, temperatures) in shuffle.into_groups() {
            lines.extend(grouper.emit(&year, &temperatures));
        }

        (lines, report)
    }
}

impl Default for ParallelExtractor {
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}
