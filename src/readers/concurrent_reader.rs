use crate::error::{ExtractionError, Result};
use crate::readers::{FileExtraction, RecordReader};
use crate::utils::progress::ProgressReporter;
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Maps many record files to observations in parallel. Each file is an
/// independent shard: no state is shared between workers beyond the
/// progress counter.
#[derive(Clone)]
pub struct ConcurrentReader {
    max_workers: usize,
    use_mmap: bool,
}

impl ConcurrentReader {
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

    /// Expand files and directories into a concrete list of record files.
    /// Directory entries are sorted by name so processing order does not
    /// depend on filesystem enumeration order.
    pub fn discover_input_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for input in inputs {
            if input.is_file() {
                files.push(input.clone());
            } else if input.is_dir() {
                let mut entries = Vec::new();
                for entry in std::fs::read_dir(input)? {
                    let path = entry?.path();
                    if path.is_file() {
                        entries.push(path);
                    }
                }
                entries.sort();
                files.extend(entries);
            } else {
                return Err(ExtractionError::InvalidPath(format!(
                    "{} is neither a file nor a directory",
                    input.display()
                )));
            }
        }

        Ok(files)
    }

    /// Map every file to its observations on a bounded worker pool.
    /// Results come back in input-file order regardless of which worker
    /// finished first.
    pub fn map_files(
        &self,
        files: &[PathBuf],
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<FileExtraction>> {
        let processed_count = Arc::new(AtomicUsize::new(0));

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.max_workers)
            .build()
            .map_err(|e| ExtractionError::Config(e.to_string()))?;

        pool.install(|| {
            files
                .par_iter()
                .map(|path| {
                    let reader = RecordReader::with_mmap(self.use_mmap);
                    let result = reader.read_observations(path);

                    if let Ok(ref extraction) = result {
                        debug!(
                            file = %path.display(),
                            accepted = extraction.report.accepted,
                            discarded = extraction.report.discarded(),
                            "mapped record file"
                        );
                    }

                    let count = processed_count.fetch_add(1, Ordering::Relaxed) + 1;
                    if let Some(p) = progress {
                        p.update(count as u64);
                    }

                    result
                })
                .collect()
        })
    }
}

impl Default for ConcurrentReader {
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_record(year: &str, temperature: &str, quality: char) -> String {
        let mut line = String::with_capacity(93);
        line.push_str(&"0".repeat(15));
        line.push_str(year);
        line.push_str(&"9".repeat(68));
        line.push_str(temperature);
        line.push(quality);
        line
    }

    #[test]
    fn test_discovery_sorts_directory_entries() -> Result<()> {
        let dir = tempfile::TempDir::new()?;
        for name in ["b.dat", "a.dat", "c.dat"] {
            std::fs::File::create(dir.path().join(name))?;
        }

        let files = ConcurrentReader::discover_input_files(&[dir.path().to_path_buf()])?;
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.dat", "b.dat", "c.dat"]);

        Ok(())
    }

    #[test]
    fn test_discovery_rejects_missing_path() {
        let result =
            ConcurrentReader::discover_input_files(&[PathBuf::from("/no/such/path/anywhere")]);
        assert!(matches!(result, Err(ExtractionError::InvalidPath(_))));
    }

    #[test]
    fn test_map_files_preserves_file_order() -> Result<()> {
        let dir = tempfile::TempDir::new()?;

        let first = dir.path().join("1901.dat");
        let mut f = std::fs::File::create(&first)?;
        writeln!(f, "{}", sample_record("1901", "+0010", '1'))?;

        let second = dir.path().join("1902.dat");
        let mut f = std::fs::File::create(&second)?;
        writeln!(f, "{}", sample_record("1902", "-0010", '1'))?;

        let reader = ConcurrentReader::new(4);
        let extractions = reader.map_files(&[first, second], None)?;

        assert_eq!(extractions.len(), 2);
        assert_eq!(extractions[0].observations[0].year, "1901");
        assert_eq!(extractions[1].observations[0].year, "1902");

        Ok(())
    }
}
