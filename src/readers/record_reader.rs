use crate::error::{ExtractionError, Result};
use crate::models::Observation;
use crate::parsers::RecordParser;
use crate::processors::ExtractionReport;
use crate::utils::constants::DEFAULT_BUFFER_SIZE;
use memmap2::Mmap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// The mapped output of one record file: accepted observations in input
/// order, plus the accounting of everything that was discarded.
#[derive(Debug, Default)]
pub struct FileExtraction {
    pub observations: Vec<Observation>,
    pub report: ExtractionReport,
}

/// Reads fixed-width station record files line by line.
pub struct RecordReader {
    use_mmap: bool,
}

impl RecordReader {
    pub fn new() -> Self {
        Self { use_mmap: false }
    }

    pub fn with_mmap(use_mmap: bool) -> Self {
        Self { use_mmap }
    }

    /// Parse every record in a file. Malformed records are counted and
    /// skipped; only I/O-level failures surface as errors.
    pub fn read_observations(&self, path: &Path) -> Result<FileExtraction> {
        if self.use_mmap {
            self.read_observations_mmap(path)
        } else {
            self.read_observations_buffered(path)
        }
    }

    fn read_observations_buffered(&self, path: &Path) -> Result<FileExtraction> {
        let file = File::open(path)?;
        let reader = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let parser = RecordParser::new();
        let mut extraction = FileExtraction::default();

        for line_result in reader.lines() {
            let line = line_result?;
            Self::consume_line(&parser, &line, &mut extraction);
        }

        Ok(extraction)
    }

    /// Memory-mapped variant for large files.
    fn read_observations_mmap(&self, path: &Path) -> Result<FileExtraction> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        let content = std::str::from_utf8(&mmap)
            .map_err(|e| ExtractionError::InvalidFormat(format!("Invalid UTF-8: {}", e)))?;

        let parser = RecordParser::new();
        let mut extraction = FileExtraction::default();

        for line in content.lines() {
            Self::consume_line(&parser, line, &mut extraction);
        }

        Ok(extraction)
    }

    fn consume_line(parser: &RecordParser, line: &str, extraction: &mut FileExtraction) {
        match parser.parse_checked(line) {
            Ok(observation) => {
                extraction.report.record_acceptance(&observation);
                extraction.observations.push(observation);
            }
            Err(reason) => extraction.report.record_rejection(reason),
        }
    }

    /// Stream raw record lines without parsing (memory efficient for
    /// arbitrarily large files).
    pub fn stream_records(&self, path: &Path) -> Result<RecordIterator> {
        RecordIterator::new(path)
    }
}

impl Default for RecordReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the raw lines of one record file.
pub struct RecordIterator {
    reader: BufReader<File>,
}

impl RecordIterator {
    fn new(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file);
        Ok(Self { reader })
    }
}

impl Iterator for RecordIterator {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None, // EOF
            Ok(_) => {
                while line.ends_with('\n') || line.ends_with('\r') {
                    line.pop();
                }
                Some(Ok(line))
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

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
    fn test_read_observations() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "{}", sample_record("1950", "+0100", '1'))?;
        writeln!(temp_file, "{}", sample_record("1950", "-0020", '0'))?;
        writeln!(temp_file, "{}", sample_record("1950", "+9999", '1'))?; // Missing data
        writeln!(temp_file, "too short")?;

        let reader = RecordReader::new();
        let extraction = reader.read_observations(temp_file.path())?;

        assert_eq!(extraction.observations.len(), 2);
        assert_eq!(extraction.observations[0].temperature, 100);
        assert_eq!(extraction.observations[1].temperature, -20);
        assert_eq!(extraction.report.lines_read, 4);
        assert_eq!(extraction.report.missing_sentinel, 1);
        assert_eq!(extraction.report.too_short, 1);

        Ok(())
    }

    #[test]
    fn test_mmap_and_buffered_agree() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "{}", sample_record("1949", "-0050", '5'))?;
        writeln!(temp_file, "{}", sample_record("1950", "+0078", '1'))?;

        let buffered = RecordReader::new().read_observations(temp_file.path())?;
        let mapped = RecordReader::with_mmap(true).read_observations(temp_file.path())?;

        assert_eq!(buffered.observations, mapped.observations);
        assert_eq!(buffered.report.lines_read, mapped.report.lines_read);

        Ok(())
    }

    #[test]
    fn test_stream_records_strips_line_endings() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        write!(temp_file, "{}\r\n{}\n", "first", "second")?;

        let reader = RecordReader::new();
        let lines: Result<Vec<String>> = reader.stream_records(temp_file.path())?.collect();
        let lines = lines?;

        assert_eq!(lines, vec!["first".to_string(), "second".to_string()]);

        Ok(())
    }
}
