use crate::error::Result;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes extracted output lines as plain text.
///
/// The output sink contract: one line per record, exactly as formatted by
/// the grouping stage, with no quoting, escaping, or key column added.
pub struct TextWriter;

impl TextWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write all lines to a file, creating parent directories as needed.
    pub fn write_lines(&self, lines: &[String], path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(lines, &mut writer)?;
        writer.flush()?;

        Ok(())
    }

    /// Write all lines to any sink (used for stdout output).
    pub fn write_to<W: Write>(&self, lines: &[String], writer: &mut W) -> Result<()> {
        for line in lines {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }

    pub fn get_file_info(&self, path: &Path) -> Result<OutputFileInfo> {
        let metadata = std::fs::metadata(path)?;
        let reader = BufReader::new(File::open(path)?);

        let mut total_lines = 0usize;
        for line in reader.lines() {
            line?;
            total_lines += 1;
        }

        Ok(OutputFileInfo {
            path: path.to_path_buf(),
            total_lines,
            file_size_bytes: metadata.len(),
        })
    }

    pub fn read_sample_lines(&self, path: &Path, count: usize) -> Result<Vec<String>> {
        let reader = BufReader::new(File::open(path)?);
        let mut lines = Vec::with_capacity(count);

        for line in reader.lines().take(count) {
            lines.push(line?);
        }

        Ok(lines)
    }
}

impl Default for TextWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct OutputFileInfo {
    pub path: PathBuf,
    pub total_lines: usize,
    pub file_size_bytes: u64,
}

impl OutputFileInfo {
    pub fn summary(&self) -> String {
        format!(
            "Output file: {}\nLines: {}\nSize: {} bytes",
            self.path.display(),
            self.total_lines,
            self.file_size_bytes
        )
    }
}
