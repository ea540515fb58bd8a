use crate::error::{ExtractionError, Result};
use crate::writers::TextWriter;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug)]
pub struct OutputStatistics {
    pub total_lines: usize,
    pub malformed_lines: usize,
    pub years: Vec<YearSummary>,
}

#[derive(Debug)]
pub struct YearSummary {
    pub year: String,
    pub readings: usize,
    pub min_temperature: i32,
    pub max_temperature: i32,
    pub mean_temperature: f64,
}

impl OutputStatistics {
    pub fn detailed_summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("Output Analysis\n");
        summary.push_str("===============\n");
        summary.push_str(&format!("Lines analyzed: {}\n", self.total_lines));
        if self.malformed_lines > 0 {
            summary.push_str(&format!("Malformed lines: {}\n", self.malformed_lines));
        }
        summary.push_str(&format!("Years: {}\n\n", self.years.len()));

        for year in &self.years {
            summary.push_str(&format!(
                "{}: {} readings, min {:.1}°C, max {:.1}°C, mean {:.1}°C\n",
                year.year,
                year.readings,
                year.min_temperature as f64 / 10.0,
                year.max_temperature as f64 / 10.0,
                year.mean_temperature / 10.0,
            ));
        }

        summary
    }
}

/// Computes per-year statistics over an extracted output file of
/// `"<year> <temperature>"` lines.
pub struct YearAnalyzer;

impl YearAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze_file(&self, path: &Path) -> Result<OutputStatistics> {
        self.analyze_file_with_limit(path, 0) // Default to all lines
    }

    pub fn analyze_file_with_limit(&self, path: &Path, limit: usize) -> Result<OutputStatistics> {
        let writer = TextWriter::new();
        let file_info = writer.get_file_info(path)?;

        // 0 means analyze the whole file
        let lines_to_read = if limit == 0 {
            file_info.total_lines
        } else {
            limit.min(file_info.total_lines)
        };

        let lines = writer.read_sample_lines(path, lines_to_read)?;
        if lines.is_empty() {
            return Err(ExtractionError::Config(
                "No lines found in output file".to_string(),
            ));
        }

        Ok(self.calculate_statistics(&lines))
    }

    fn calculate_statistics(&self, lines: &[String]) -> OutputStatistics {
        struct Accumulator {
            readings: usize,
            min: i32,
            max: i32,
            sum: i64,
        }

        let mut by_year: HashMap<String, Accumulator> = HashMap::new();
        let mut malformed_lines = 0usize;

        for line in lines {
            match Self::parse_output_line(line) {
                Some((year, temperature)) => {
                    by_year
                        .entry(year.to_string())
                        .and_modify(|acc| {
                            acc.readings += 1;
                            acc.min = acc.min.min(temperature);
                            acc.max = acc.max.max(temperature);
                            acc.sum += i64::from(temperature);
                        })
                        .or_insert(Accumulator {
                            readings: 1,
                            min: temperature,
                            max: temperature,
                            sum: i64::from(temperature),
                        });
                }
                None => malformed_lines += 1,
            }
        }

        let mut years: Vec<YearSummary> = by_year
            .into_iter()
            .map(|(year, acc)| YearSummary {
                year,
                readings: acc.readings,
                min_temperature: acc.min,
                max_temperature: acc.max,
                mean_temperature: acc.sum as f64 / acc.readings as f64,
            })
            .collect();
        years.sort_by(|a, b| a.year.cmp(&b.year));

        OutputStatistics {
            total_lines: lines.len(),
            malformed_lines,
            years,
        }
    }

    fn parse_output_line(line: &str) -> Option<(&str, i32)> {
        let (year, temperature) = line.split_once(' ')?;
        if year.is_empty() {
            return None;
        }
        let temperature = temperature.parse().ok()?;
        Some((year, temperature))
    }
}

impl Default for YearAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_per_year_statistics() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "1950 100")?;
        writeln!(file, "1950 -20")?;
        writeln!(file, "1949 5")?;

        let analyzer = YearAnalyzer::new();
        let stats = analyzer.analyze_file(file.path())?;

        assert_eq!(stats.total_lines, 3);
        assert_eq!(stats.malformed_lines, 0);
        assert_eq!(stats.years.len(), 2);

        // Sorted by year
        assert_eq!(stats.years[0].year, "1949");
        let y1950 = &stats.years[1];
        assert_eq!(y1950.readings, 2);
        assert_eq!(y1950.min_temperature, -20);
        assert_eq!(y1950.max_temperature, 100);
        assert_eq!(y1950.mean_temperature, 40.0);

        Ok(())
    }

    #[test]
    fn test_malformed_lines_counted() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "1950 100")?;
        writeln!(file, "not an output line")?;
        writeln!(file, " 42")?;

        let analyzer = YearAnalyzer::new();
        let stats = analyzer.analyze_file(file.path())?;

        assert_eq!(stats.malformed_lines, 2);
        assert_eq!(stats.years.len(), 1);

        Ok(())
    }

    #[test]
    fn test_analysis_limit() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        for i in 0..10 {
            writeln!(file, "1950 {}", i)?;
        }

        let analyzer = YearAnalyzer::new();
        let stats = analyzer.analyze_file_with_limit(file.path(), 3)?;
        assert_eq!(stats.total_lines, 3);
        assert_eq!(stats.years[0].readings, 3);

        Ok(())
    }

    #[test]
    fn test_empty_file_is_an_error() -> Result<()> {
        let file = NamedTempFile::new()?;
        let analyzer = YearAnalyzer::new();
        assert!(analyzer.analyze_file(file.path()).is_err());
        Ok(())
    }
}
