use crate::models::Observation;

/// Turns one year's grouped temperatures into output lines.
///
/// Performs no filtering, deduplication, or aggregation; every value the
/// shuffle delivers becomes one line, in delivery order. All validation
/// has already happened at the parsing stage.
pub struct YearGrouper;

impl YearGrouper {
    pub fn new() -> Self {
        Self
    }

    /// Format a single output line: year as received, one ASCII space,
    /// the temperature in plain decimal (leading '-' only when negative).
    pub fn format_line(&self, year: &str, temperature: i32) -> String {
        format!("{} {}", year, temperature)
    }

    pub fn format_observation(&self, observation: &Observation) -> String {
        self.format_line(&observation.year, observation.temperature)
    }

    /// One line per temperature for a single year's group.
    pub fn emit(&self, year: &str, temperatures: &[i32]) -> Vec<String> {
        temperatures
            .iter()
            .map(|&temperature| self.format_line(year, temperature))
            .collect()
    }
}

impl Default for YearGrouper {
    fn default() -> Self {
        Self::new()
    }
}
