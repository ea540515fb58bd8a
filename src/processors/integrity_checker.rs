use crate::models::Observation;
use crate::parsers::RejectReason;
use crate::utils::constants::{MAX_PLAUSIBLE_TEMP, MIN_PLAUSIBLE_TEMP};
use serde::Serialize;
use std::collections::HashMap;
use validator::Validate;

/// Accounting of one extraction pass: every input line lands in exactly
/// one bucket, either accepted or one of the discard classes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractionReport {
    pub lines_read: usize,
    pub accepted: usize,
    pub too_short: usize,
    pub blank_temperature: usize,
    pub malformed_temperature: usize,
    pub missing_sentinel: usize,
    pub rejected_quality: usize,
    pub year_statistics: HashMap<String, YearStatistics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct YearStatistics {
    pub readings: usize,
    pub min_temperature: i32,
    pub max_temperature: i32,
}

impl YearStatistics {
    fn from_reading(temperature: i32) -> Self {
        Self {
            readings: 1,
            min_temperature: temperature,
            max_temperature: temperature,
        }
    }

    fn add_reading(&mut self, temperature: i32) {
        self.readings += 1;
        self.min_temperature = self.min_temperature.min(temperature);
        self.max_temperature = self.max_temperature.max(temperature);
    }

    fn merge(&mut self, other: &YearStatistics) {
        self.readings += other.readings;
        self.min_temperature = self.min_temperature.min(other.min_temperature);
        self.max_temperature = self.max_temperature.max(other.max_temperature);
    }
}

impl ExtractionReport {
    pub fn record_acceptance(&mut self, observation: &Observation) {
        self.lines_read += 1;
        self.accepted += 1;
        self.year_statistics
            .entry(observation.year.clone())
            .and_modify(|stats| stats.add_reading(observation.temperature))
            .or_insert_with(|| YearStatistics::from_reading(observation.temperature));
    }

    pub fn record_rejection(&mut self, reason: RejectReason) {
        self.lines_read += 1;
        match reason {
            RejectReason::TooShort => self.too_short += 1,
            RejectReason::BlankTemperature => self.blank_temperature += 1,
            RejectReason::MalformedTemperature => self.malformed_temperature += 1,
            RejectReason::MissingSentinel => self.missing_sentinel += 1,
            RejectReason::RejectedQuality => self.rejected_quality += 1,
        }
    }

    pub fn discarded(&self) -> usize {
        self.lines_read - self.accepted
    }

    pub fn acceptance_rate(&self) -> f64 {
        if self.lines_read == 0 {
            0.0
        } else {
            (self.accepted as f64 / self.lines_read as f64) * 100.0
        }
    }

    /// Fold another report into this one (used to combine per-file passes).
    pub fn merge(&mut self, other: ExtractionReport) {
        self.lines_read += other.lines_read;
        self.accepted += other.accepted;
        self.too_short += other.too_short;
        self.blank_temperature += other.blank_temperature;
        self.malformed_temperature += other.malformed_temperature;
        self.missing_sentinel += other.missing_sentinel;
        self.rejected_quality += other.rejected_quality;

        for (year, stats) in other.year_statistics {
            self.year_statistics
                .entry(year)
                .and_modify(|existing| existing.merge(&stats))
                .or_insert(stats);
        }
    }
}

#[derive(Debug, Clone)]
pub struct ObservationViolation {
    pub year: String,
    pub temperature: i32,
    pub violation_type: ViolationType,
    pub details: String,
}

#[derive(Debug, Clone)]
pub enum ViolationType {
    NonNumericYear,
    ImplausibleTemperature,
    FieldValidation,
}

/// Audits accepted observations. Violations are reported, never filtered:
/// by the time data reaches this stage the parser has already applied
/// every filtering rule.
pub struct IntegrityChecker {
    strict: bool,
}

impl IntegrityChecker {
    pub fn new() -> Self {
        Self { strict: false }
    }

    pub fn with_strict_mode(strict: bool) -> Self {
        Self { strict }
    }

    pub fn check_observations(&self, observations: &[Observation]) -> Vec<ObservationViolation> {
        let mut violations = Vec::new();

        for observation in observations {
            if !observation.has_numeric_year() {
                violations.push(ObservationViolation {
                    year: observation.year.clone(),
                    temperature: observation.temperature,
                    violation_type: ViolationType::NonNumericYear,
                    details: format!("Year field '{}' is not 4 ASCII digits", observation.year),
                });
            }

            if observation.temperature < MIN_PLAUSIBLE_TEMP
                || observation.temperature > MAX_PLAUSIBLE_TEMP
            {
                violations.push(ObservationViolation {
                    year: observation.year.clone(),
                    temperature: observation.temperature,
                    violation_type: ViolationType::ImplausibleTemperature,
                    details: format!(
                        "Temperature {} outside plausible range [{}, {}] tenths",
                        observation.temperature, MIN_PLAUSIBLE_TEMP, MAX_PLAUSIBLE_TEMP
                    ),
                });
            }

            if self.strict {
                if let Err(errors) = observation.validate() {
                    violations.push(ObservationViolation {
                        year: observation.year.clone(),
                        temperature: observation.temperature,
                        violation_type: ViolationType::FieldValidation,
                        details: errors.to_string(),
                    });
                }
            }
        }

        violations
    }

    pub fn generate_summary(
        &self,
        report: &ExtractionReport,
        violations: &[ObservationViolation],
    ) -> String {
        let mut summary = String::new();

        summary.push_str("Extraction Summary\n");
        summary.push_str("==================\n");
        summary.push_str(&format!("Lines read:            {}\n", report.lines_read));
        summary.push_str(&format!(
            "Accepted:              {} ({:.1}%)\n",
            report.accepted,
            report.acceptance_rate()
        ));
        summary.push_str(&format!("Discarded:             {}\n", report.discarded()));
        summary.push_str(&format!("  too short:           {}\n", report.too_short));
        summary.push_str(&format!(
            "  blank temperature:   {}\n",
            report.blank_temperature
        ));
        summary.push_str(&format!(
            "  malformed number:    {}\n",
            report.malformed_temperature
        ));
        summary.push_str(&format!(
            "  missing sentinel:    {}\n",
            report.missing_sentinel
        ));
        summary.push_str(&format!(
            "  rejected quality:    {}\n",
            report.rejected_quality
        ));
        summary.push_str(&format!(
            "Years observed:        {}\n",
            report.year_statistics.len()
        ));

        if !violations.is_empty() {
            summary.push_str(&format!(
                "Audit flags:           {} (reported only, nothing removed)\n",
                violations.len()
            ));
            for violation in violations.iter().take(10) {
                summary.push_str(&format!("  - {}\n", violation.details));
            }
            if violations.len() > 10 {
                summary.push_str(&format!("  ... and {} more\n", violations.len() - 10));
            }
        }

        summary
    }
}

impl Default for IntegrityChecker {
    fn default() -> Self {
        Self::new()
    }
}
