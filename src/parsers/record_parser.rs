use crate::models::{Observation, QualityCode};
use crate::utils::constants::{
    MIN_RECORD_LEN, MISSING_TEMPERATURE, QUALITY_INDEX, TEMPERATURE_FIELD, YEAR_FIELD,
};

/// Why a raw record was discarded instead of yielding an [`Observation`].
///
/// Every anomaly is recoverable by skipping the record; none of these ever
/// propagate to the caller. The classification exists for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// Record shorter than the minimum parseable length
    TooShort,
    /// Temperature field empty or whitespace-only
    BlankTemperature,
    /// Temperature field not parseable as a signed integer
    MalformedTemperature,
    /// Temperature carries the "no reading available" sentinel
    MissingSentinel,
    /// Quality code outside the accepted set
    RejectedQuality,
}

impl RejectReason {
    pub fn label(&self) -> &'static str {
        match self {
            RejectReason::TooShort => "record too short",
            RejectReason::BlankTemperature => "blank temperature field",
            RejectReason::MalformedTemperature => "malformed temperature field",
            RejectReason::MissingSentinel => "missing-value sentinel",
            RejectReason::RejectedQuality => "rejected quality code",
        }
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Decodes one fixed-width station record into a filtered observation.
///
/// Stateless and side-effect free: each call consumes one line and yields
/// at most one observation, so instances can run on any number of threads
/// over disjoint shards of the input.
pub struct RecordParser;

impl RecordParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse one record line, silently dropping anything unusable.
    pub fn parse(&self, line: &str) -> Option<Observation> {
        self.parse_checked(line).ok()
    }

    /// Parse one record line, classifying the discard on failure.
    pub fn parse_checked(&self, line: &str) -> Result<Observation, RejectReason> {
        if line.len() < MIN_RECORD_LEN {
            return Err(RejectReason::TooShort);
        }

        // Field offsets are byte positions. A slice that lands inside a
        // multi-byte character means the record is not fixed-width ASCII,
        // which makes it structurally unusable.
        let raw_temp = line
            .get(TEMPERATURE_FIELD)
            .ok_or(RejectReason::TooShort)?;

        // Positive readings carry an explicit '+'; strip exactly one.
        // A leading '-' is left for the integer parse to consume.
        let raw_temp = raw_temp.strip_prefix('+').unwrap_or(raw_temp);

        let trimmed = raw_temp.trim();
        if trimmed.is_empty() {
            return Err(RejectReason::BlankTemperature);
        }

        let temperature: i32 = trimmed
            .parse()
            .map_err(|_| RejectReason::MalformedTemperature)?;

        if temperature == MISSING_TEMPERATURE {
            return Err(RejectReason::MissingSentinel);
        }

        let quality = QualityCode::from_char(line.as_bytes()[QUALITY_INDEX] as char);
        if !quality.is_acceptable() {
            return Err(RejectReason::RejectedQuality);
        }

        let year = line.get(YEAR_FIELD).ok_or(RejectReason::TooShort)?;
        Ok(Observation::new(year.to_string(), temperature))
    }
}

impl Default for RecordParser {
    fn default() -> Self {
        Self::new()
    }
}
