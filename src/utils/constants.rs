use std::ops::Range;

/// Field byte offsets within a fixed-width station record (0-indexed, end-exclusive)
pub const YEAR_FIELD: Range<usize> = 15..19;
pub const TEMPERATURE_FIELD: Range<usize> = 87..92;
pub const QUALITY_INDEX: usize = 92;

/// Shortest record able to hold all required fields
pub const MIN_RECORD_LEN: usize = 93;

/// Temperature value reserved for "no reading available" (tenths of a degree)
pub const MISSING_TEMPERATURE: i32 = 9999;

/// Quality codes acceptable for extraction
pub const ACCEPTED_QUALITY_CODES: [char; 5] = ['0', '1', '4', '5', '9'];

/// Gross plausibility bounds for audit reporting, in tenths of a degree.
/// Readings outside these are flagged, never filtered.
pub const MIN_PLAUSIBLE_TEMP: i32 = -900;
pub const MAX_PLAUSIBLE_TEMP: i32 = 700;

/// Processing defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB
