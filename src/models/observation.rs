use serde::{Deserialize, Serialize};
use validator::Validate;

/// A filtered (year, temperature) reading extracted from one raw record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Observation {
    /// Four-character year exactly as it appears in the source record,
    /// never normalized to an integer.
    #[validate(length(equal = 4))]
    pub year: String,

    /// Temperature in tenths of a degree Celsius.
    pub temperature: i32,
}

impl Observation {
    pub fn new(year: String, temperature: i32) -> Self {
        Self { year, temperature }
    }

    /// Key under which the grouping stage collects this observation.
    pub fn grouping_key(&self) -> &str {
        &self.year
    }

    pub fn has_numeric_year(&self) -> bool {
        self.year.len() == 4 && self.year.bytes().all(|b| b.is_ascii_digit())
    }
}
