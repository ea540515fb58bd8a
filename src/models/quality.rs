use crate::utils::constants::ACCEPTED_QUALITY_CODES;

/// Per-observation quality flag from the ISD code space.
///
/// Codes 0/1/4/5/9 mark readings that passed quality control (4-7 are the
/// NCEI-sourced counterparts of 0-3); anything else is suspect, erroneous,
/// or unknown to this extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityCode {
    PassedGrossLimits,
    PassedAllChecks,
    Suspect,
    Erroneous,
    SourcePassedGrossLimits,
    SourcePassedAllChecks,
    SourceSuspect,
    SourceErroneous,
    PassedIfPresent,
    Unknown(char),
}

impl QualityCode {
    pub fn from_char(value: char) -> Self {
        match value {
            '0' => QualityCode::PassedGrossLimits,
            '1' => QualityCode::PassedAllChecks,
            '2' => QualityCode::Suspect,
            '3' => QualityCode::Erroneous,
            '4' => QualityCode::SourcePassedGrossLimits,
            '5' => QualityCode::SourcePassedAllChecks,
            '6' => QualityCode::SourceSuspect,
            '7' => QualityCode::SourceErroneous,
            '9' => QualityCode::PassedIfPresent,
            other => QualityCode::Unknown(other),
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            QualityCode::PassedGrossLimits => '0',
            QualityCode::PassedAllChecks => '1',
            QualityCode::Suspect => '2',
            QualityCode::Erroneous => '3',
            QualityCode::SourcePassedGrossLimits => '4',
            QualityCode::SourcePassedAllChecks => '5',
            QualityCode::SourceSuspect => '6',
            QualityCode::SourceErroneous => '7',
            QualityCode::PassedIfPresent => '9',
            QualityCode::Unknown(other) => *other,
        }
    }

    /// Whether a reading with this flag is usable for extraction.
    pub fn is_acceptable(&self) -> bool {
        ACCEPTED_QUALITY_CODES.contains(&self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_code_conversion() {
        assert_eq!(QualityCode::from_char('0'), QualityCode::PassedGrossLimits);
        assert_eq!(QualityCode::from_char('1'), QualityCode::PassedAllChecks);
        assert_eq!(QualityCode::from_char('9'), QualityCode::PassedIfPresent);
        assert_eq!(QualityCode::from_char('A'), QualityCode::Unknown('A'));
        assert_eq!(QualityCode::from_char('A').as_char(), 'A');
    }

    #[test]
    fn test_acceptable_set() {
        for code in ['0', '1', '4', '5', '9'] {
            assert!(QualityCode::from_char(code).is_acceptable());
        }
        for code in ['2', '3', '6', '7', '8', 'x', ' '] {
            assert!(!QualityCode::from_char(code).is_acceptable());
        }
    }
}
