pub mod year_analyzer;

pub use year_analyzer::{OutputStatistics, YearAnalyzer, YearSummary};
