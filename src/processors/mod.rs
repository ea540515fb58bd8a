pub mod integrity_checker;
pub mod parallel_processor;
pub mod shuffle;
pub mod year_grouper;

pub use integrity_checker::{
    ExtractionReport, IntegrityChecker, ObservationViolation, ViolationType, YearStatistics,
};
pub use parallel_processor::ParallelExtractor;
pub use shuffle::YearShuffle;
pub use year_grouper::YearGrouper;
