pub mod concurrent_reader;
pub mod record_reader;

pub use concurrent_reader::ConcurrentReader;
pub use record_reader::{FileExtraction, RecordIterator, RecordReader};
