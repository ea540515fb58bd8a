pub mod record_parser;

pub use record_parser::{RecordParser, RejectReason};
