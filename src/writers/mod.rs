pub mod text_writer;

pub use text_writer::{OutputFileInfo, TextWriter};
