pub mod converting;
pub mod document;
pub mod io;

// Re-export key types for easier usage
pub use converting::{ConversionContext, LineTransducer};
pub use document::{ConvertOptions, DocbookConverter, convert_files, convert_str};
pub use io::{IoError, read_file};
