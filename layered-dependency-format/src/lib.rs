#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Reading and writing dependency trees as delimited columns.
//!
//! A [`FormatConfig`] picks a [`ColumnLayout`](layered_dependency::ColumnLayout)
//! and its delimiters. [`ColumnWriter`] renders trees with it and
//! [`ColumnReader`] parses the same text back.
//!
//! ```
//! use layered_dependency::ColumnLayout;
//! use layered_dependency_format::{ColumnReader, ColumnWriter, FormatConfig};
//!
//! let config = FormatConfig::new(ColumnLayout::Dep);
//! let text = "1\tdogs\tdog\tNNS\t_\t2\tnsubj\n2\tbark\tbark\tVBP\t_\t0\troot";
//!
//! let tree = ColumnReader::new(config.clone()).read_sentence(text).unwrap();
//! assert_eq!(ColumnWriter::new(config).write_sentence(&tree), text);
//! ```

mod config;
mod errors;
mod reader;
mod writer;

pub use config::FormatConfig;
pub use errors::{FormatError, FormatResult};
pub use reader::ColumnReader;
pub use writer::ColumnWriter;

#[cfg(test)]
mod tests;
