//! Page markup: logos tokenizer, tree builder, and a writer that puts
//! class changes back into the source.

pub mod parser;
pub mod tokenizer;
pub mod writer;

pub use parser::{parse_document, MarkupError, DOCUMENT_TAG};
pub use writer::write_classes;
