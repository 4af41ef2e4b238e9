//! labeldoc: parse, validate and render labeled-markup essays.
//!
//! ```
//! let doc = labeldoc::parse("# Core Differences\n*Model*: A vs B\n").unwrap();
//! assert_eq!(doc.sections()[0].entries()[0].body(), "A vs B");
//! assert_eq!(labeldoc::render(&doc), "# Core Differences\n*Model*: A vs B\n");
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod parser;
pub mod render;
pub mod toc;

pub use error::{MalformedInputError, ModelError, Reason};
pub use model::{Document, Entry, Section};

/// Parse labeled markup. See [`parser::markup::parse`].
pub fn parse(input: &str) -> Result<Document, MalformedInputError> {
    parser::markup::parse(input)
}

/// Render canonical labeled markup. See [`render::markup::render`].
pub fn render(doc: &Document) -> String {
    render::markup::render(doc)
}
