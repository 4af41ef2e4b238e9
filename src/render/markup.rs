//! Canonical labeled-markup writer.
//!
//! Output re-parses to an equal Document: headings at column 0, one
//! `*Label*:` line per entry, further body lines indented by two spaces so
//! they can never be mistaken for a heading or an entry.

use crate::model::Document;
use crate::render::Renderer;
use anyhow::Result;

pub struct MarkupRenderer;

impl Renderer for MarkupRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        Ok(render(doc))
    }

    fn file_extension(&self) -> &str {
        "ldoc"
    }
}

/// Render a Document as canonical markup.
pub fn render(doc: &Document) -> String {
    let mut out = String::new();

    for (i, section) in doc.sections().iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&"#".repeat(usize::from(section.level())));
        out.push(' ');
        out.push_str(section.heading());
        out.push('\n');

        for entry in section.entries() {
            let mut lines = entry.body_lines();
            let first = lines.next().unwrap_or_default();
            out.push_str(&format!("*{}*: {}\n", entry.label(), first));
            for line in lines {
                out.push_str("  ");
                out.push_str(line);
                out.push('\n');
            }
        }
    }

    out
}
