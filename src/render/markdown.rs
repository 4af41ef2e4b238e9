//! GitHub-flavored markdown renderer.
//!
//! Produces a readable page with an index of sections; unlike the markup
//! renderer this output is not meant to be parsed again.

use crate::model::*;
use crate::render::Renderer;
use crate::toc;
use anyhow::Result;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        let mut output = String::new();
        let anchors = toc::anchors(doc);

        // Table of contents
        output.push_str("## Index\n\n");
        for (section, anchor) in doc.sections().iter().zip(&anchors) {
            output.push_str(&toc::render_toc_item(&escape_markdown(section.heading()), anchor));
            output.push('\n');
        }
        output.push('\n');

        for section in doc.sections() {
            output.push_str(&render_section(section));
            output.push('\n');
        }

        Ok(output)
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// Render one section: heading followed by a bullet per entry.
fn render_section(section: &Section) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "{} {}\n",
        "#".repeat(usize::from(section.level())),
        escape_markdown(section.heading())
    ));

    for entry in section.entries() {
        // Indent additional lines for markdown list
        let body = entry
            .body_lines()
            .map(escape_markdown)
            .collect::<Vec<_>>()
            .join("\n  ");
        lines.push(format!("* **{}**: {}", escape_markdown(entry.label()), body));
    }
    lines.push(String::new());

    lines.join("\n")
}

/// Backslash-escape characters markdown would read as emphasis, code spans,
/// links or inline HTML.
fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '`' | '*' | '_' | '<' | '>' | '[' | ']') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
