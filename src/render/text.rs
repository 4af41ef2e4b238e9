//! Plain-text renderer: underlined headings and word-wrapped bodies.

use crate::model::*;
use crate::render::Renderer;
use anyhow::Result;

/// Body text is indented by this many spaces under its label.
const BODY_INDENT: usize = 4;

pub struct TextRenderer {
    width: usize,
}

impl TextRenderer {
    pub fn new(width: usize) -> Self {
        Self { width }
    }
}

impl Renderer for TextRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        let blocks: Vec<String> = doc
            .sections()
            .iter()
            .map(|s| self.render_section(s))
            .collect();
        Ok(blocks.join("\n"))
    }

    fn file_extension(&self) -> &str {
        "txt"
    }
}

impl TextRenderer {
    fn render_section(&self, section: &Section) -> String {
        let mut out = String::new();
        let underline = if section.level() == 1 { '=' } else { '-' };

        out.push_str(section.heading());
        out.push('\n');
        out.extend(std::iter::repeat(underline).take(section.heading().chars().count()));
        out.push('\n');

        let indent = " ".repeat(BODY_INDENT);
        let avail = self.width.saturating_sub(BODY_INDENT).max(1);
        for entry in section.entries() {
            out.push('\n');
            out.push_str(entry.label());
            out.push('\n');
            for line in entry.body_lines() {
                for wrapped in wrap(line, avail) {
                    out.push_str(&indent);
                    out.push_str(&wrapped);
                    out.push('\n');
                }
            }
        }

        out
    }
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
