//! Renderer module: trait-based format dispatch.

pub mod html;
pub mod json;
pub mod markdown;
pub mod markup;
pub mod text;

use crate::config::Config;
use crate::model::Document;
use anyhow::{anyhow, Result};

/// Trait for rendering a Document into a specific output format.
pub trait Renderer {
    fn render(&self, doc: &Document) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str, config: &Config) -> Result<Box<dyn Renderer>> {
    match format {
        "markup" => Ok(Box::new(markup::MarkupRenderer)),
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "html" => Ok(Box::new(html::HtmlRenderer::new(&config.html))),
        "json" => Ok(Box::new(json::JsonRenderer)),
        "text" | "txt" => Ok(Box::new(text::TextRenderer::new(config.text.width))),
        _ => Err(anyhow!(
            "unknown format: {}. Use markup, markdown, html, json, or text",
            format
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_formats() {
        let config = Config::default();
        for (name, ext) in [
            ("markup", "ldoc"),
            ("markdown", "md"),
            ("md", "md"),
            ("html", "html"),
            ("json", "json"),
            ("text", "txt"),
        ] {
            let renderer = create_renderer(name, &config).unwrap();
            assert_eq!(renderer.file_extension(), ext, "format {}", name);
        }
    }

    #[test]
    fn unknown_format() {
        let err = create_renderer("xml", &Config::default()).err().unwrap();
        assert!(err.to_string().starts_with("unknown format: xml"));
    }
}
