//! Parser module: dispatch by file extension.

pub mod json;
pub mod markup;

use crate::model::Document;
use anyhow::{anyhow, Context, Result};
use std::path::Path;

/// Input syntaxes a Document can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    Markup,
    Json,
}

impl InputFormat {
    /// Pick an input format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("ldoc" | "md" | "markdown" | "txt") => Ok(Self::Markup),
            Some("json") => Ok(Self::Json),
            _ => Err(anyhow!("unsupported file type: {}", path.display())),
        }
    }
}

/// Parse `content` in the given format. `source` names the input in errors.
pub fn parse_as(format: InputFormat, source: &str, content: &str) -> Result<Document> {
    match format {
        InputFormat::Markup => {
            markup::parse(content).map_err(|e| anyhow!("{}:{}: {}", source, e.line, e.reason))
        }
        InputFormat::Json => json::parse(content).with_context(|| format!("{}: invalid document", source)),
    }
}

/// Parse a source file into a Document based on its extension.
pub fn parse_file(path: &Path, content: &str) -> Result<Document> {
    let format = InputFormat::from_path(path)?;
    parse_as(format, &path.display().to_string(), content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_by_extension() {
        assert_eq!(InputFormat::from_path(Path::new("essay.ldoc")).unwrap(), InputFormat::Markup);
        assert_eq!(InputFormat::from_path(Path::new("essay.md")).unwrap(), InputFormat::Markup);
        assert_eq!(InputFormat::from_path(Path::new("essay.json")).unwrap(), InputFormat::Json);
    }

    #[test]
    fn unsupported_extension() {
        let err = InputFormat::from_path(Path::new("essay.rs")).unwrap_err();
        assert!(err.to_string().contains("unsupported file type"));
    }

    #[test]
    fn markup_errors_name_source_and_line() {
        let err = parse_file(Path::new("essay.ldoc"), "# A\n*x*: 1\n# A\n*y*: 2\n").unwrap_err();
        assert_eq!(err.to_string(), "essay.ldoc:3: duplicate section heading: A");
    }
}
