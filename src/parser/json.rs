//! Reader for the JSON projection emitted by the `json` renderer.

use crate::model::Document;
use anyhow::{Context, Result};

/// Deserialize and validate a Document.
pub fn parse(input: &str) -> Result<Document> {
    serde_json::from_str(input).context("failed to parse JSON document")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_projection() {
        let input = r#"{
  "sections": [
    {
      "heading": "Core Differences",
      "level": 1,
      "entries": [{ "label": "Model", "body": "A vs B" }]
    }
  ]
}"#;
        let doc = parse(input).unwrap();
        assert_eq!(doc.sections()[0].heading(), "Core Differences");
        assert_eq!(doc.sections()[0].entries()[0].body(), "A vs B");
    }

    #[test]
    fn rejects_invariant_violation() {
        let input = r#"{"sections":[
            {"heading":"A","level":1,"entries":[{"label":"x","body":"1"}]},
            {"heading":"A","level":2,"entries":[{"label":"y","body":"2"}]}
        ]}"#;
        let err = parse(input).unwrap_err();
        assert!(format!("{:#}", err).contains("duplicate section heading: A"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(parse("{ not json").is_err());
    }
}
