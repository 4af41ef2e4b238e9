//! Data model for labeled essays, independent of any input or output format.
//!
//! A [`Document`] is only ever built through [`Document::new`] (or the
//! parser), which enforces every invariant the renderers rely on. Once built
//! it is never mutated; transformations such as section filtering produce a
//! new value.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Complete parsed essay: an ordered, non-empty list of sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DocumentRepr")]
pub struct Document {
    sections: Vec<Section>,
}

/// A titled grouping of labeled entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    heading: String,
    /// Number of `#` markers, 1..=6
    level: u8,
    entries: Vec<Entry>,
}

/// A single label/body pair. Body lines are joined with `\n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    label: String,
    body: String,
}

/// Unchecked shape used while deserializing.
#[derive(Deserialize)]
struct DocumentRepr {
    sections: Vec<Section>,
}

impl TryFrom<DocumentRepr> for Document {
    type Error = ModelError;

    fn try_from(repr: DocumentRepr) -> Result<Self, Self::Error> {
        Document::new(repr.sections)
    }
}

impl Document {
    /// Build a document, checking that it is non-empty, that headings and
    /// labels are unique, and that every string can be written back as markup.
    pub fn new(sections: Vec<Section>) -> Result<Self, ModelError> {
        if sections.is_empty() {
            return Err(ModelError::NoSections);
        }

        let mut headings = HashSet::new();
        for section in &sections {
            section.validate()?;
            if !headings.insert(section.heading.as_str()) {
                return Err(ModelError::DuplicateHeading(section.heading.clone()));
            }
        }

        Ok(Self { sections })
    }

    /// Wrap sections the parser has already checked line by line.
    pub(crate) fn from_parsed(sections: Vec<Section>) -> Self {
        debug_assert!(Document::new(sections.clone()).is_ok());
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Look up a section by its exact heading.
    pub fn section(&self, heading: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.heading == heading)
    }

    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }
}

impl Section {
    pub fn new(heading: impl Into<String>, level: u8, entries: Vec<Entry>) -> Self {
        Self {
            heading: heading.into(),
            level,
            entries,
        }
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Look up an entry by its exact label.
    pub fn entry(&self, label: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.label == label)
    }

    fn validate(&self) -> Result<(), ModelError> {
        if !is_single_trimmed_line(&self.heading) {
            return Err(ModelError::InvalidHeading(self.heading.clone()));
        }
        if !(1..=6).contains(&self.level) {
            return Err(ModelError::InvalidLevel {
                heading: self.heading.clone(),
                level: self.level,
            });
        }
        if self.entries.is_empty() {
            return Err(ModelError::EmptySection(self.heading.clone()));
        }

        let mut labels = HashSet::new();
        for entry in &self.entries {
            entry.validate()?;
            if !labels.insert(entry.label.as_str()) {
                return Err(ModelError::DuplicateLabel {
                    heading: self.heading.clone(),
                    label: entry.label.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Entry {
    pub fn new(label: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            body: body.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn body_lines(&self) -> impl Iterator<Item = &str> {
        self.body.split('\n')
    }

    fn validate(&self) -> Result<(), ModelError> {
        if !is_single_trimmed_line(&self.label) || self.label.contains('*') {
            return Err(ModelError::InvalidLabel(self.label.clone()));
        }
        if self.body.is_empty() || !self.body_lines().all(is_single_trimmed_line) {
            return Err(ModelError::InvalidBody(self.label.clone()));
        }
        Ok(())
    }
}

/// Non-empty, no line breaks, no surrounding whitespace.
fn is_single_trimmed_line(s: &str) -> bool {
    !s.is_empty() && s.trim() == s && !s.contains('\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(heading: &str, entries: &[(&str, &str)]) -> Section {
        Section::new(
            heading,
            1,
            entries.iter().map(|(l, b)| Entry::new(*l, *b)).collect(),
        )
    }

    #[test]
    fn accepts_valid_document() {
        let doc = Document::new(vec![
            section("Core Differences", &[("Model", "A vs B"), ("State", "mutable\nvs immutable")]),
            section("Summary", &[("Imperative Strength", "direct")]),
        ])
        .unwrap();
        assert_eq!(doc.sections().len(), 2);
        assert_eq!(doc.entry_count(), 3);
        let state = doc.section("Core Differences").unwrap().entry("State").unwrap();
        assert_eq!(state.body_lines().collect::<Vec<_>>(), ["mutable", "vs immutable"]);
    }

    #[test]
    fn rejects_empty_document() {
        assert_eq!(Document::new(vec![]), Err(ModelError::NoSections));
    }

    #[test]
    fn rejects_duplicate_heading() {
        let err = Document::new(vec![section("A", &[("x", "1")]), section("A", &[("y", "2")])]);
        assert_eq!(err, Err(ModelError::DuplicateHeading("A".into())));
    }

    #[test]
    fn rejects_duplicate_label() {
        let err = Document::new(vec![section("A", &[("x", "1"), ("x", "2")])]);
        assert!(matches!(err, Err(ModelError::DuplicateLabel { .. })));
    }

    #[test]
    fn same_label_in_different_sections_is_fine() {
        let doc = Document::new(vec![section("A", &[("x", "1")]), section("B", &[("x", "2")])]);
        assert!(doc.is_ok());
    }

    #[test]
    fn rejects_section_without_entries() {
        let err = Document::new(vec![section("A", &[])]);
        assert_eq!(err, Err(ModelError::EmptySection("A".into())));
    }

    #[test]
    fn rejects_unrepresentable_strings() {
        assert!(matches!(
            Document::new(vec![section(" padded", &[("x", "1")])]),
            Err(ModelError::InvalidHeading(_))
        ));
        assert!(matches!(
            Document::new(vec![section("A", &[("*x*", "1")])]),
            Err(ModelError::InvalidLabel(_))
        ));
        assert!(matches!(
            Document::new(vec![section("A", &[("x", "one\n\ntwo")])]),
            Err(ModelError::InvalidBody(_))
        ));
        assert!(matches!(
            Document::new(vec![section("A", &[("x", "")])]),
            Err(ModelError::InvalidBody(_))
        ));
    }

    #[test]
    fn rejects_bad_level() {
        let err = Document::new(vec![Section::new("A", 7, vec![Entry::new("x", "1")])]);
        assert!(matches!(err, Err(ModelError::InvalidLevel { level: 7, .. })));
    }

    #[test]
    fn deserialize_validates() {
        let json = r#"{"sections":[{"heading":"A","level":1,"entries":[]}]}"#;
        let err = serde_json::from_str::<Document>(json).unwrap_err();
        assert!(err.to_string().contains("section has no entries"));
    }
}
