//! Section selection for `--section`.

use crate::model::{Document, Section};

/// Select sections by heading.
///
/// A plain filter (e.g. "Core Differences") keeps only matching sections;
/// several plain filters are OR-ed. A `!`-prefixed filter drops the section.
/// Returns `None` when nothing is left, since a Document cannot be empty.
pub fn select(doc: &Document, filters: &[String]) -> Option<Document> {
    if filters.is_empty() {
        return Some(doc.clone());
    }

    let (excluded, included): (Vec<&str>, Vec<&str>) = filters
        .iter()
        .map(String::as_str)
        .partition(|f| f.starts_with('!'));
    let excluded: Vec<&str> = excluded.iter().filter_map(|f| f.strip_prefix('!')).collect();

    let kept: Vec<Section> = doc
        .sections()
        .iter()
        .filter(|section| {
            let heading = section.heading();
            if excluded.contains(&heading) {
                return false;
            }
            included.is_empty() || included.contains(&heading)
        })
        .cloned()
        .collect();

    if kept.is_empty() {
        return None;
    }
    Document::new(kept).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::markup::parse;

    fn doc() -> Document {
        parse("# Core\n*a*: 1\n# Strengths\n*b*: 2\n# Weaknesses\n*c*: 3\n").unwrap()
    }

    fn headings(doc: &Document) -> Vec<&str> {
        doc.sections().iter().map(|s| s.heading()).collect()
    }

    fn filters(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_filters_keeps_everything() {
        let d = doc();
        assert_eq!(select(&d, &[]).unwrap(), d);
    }

    #[test]
    fn include_keeps_order() {
        let d = doc();
        let out = select(&d, &filters(&["Weaknesses", "Core"])).unwrap();
        assert_eq!(headings(&out), ["Core", "Weaknesses"]);
    }

    #[test]
    fn exclude() {
        let d = doc();
        let out = select(&d, &filters(&["!Strengths"])).unwrap();
        assert_eq!(headings(&out), ["Core", "Weaknesses"]);
    }

    #[test]
    fn exclude_wins_over_include() {
        let d = doc();
        let out = select(&d, &filters(&["Core", "Strengths", "!Core"])).unwrap();
        assert_eq!(headings(&out), ["Strengths"]);
    }

    #[test]
    fn nothing_left_is_none() {
        let d = doc();
        assert!(select(&d, &filters(&["Missing"])).is_none());
        assert!(select(&d, &filters(&["!Core", "!Strengths", "!Weaknesses"])).is_none());
    }

    #[test]
    fn input_is_untouched() {
        let d = doc();
        let before = d.clone();
        let _ = select(&d, &filters(&["Core"]));
        assert_eq!(d, before);
    }
}
