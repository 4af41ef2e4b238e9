//! GitHub-flavored heading anchors and index links.

use crate::model::Document;
use std::collections::HashMap;

/// GitHub heading anchor slug generation.
///
/// - lowercase
/// - remove all chars that aren't alphanumeric, space, or hyphen
/// - replace spaces with hyphens
pub fn github_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}

/// One anchor per section, in order. Colliding slugs get `-1`, `-2`, ...
/// suffixes the way GitHub disambiguates repeated headings. A heading with
/// nothing to slug falls back to `section-N`, counting sections from 1.
pub fn anchors(doc: &Document) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut out = Vec::with_capacity(doc.sections().len());

    for (idx, section) in doc.sections().iter().enumerate() {
        let mut base = github_slug(section.heading());
        if base.is_empty() {
            base = format!("section-{}", idx + 1);
        }
        let mut candidate = base.clone();
        while let Some(count) = seen.get_mut(&candidate) {
            *count += 1;
            candidate = format!("{}-{}", base, count);
        }
        seen.insert(candidate.clone(), 0);
        out.push(candidate);
    }

    out
}

/// Generate a TOC list item pointing at an anchor.
pub fn render_toc_item(title: &str, anchor: &str) -> String {
    format!("* [{}](#{})", title, anchor)
}
