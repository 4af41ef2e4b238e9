//! Labeled-markup parser: line-by-line state machine.
//!
//! ```text
//! # Core Differences
//! *Model*: Imperative describes how, functional describes what.
//! *State*: Imperative code mutates shared variables;
//!   functional code threads immutable values.
//! ```
//!
//! Headings (`#` to `######` at column 0) open a section, `*Label*:` lines
//! open an entry, and any other non-blank line continues the open entry.

use crate::error::{MalformedInputError, Reason};
use crate::model::{Document, Entry, Section};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

static RE_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})[[:blank:]]+(\S.*)$").unwrap());

static RE_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*[[:blank:]]*([^*\s][^*]*?)[[:blank:]]*\*:(.*)$").unwrap());

// -- Parser state -------------------------------------------------------------

#[derive(Default)]
struct ParserState {
    sections: Vec<Section>,
    headings: HashSet<String>,
    current: Option<OpenSection>,
}

struct OpenSection {
    heading: String,
    level: u8,
    line: usize,
    entries: Vec<Entry>,
    labels: HashSet<String>,
    entry: Option<OpenEntry>,
}

struct OpenEntry {
    label: String,
    line: usize,
    body: Vec<String>,
}

// -- Public API ---------------------------------------------------------------

/// Parse labeled markup into a Document.
///
/// Lines are numbered from 1; an input with no content at all is reported
/// at line 0. The first problem in line order is returned. Empty sections
/// and empty bodies are only known once the section or entry closes, so text
/// directly under a heading is reported as stray text on its own line.
pub fn parse(input: &str) -> Result<Document, MalformedInputError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut state = ParserState::default();

    for (idx, line) in input.lines().enumerate() {
        process_line(&mut state, idx + 1, line)?;
    }

    close_section(&mut state)?;
    if state.sections.is_empty() {
        return Err(MalformedInputError::new(0, Reason::EmptyInput));
    }
    Ok(Document::from_parsed(state.sections))
}

// -- Line processing ----------------------------------------------------------

fn process_line(s: &mut ParserState, lineno: usize, line: &str) -> Result<(), MalformedInputError> {
    if line.trim().is_empty() {
        return Ok(());
    }

    // 1. Section heading
    if let Some(caps) = RE_HEADING.captures(line) {
        close_section(s)?;
        let heading = caps[2].trim_end().to_string();
        if !s.headings.insert(heading.clone()) {
            return Err(MalformedInputError::new(
                lineno,
                Reason::DuplicateHeading(heading),
            ));
        }
        s.current = Some(OpenSection {
            heading,
            level: caps[1].len() as u8,
            line: lineno,
            entries: Vec::new(),
            labels: HashSet::new(),
            entry: None,
        });
        return Ok(());
    }

    // 2. Labeled entry
    if let Some(caps) = RE_ENTRY.captures(line) {
        let Some(section) = s.current.as_mut() else {
            return Err(MalformedInputError::new(lineno, Reason::OrphanEntry));
        };
        close_entry(section)?;
        let label = caps[1].trim().to_string();
        if !section.labels.insert(label.clone()) {
            return Err(MalformedInputError::new(lineno, Reason::DuplicateLabel(label)));
        }
        let first = caps[2].trim();
        section.entry = Some(OpenEntry {
            label,
            line: lineno,
            body: if first.is_empty() {
                Vec::new()
            } else {
                vec![first.to_string()]
            },
        });
        return Ok(());
    }

    // 3. Continuation of the open entry
    match s.current.as_mut().and_then(|sec| sec.entry.as_mut()) {
        Some(entry) => {
            entry.body.push(line.trim().to_string());
            Ok(())
        }
        None => Err(MalformedInputError::new(lineno, Reason::StrayText)),
    }
}

// -- Helper functions ---------------------------------------------------------

/// Finish the open entry, if any, and append it to its section.
fn close_entry(section: &mut OpenSection) -> Result<(), MalformedInputError> {
    let Some(entry) = section.entry.take() else {
        return Ok(());
    };
    if entry.body.is_empty() {
        return Err(MalformedInputError::new(entry.line, Reason::EmptyBody(entry.label)));
    }
    section.entries.push(Entry::new(entry.label, entry.body.join("\n")));
    Ok(())
}

/// Finish the open section, if any, and append it to the results.
fn close_section(s: &mut ParserState) -> Result<(), MalformedInputError> {
    let Some(mut section) = s.current.take() else {
        return Ok(());
    };
    close_entry(&mut section)?;
    if section.entries.is_empty() {
        return Err(MalformedInputError::new(
            section.line,
            Reason::EmptySection(section.heading),
        ));
    }
    s.sections
        .push(Section::new(section.heading, section.level, section.entries));
    Ok(())
}
