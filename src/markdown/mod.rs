//! Markdown resume parsing.
//!
//! The resume source is treated as an unstructured line sequence split on
//! fixed delimiters: a three-line header, a skills section fenced by a
//! `###`-level heading and a `---` rule, and generic sections separated by
//! `---` rules. There is no grammar and no error recovery; unrecognized
//! content passes through as body text.

mod inline;

pub use inline::{parse_inline, InlineSpan};

use once_cell::sync::Lazy;
use regex::Regex;

/// Number of leading lines that form the resume header.
pub const HEADER_LINES: usize = 3;

/// One titled group of skills, filled into a single table column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: String,
    pub items: Vec<String>,
}

/// A generic resume section: optional heading plus classified content lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: Option<String>,
    pub lines: Vec<SectionLine>,
}

/// A single content line inside a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLine {
    pub kind: LineKind,
    pub text: String,
}

/// Classification of a section content line, derived from its leading marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `**`-prefixed line, a job entry.
    JobEntry,
    /// `*`-prefixed line, a list bullet (marker stripped from the text).
    Bullet,
    /// Anything else.
    Body,
}

static BULLET_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\*\s*").expect("bullet pattern"));

static SECTION_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^###\s*(.*)").expect("section title pattern"));

/// Returns the header lines (at most [`HEADER_LINES`]) of the resume.
pub fn header_lines(content: &str) -> Vec<&str> {
    content.lines().take(HEADER_LINES).collect()
}

/// Returns everything after the header, trimmed.
pub fn main_content(content: &str) -> String {
    let rest: Vec<&str> = content.lines().skip(HEADER_LINES).collect();
    rest.join("\n").trim().to_string()
}

/// Extracts the skills section and parses its groups.
///
/// The section is fenced by `### <heading>` and the next `---` rule; groups
/// are split on `#### ` subheadings and their items are `*` bullets. Returns
/// `None` when the heading is absent.
pub fn parse_skills(content: &str, heading: &str) -> Option<Vec<SkillGroup>> {
    let pattern = format!(r"###\s*{}[ \t]*\n([\s\S]*?)\n---", regex::escape(heading));
    let re = Regex::new(&pattern).expect("skills pattern");
    let captures = re.captures(content)?;
    let body = captures.get(1).map(|m| m.as_str().trim())?;

    let mut groups = Vec::new();
    for chunk in body.split("\n#### ") {
        let chunk = chunk.trim_start_matches("#### ");
        let mut lines = chunk.trim().lines();
        let title = lines.next().unwrap_or_default().trim().to_string();
        let items: Vec<String> = lines
            .filter(|line| !line.trim().is_empty())
            .map(|line| BULLET_MARKER.replace(line, "").trim().to_string())
            .collect();
        if !title.is_empty() && !items.is_empty() {
            groups.push(SkillGroup { title, items });
        }
    }

    Some(groups)
}

/// Splits the main content into section chunks on `---` rules.
pub fn split_sections(main: &str) -> Vec<&str> {
    main.split("\n---\n")
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect()
}

/// Whether a section chunk is the skills section (handled by the table path).
pub fn is_skills_section(section: &str, heading: &str) -> bool {
    SECTION_TITLE
        .captures(section.trim_start())
        .and_then(|caps| caps.get(1))
        .is_some_and(|title| title.as_str().trim().starts_with(heading))
}

/// Parses a generic section chunk into a title and classified lines.
pub fn parse_section(text: &str) -> Section {
    let text = text.trim();
    let mut lines = text.lines();

    let mut title = None;
    let mut rest: Vec<&str> = Vec::new();
    if let Some(first) = lines.next() {
        if let Some(caps) = SECTION_TITLE.captures(first) {
            title = Some(caps[1].trim().to_string());
        } else {
            rest.push(first);
        }
    }
    rest.extend(lines);

    let mut section_lines = Vec::new();
    for line in rest {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (kind, text) = if line.starts_with("**") {
            (LineKind::JobEntry, line.to_string())
        } else if line.starts_with('*') {
            (
                LineKind::Bullet,
                BULLET_MARKER.replace(line, "").trim().to_string(),
            )
        } else {
            (LineKind::Body, line.to_string())
        };
        section_lines.push(SectionLine { kind, text });
    }

    Section {
        title,
        lines: section_lines,
    }
}
