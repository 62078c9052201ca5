//! Style mapping between semantic resume labels and DOCX style identifiers.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Mapping from the fixed set of semantic resume labels to style identifiers.
///
/// Styles are referenced by their OOXML `w:styleId`, the value that
/// `w:pStyle`/`w:tblStyle` elements point at. Detection is best-effort, so
/// every entry is optional; consumers fall back to built-in styles when an
/// entry is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleMap {
    /// Style of the candidate name line (first paragraph).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Style of the job title line (second paragraph).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    /// Style of the contact line (third paragraph).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    /// Style of section headings (detected via the section marker).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_heading: Option<String>,
    /// Style of job entry lines (detected via the job marker).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_entry: Option<String>,
    /// Style of the skills table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills_table: Option<String>,
}

impl StyleMap {
    /// Loads a style mapping from a JSON file.
    ///
    /// A missing file maps to [`Error::StyleMapMissing`] so callers can tell
    /// the user to run the analyze step first.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::StyleMapMissing(path.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Saves the style mapping to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Returns the present entries as `(label, style)` pairs, in a fixed order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("name", &self.name),
            ("job_title", &self.job_title),
            ("contact", &self.contact),
            ("section_heading", &self.section_heading),
            ("job_entry", &self.job_entry),
            ("skills_table", &self.skills_table),
        ]
        .into_iter()
        .filter_map(|(label, style)| style.as_deref().map(|s| (label, s)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> StyleMap {
        StyleMap {
            name: Some("CvName".to_string()),
            job_title: Some("CvTitle".to_string()),
            contact: Some("CvContact".to_string()),
            section_heading: Some("Heading3".to_string()),
            job_entry: Some("CvJob".to_string()),
            skills_table: Some("SkillsGrid".to_string()),
        }
    }

    #[test]
    fn test_round_trip_preserves_all_entries() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("styles.json");

        let map = sample();
        map.save(&path).expect("save failed");
        let loaded = StyleMap::load(&path).expect("load failed");

        assert_eq!(map, loaded);
        assert_eq!(loaded.entries().len(), 6);
    }

    #[test]
    fn test_partial_map_serializes_only_present_keys() {
        let map = StyleMap {
            name: Some("CvName".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&map).expect("serialize failed");
        assert!(json.contains("name"));
        assert!(!json.contains("skills_table"));

        let loaded: StyleMap = serde_json::from_str(&json).expect("deserialize failed");
        assert_eq!(loaded.entries(), vec![("name", "CvName")]);
    }

    #[test]
    fn test_missing_file_is_a_dedicated_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nope.json");

        match StyleMap::load(&path) {
            Err(crate::Error::StyleMapMissing(p)) => assert_eq!(p, path),
            other => panic!("expected StyleMapMissing, got {:?}", other.map(|_| ())),
        }
    }
}
