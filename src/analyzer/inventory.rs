//! Style inventory listing for a document.

use crate::error::{Error, Result};
use docx_rust::{Docx, DocxFile};
use std::path::Path;

/// One style definition: identifier plus optional display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleEntry {
    pub id: String,
    pub name: Option<String>,
}

/// Lists every style defined in the document's styles part.
pub fn list_styles(docx: &Docx<'_>) -> Vec<StyleEntry> {
    docx.styles
        .styles
        .iter()
        .map(|style| StyleEntry {
            id: style.style_id.to_string(),
            name: style.name.as_ref().map(|name| name.value.to_string()),
        })
        .collect()
}

/// Opens a DOCX file and lists its style definitions.
pub fn inspect<P: AsRef<Path>>(path: P) -> Result<Vec<StyleEntry>> {
    let docx_file =
        DocxFile::from_file(path).map_err(|e| Error::DocxParse(format!("{:?}", e)))?;
    let docx = docx_file
        .parse()
        .map_err(|e| Error::DocxParse(format!("{:?}", e)))?;
    Ok(list_styles(&docx))
}
