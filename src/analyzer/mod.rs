//! Source document analysis: formatting audit, style mapping, style inventory.

mod audit;
mod inventory;
mod mapping;

pub use audit::{audit_manual_formatting, AuditReport};
pub use inventory::{inspect, list_styles, StyleEntry};
pub use mapping::map_styles;

use crate::error::{Error, Result};
use crate::style_map::StyleMap;
use docx_rust::document::{Paragraph, ParagraphContent, Run, RunContent};
use docx_rust::DocxFile;
use std::path::PathBuf;
use tracing::info;

/// Options for the analyze step.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Source DOCX to analyze.
    pub source: PathBuf,
    /// Where to write the extracted style mapping.
    pub styles_out: PathBuf,
    /// Where to write the manual-formatting audit report.
    pub report_out: PathBuf,
    /// Case-insensitive substring identifying a section heading paragraph.
    pub section_marker: String,
    /// Substring identifying a job entry paragraph, when known.
    pub job_marker: Option<String>,
}

/// Analyzer that audits a source resume and extracts its style mapping.
pub struct DocxAnalyzer {
    options: AnalyzeOptions,
}

impl DocxAnalyzer {
    /// Creates a new analyzer with the given options.
    pub fn new(options: AnalyzeOptions) -> Self {
        Self { options }
    }

    /// Runs the audit and the style mapping, writing both artifacts.
    pub fn analyze(&self) -> Result<StyleMap> {
        let docx_file = DocxFile::from_file(&self.options.source)
            .map_err(|e| Error::DocxParse(format!("{:?}", e)))?;
        let docx = docx_file
            .parse()
            .map_err(|e| Error::DocxParse(format!("{:?}", e)))?;

        let report = audit_manual_formatting(&docx);
        report.write_to(&self.options.report_out)?;
        if report.flagged.is_empty() {
            info!("audit finished: no manual formatting found");
        } else {
            info!(
                flagged = report.flagged.len(),
                report = ?self.options.report_out,
                "audit finished: manual formatting found"
            );
        }

        let map = map_styles(
            &docx,
            &self.options.section_marker,
            self.options.job_marker.as_deref(),
        );
        for (label, style) in map.entries() {
            info!(label, style, "style mapped");
        }

        map.save(&self.options.styles_out)?;
        info!(path = ?self.options.styles_out, "style mapping saved");

        Ok(map)
    }
}

/// Collects the visible text of a paragraph, including hyperlink runs.
pub(crate) fn paragraph_text(para: &Paragraph<'_>) -> String {
    let mut text = String::new();
    for content in &para.content {
        match content {
            ParagraphContent::Run(run) => append_run_text(run, &mut text),
            ParagraphContent::Link(link) => {
                for run in &link.content {
                    append_run_text(run, &mut text);
                }
            }
            _ => {}
        }
    }
    text
}

fn append_run_text(run: &Run<'_>, out: &mut String) {
    for content in &run.content {
        match content {
            RunContent::Text(t) => out.push_str(&t.text),
            RunContent::Tab(_) => out.push('\t'),
            _ => {}
        }
    }
}
