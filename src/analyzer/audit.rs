//! Manual-formatting audit over `Normal`-styled paragraphs.

use super::paragraph_text;
use crate::error::Result;
use crate::styles::{paragraph_style_id, NORMAL_PARAGRAPH_STYLE};
use docx_rust::document::{BodyContent, ParagraphContent, Run};
use docx_rust::styles::Styles;
use docx_rust::Docx;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Result of the manual-formatting audit.
#[derive(Debug, Default)]
pub struct AuditReport {
    /// Text of each `Normal` paragraph that carries direct formatting.
    pub flagged: Vec<String>,
}

impl AuditReport {
    /// Writes the report to a plain-text file, one flagged paragraph per line.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut out = String::from(
            "Audit report: paragraphs styled 'Normal' carrying manual formatting:\n\n",
        );
        for text in &self.flagged {
            out.push_str(&format!("- \"{}\"\n", text));
        }
        fs::write(path, out)?;
        Ok(())
    }
}

/// Scans the document for `Normal` paragraphs with direct run formatting.
///
/// A paragraph is flagged when any of its runs carries direct bold, direct
/// italic, or a forced font differing from the `Normal` style's font. When
/// the `Normal` style declares no font the font check is skipped.
pub fn audit_manual_formatting(docx: &Docx<'_>) -> AuditReport {
    let normal_font = normal_style_font(&docx.styles);
    if normal_font.is_none() {
        warn!("'Normal' style font not resolved; the font audit will be less precise");
    }

    let mut flagged = Vec::new();
    for content in &docx.document.body.content {
        let BodyContent::Paragraph(para) = content else {
            continue;
        };
        if paragraph_style_id(para) != NORMAL_PARAGRAPH_STYLE {
            continue;
        }

        let has_direct = para.content.iter().any(|pc| match pc {
            ParagraphContent::Run(run) => run_has_direct_formatting(run, normal_font),
            _ => false,
        });
        if has_direct {
            flagged.push(paragraph_text(para));
        }
    }

    AuditReport { flagged }
}

fn run_has_direct_formatting(run: &Run<'_>, normal_font: Option<&str>) -> bool {
    let Some(props) = &run.property else {
        return false;
    };

    let bold = props
        .bold
        .as_ref()
        .map(|b| b.value.unwrap_or(true))
        .unwrap_or(false);
    let italic = props
        .italics
        .as_ref()
        .map(|i| i.value.unwrap_or(true))
        .unwrap_or(false);

    let forced_font = match (normal_font, run_font(run)) {
        (Some(normal), Some(font)) => font != normal,
        _ => false,
    };

    bold || italic || forced_font
}

fn run_font<'a>(run: &'a Run<'_>) -> Option<&'a str> {
    run.property
        .as_ref()
        .and_then(|props| props.fonts.as_ref())
        .and_then(|fonts| fonts.ascii.as_deref())
}

fn normal_style_font<'a>(styles: &'a Styles<'_>) -> Option<&'a str> {
    styles
        .styles
        .iter()
        .find(|style| style.style_id.as_ref() == NORMAL_PARAGRAPH_STYLE)
        .and_then(|style| style.character.as_ref())
        .and_then(|character| character.fonts.as_ref())
        .and_then(|fonts| fonts.ascii.as_deref())
}
