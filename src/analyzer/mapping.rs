//! Style mapping extraction from the source resume.

use super::paragraph_text;
use crate::style_map::StyleMap;
use crate::styles::{effective_table_style, paragraph_style_id};
use docx_rust::document::{BodyContent, Paragraph, Table};
use docx_rust::Docx;
use tracing::{error, warn};

/// Extracts the style mapping from the document layout.
///
/// The first three paragraphs carry the header styles; section heading and
/// job entry styles are found by marker substrings; the skills table style
/// comes from the first table.
pub fn map_styles(docx: &Docx<'_>, section_marker: &str, job_marker: Option<&str>) -> StyleMap {
    let mut map = StyleMap::default();

    let paragraphs: Vec<&Paragraph<'_>> = docx
        .document
        .body
        .content
        .iter()
        .filter_map(|content| match content {
            BodyContent::Paragraph(para) => Some(para),
            _ => None,
        })
        .collect();

    if paragraphs.len() < 3 {
        error!("document has fewer than three paragraphs; header styles not mapped");
    } else {
        map.name = Some(paragraph_style_id(paragraphs[0]).to_string());
        map.job_title = Some(paragraph_style_id(paragraphs[1]).to_string());
        map.contact = Some(paragraph_style_id(paragraphs[2]).to_string());
    }

    let section_marker_upper = section_marker.to_uppercase();
    for para in &paragraphs {
        let text = paragraph_text(para);
        if text.to_uppercase().contains(&section_marker_upper) {
            map.section_heading = Some(paragraph_style_id(para).to_string());
        }
        if let Some(marker) = job_marker {
            if text.contains(marker) {
                map.job_entry = Some(paragraph_style_id(para).to_string());
            }
        }
    }
    if job_marker.is_none() {
        warn!("no job marker given; the job entry style will not be mapped");
    }

    let first_table: Option<&Table<'_>> =
        docx.document
            .body
            .content
            .iter()
            .find_map(|content| match content {
                BodyContent::Table(table) => Some(table),
                _ => None,
            });
    match first_table {
        Some(table) => map.skills_table = effective_table_style(table),
        None => warn!("document contains no table; the skills table style will not be mapped"),
    }

    map
}
