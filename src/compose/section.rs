//! Generic section composition: heading plus classified content lines.

use super::{push_paragraph, rich_text, ComposeContext};
use crate::markdown::{LineKind, Section};
use docx_rust::Docx;

/// Built-in style used for bullet lines.
pub const BULLET_STYLE: &str = "ListBullet";

/// Fallback style for section headings when none was mapped.
pub const SECTION_HEADING_FALLBACK: &str = "Heading3";

/// Appends a parsed section to the document: its heading first, then every
/// content line with the style its marker calls for.
pub fn compose_section<'a>(
    docx: &mut Docx<'a>,
    section: &Section,
    context: &mut ComposeContext<'_>,
) {
    if let Some(title) = &section.title {
        let style = context
            .styles()
            .section_heading
            .clone()
            .unwrap_or_else(|| SECTION_HEADING_FALLBACK.to_string());
        push_paragraph(docx, rich_text::plain_paragraph(title, Some(&style)));
    }

    let job_style = context.styles().job_entry.clone();
    for line in &section.lines {
        let style = match line.kind {
            LineKind::JobEntry => job_style.clone(),
            LineKind::Bullet => Some(BULLET_STYLE.to_string()),
            LineKind::Body => None,
        };
        push_paragraph(
            docx,
            rich_text::compose_line(&line.text, style.as_deref(), context),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::parse_section;
    use crate::style_map::StyleMap;
    use crate::styles::paragraph_style_id;
    use docx_rust::document::BodyContent;
    use pretty_assertions::assert_eq;

    fn paragraph_styles(docx: &Docx<'_>) -> Vec<String> {
        docx.document
            .body
            .content
            .iter()
            .filter_map(|content| match content {
                BodyContent::Paragraph(para) => Some(paragraph_style_id(para).to_string()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_section_lines_get_marker_driven_styles() {
        let styles = StyleMap {
            section_heading: Some("CvSection".to_string()),
            job_entry: Some("CvJob".to_string()),
            ..Default::default()
        };
        let mut context = ComposeContext::new(&styles, 1);
        let mut docx = Docx::default();

        let section =
            parse_section("### EXPERIENCE\n**Acme Corp** - Lead\n* Did things\nClosing note");
        compose_section(&mut docx, &section, &mut context);

        assert_eq!(
            paragraph_styles(&docx),
            vec!["CvSection", "CvJob", BULLET_STYLE, "Normal"]
        );
    }

    #[test]
    fn test_unmapped_heading_falls_back() {
        let styles = StyleMap::default();
        let mut context = ComposeContext::new(&styles, 1);
        let mut docx = Docx::default();

        compose_section(&mut docx, &parse_section("### PROFILE\ntext"), &mut context);

        assert_eq!(
            paragraph_styles(&docx),
            vec![SECTION_HEADING_FALLBACK, "Normal"]
        );
    }
}
