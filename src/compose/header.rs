//! Resume header composition: name, job title, contact line.

use super::{push_paragraph, rich_text, ComposeContext};
use crate::markdown::{self, HEADER_LINES};
use docx_rust::Docx;
use tracing::{info, warn};

/// Appends the three header paragraphs to the document.
///
/// The first two lines are written verbatim with their mapped styles; the
/// contact line goes through inline rich-text expansion. A shorter header is
/// skipped with a warning.
pub fn compose_header<'a>(docx: &mut Docx<'a>, content: &str, context: &mut ComposeContext<'_>) {
    let lines = markdown::header_lines(content);
    if lines.len() < HEADER_LINES {
        warn!(
            expected = HEADER_LINES,
            found = lines.len(),
            "Markdown header is incomplete; skipping it"
        );
        return;
    }

    let name_style = context.styles().name.clone();
    let title_style = context.styles().job_title.clone();
    let contact_style = context.styles().contact.clone();

    push_paragraph(
        docx,
        rich_text::plain_paragraph(lines[0].trim(), name_style.as_deref()),
    );
    push_paragraph(
        docx,
        rich_text::plain_paragraph(lines[1].trim(), title_style.as_deref()),
    );
    push_paragraph(
        docx,
        rich_text::compose_line(lines[2].trim(), contact_style.as_deref(), context),
    );

    info!("header composed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style_map::StyleMap;
    use crate::styles::paragraph_style_id;
    use docx_rust::document::BodyContent;

    fn header_styles() -> StyleMap {
        StyleMap {
            name: Some("CvName".to_string()),
            job_title: Some("CvTitle".to_string()),
            contact: Some("CvContact".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_three_header_lines_become_three_styled_paragraphs() {
        let styles = header_styles();
        let mut context = ComposeContext::new(&styles, 1);
        let mut docx = Docx::default();

        compose_header(
            &mut docx,
            "Jane Doe\nSystems Engineer\njane@doe.dev\nbody follows",
            &mut context,
        );

        let body = &docx.document.body.content;
        assert_eq!(body.len(), 3);

        let styles: Vec<&str> = body
            .iter()
            .filter_map(|content| match content {
                BodyContent::Paragraph(para) => Some(paragraph_style_id(para)),
                _ => None,
            })
            .collect();
        assert_eq!(styles, vec!["CvName", "CvTitle", "CvContact"]);
    }

    #[test]
    fn test_short_header_is_skipped() {
        let styles = header_styles();
        let mut context = ComposeContext::new(&styles, 1);
        let mut docx = Docx::default();

        compose_header(&mut docx, "Jane Doe\nSystems Engineer", &mut context);

        assert!(docx.document.body.content.is_empty());
    }
}
