//! Inline span to formatted run composition.

use super::ComposeContext;
use crate::markdown::{parse_inline, InlineSpan};
use docx_rust::document::{Hyperlink, Paragraph, ParagraphContent, Run, RunContent, Text};
use docx_rust::formatting::{
    Bold, CharacterProperty, CharacterStyleId, ParagraphProperty, ParagraphStyleId,
};

/// Character style carried by hyperlink runs, per Word convention. Direct
/// color/underline formatting would trip the tool's own audit.
pub const HYPERLINK_CHARACTER_STYLE: &str = "Hyperlink";

/// Builds a paragraph from a Markdown line, expanding inline markup into
/// plain, bold and hyperlink runs.
pub fn compose_line<'a>(
    line: &str,
    style_id: Option<&str>,
    context: &mut ComposeContext<'_>,
) -> Paragraph<'a> {
    let mut para = styled_paragraph(style_id);

    for span in parse_inline(line) {
        match span {
            InlineSpan::Text(text) => para.content.push(ParagraphContent::Run(plain_run(&text))),
            InlineSpan::Bold(text) => para.content.push(ParagraphContent::Run(bold_run(&text))),
            InlineSpan::Link { label, url } => {
                let rel_id = context.register_hyperlink(&url);
                para.content
                    .push(ParagraphContent::Link(link_element(&label, rel_id)));
            }
        }
    }

    para
}

/// Builds a single-run paragraph without inline markup expansion.
pub fn plain_paragraph<'a>(text: &str, style_id: Option<&str>) -> Paragraph<'a> {
    let mut para = styled_paragraph(style_id);
    para.content.push(ParagraphContent::Run(plain_run(text)));
    para
}

fn styled_paragraph<'a>(style_id: Option<&str>) -> Paragraph<'a> {
    let mut para = Paragraph::default();
    if let Some(style) = style_id {
        para.property = Some(ParagraphProperty {
            style_id: Some(ParagraphStyleId {
                value: style.to_string().into(),
            }),
            ..Default::default()
        });
    }
    para
}

/// Builds an unformatted text run.
pub fn plain_run<'a>(text: &str) -> Run<'a> {
    let mut run = Run::default();
    run.content.push(RunContent::Text(Text {
        text: text.to_string().into(),
        ..Default::default()
    }));
    run
}

fn bold_run<'a>(text: &str) -> Run<'a> {
    let mut run = plain_run(text);
    run.property = Some(CharacterProperty {
        bold: Some(Bold { value: Some(true) }),
        ..Default::default()
    });
    run
}

fn link_element<'a>(label: &str, rel_id: String) -> Hyperlink<'a> {
    let mut run = plain_run(label);
    run.property = Some(CharacterProperty {
        style_id: Some(CharacterStyleId {
            value: HYPERLINK_CHARACTER_STYLE.to_string().into(),
        }),
        ..Default::default()
    });

    let mut link = Hyperlink {
        id: Some(rel_id.into()),
        ..Default::default()
    };
    link.content.push(run);
    link
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style_map::StyleMap;

    fn run_text(run: &Run<'_>) -> String {
        run.content
            .iter()
            .filter_map(|c| match c {
                RunContent::Text(t) => Some(t.text.to_string()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_compose_line_emits_formatted_runs_and_links() {
        let styles = StyleMap::default();
        let mut context = ComposeContext::new(&styles, 1);

        let para = compose_line(
            "see **bold** and [site](https://x.y)",
            Some("CvContact"),
            &mut context,
        );

        assert_eq!(para.content.len(), 4);
        match &para.content[0] {
            ParagraphContent::Run(run) => {
                assert_eq!(run_text(run), "see ");
                assert!(run.property.is_none());
            }
            other => panic!("expected plain run, got {:?}", other),
        }
        match &para.content[1] {
            ParagraphContent::Run(run) => {
                assert_eq!(run_text(run), "bold");
                let props = run.property.as_ref().expect("bold property");
                assert_eq!(props.bold.as_ref().and_then(|b| b.value), Some(true));
            }
            other => panic!("expected bold run, got {:?}", other),
        }
        match &para.content[3] {
            ParagraphContent::Link(link) => {
                assert_eq!(link.id.as_deref(), Some("rId1"));
                assert_eq!(link.content.len(), 1);
                assert_eq!(run_text(&link.content[0]), "site");
            }
            other => panic!("expected hyperlink, got {:?}", other),
        }

        let links = context.into_links();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].target, "https://x.y");
    }

    #[test]
    fn test_paragraph_style_is_applied() {
        let para = plain_paragraph("Jane Doe", Some("CvName"));
        let style = para
            .property
            .as_ref()
            .and_then(|p| p.style_id.as_ref())
            .map(|s| s.value.to_string());
        assert_eq!(style.as_deref(), Some("CvName"));
    }

    #[test]
    fn test_no_style_means_no_paragraph_property() {
        let para = plain_paragraph("body", None);
        assert!(para.property.is_none());
    }
}
