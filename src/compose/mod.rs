//! Document composition: fills the template from the Markdown resume.

mod context;
mod header;
mod rich_text;
mod section;
mod skills;

pub use self::context::{ComposeContext, PendingLink};
pub use self::header::compose_header;
pub use self::rich_text::{compose_line, plain_paragraph, HYPERLINK_CHARACTER_STYLE};
pub use self::section::{compose_section, BULLET_STYLE};
pub use self::skills::fill_skills_table;

use crate::error::{Error, Result};
use crate::markdown;
use crate::package;
use crate::style_map::StyleMap;
use docx_rust::document::{BodyContent, Paragraph};
use docx_rust::rels::{Relationship, Relationships};
use docx_rust::{Docx, DocxFile};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// Relationship type of an external hyperlink.
const HYPERLINK_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink";

/// Default heading of the skills section in the Markdown source.
pub const DEFAULT_SKILLS_HEADING: &str = "KEY SKILLS";

/// Options for the generate step.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Markdown resume source.
    pub markdown: PathBuf,
    /// Template document produced by the template step.
    pub template: PathBuf,
    /// Style mapping produced by the analyze step.
    pub styles: PathBuf,
    /// Where to write the generated resume.
    pub output: PathBuf,
    /// Heading of the skills section.
    pub skills_heading: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            markdown: "resume.md".into(),
            template: "template_master.docx".into(),
            styles: "styles.json".into(),
            output: "cv_generated.docx".into(),
            skills_heading: DEFAULT_SKILLS_HEADING.to_string(),
        }
    }
}

/// Generator that refills the template document from Markdown content.
pub struct CvGenerator {
    options: GenerateOptions,
}

impl CvGenerator {
    /// Creates a new generator with the given options.
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Fills the template and writes the final resume document.
    pub fn generate(&self) -> Result<()> {
        let styles = StyleMap::load(&self.options.styles)?;
        info!(path = ?self.options.styles, "style mapping loaded");

        let content = fs::read_to_string(&self.options.markdown)?;
        let docx_file = DocxFile::from_file(&self.options.template)
            .map_err(|e| Error::DocxParse(format!("{:?}", e)))?;
        let mut docx = docx_file
            .parse()
            .map_err(|e| Error::DocxParse(format!("{:?}", e)))?;

        let mut context = ComposeContext::new(&styles, next_relationship_index(&docx));

        compose_header(&mut docx, &content, &mut context);

        match markdown::parse_skills(&content, &self.options.skills_heading) {
            Some(groups) => {
                fill_skills_table(&mut docx, &groups);
            }
            None => warn!(
                heading = %self.options.skills_heading,
                "skills section not found in the Markdown source"
            ),
        }

        let main = markdown::main_content(&content);
        for chunk in markdown::split_sections(&main) {
            if markdown::is_skills_section(chunk, &self.options.skills_heading) {
                continue;
            }
            let section = markdown::parse_section(chunk);
            compose_section(&mut docx, &section, &mut context);
        }

        flush_links(&mut docx, context);

        docx.write_file(&self.options.output)
            .map_err(|e| Error::DocxWrite(format!("{:?}", e)))?;
        package::carry_missing_parts(&self.options.template, &self.options.output)?;
        info!(output = ?self.options.output, "resume generated");
        Ok(())
    }
}

/// Appends a paragraph to the document body.
pub(crate) fn push_paragraph<'a>(docx: &mut Docx<'a>, para: Paragraph<'a>) {
    docx.document.body.content.push(BodyContent::Paragraph(para));
}

/// First `rIdN` index not taken by an existing document relationship.
fn next_relationship_index(docx: &Docx<'_>) -> usize {
    docx.document_rels
        .as_ref()
        .map(|rels| {
            rels.relationships
                .iter()
                .filter_map(|rel| {
                    rel.id
                        .strip_prefix("rId")
                        .and_then(|index| index.parse::<usize>().ok())
                })
                .max()
                .unwrap_or(0)
                + 1
        })
        .unwrap_or(1)
}

/// Registers the composed hyperlinks in the document relationship part.
fn flush_links(docx: &mut Docx<'_>, context: ComposeContext<'_>) {
    let links = context.into_links();
    if links.is_empty() {
        return;
    }

    let rels = docx
        .document_rels
        .get_or_insert_with(Relationships::default);
    for link in links {
        rels.relationships.push(Relationship {
            id: link.id.into(),
            target: link.target.into(),
            ty: HYPERLINK_REL_TYPE.into(),
            ..Default::default()
        });
    }
}
