//! Template creation: strips textual content from the source resume while
//! preserving images, the skills table skeleton and the package parts that
//! hold headers, footers and media.

use crate::error::{Error, Result};
use crate::package;
use crate::style_map::StyleMap;
use crate::styles::{first_cell_paragraph_style, table_style_id};
use docx_rust::document::{
    BodyContent, Paragraph, ParagraphContent, Run, RunContent, Table, TableCellContent,
    TableRowContent,
};
use docx_rust::{Docx, DocxFile};
use std::path::PathBuf;
use tracing::{info, warn};

/// Options for the template step.
#[derive(Debug, Clone)]
pub struct TemplateOptions {
    /// Source DOCX the template is derived from.
    pub source: PathBuf,
    /// Style mapping produced by the analyze step.
    pub styles: PathBuf,
    /// Where to write the template document.
    pub output: PathBuf,
}

/// Builder that turns the source resume into a reusable empty template.
pub struct TemplateBuilder {
    options: TemplateOptions,
}

impl TemplateBuilder {
    /// Creates a new builder with the given options.
    pub fn new(options: TemplateOptions) -> Self {
        Self { options }
    }

    /// Strips the source document and writes the template.
    pub fn build(&self) -> Result<()> {
        let styles = StyleMap::load(&self.options.styles)?;
        let skills_style = styles.skills_table.ok_or(Error::SkillsStyleUnmapped)?;

        let docx_file = DocxFile::from_file(&self.options.source)
            .map_err(|e| Error::DocxParse(format!("{:?}", e)))?;
        let mut docx = docx_file
            .parse()
            .map_err(|e| Error::DocxParse(format!("{:?}", e)))?;

        let kept_tables = strip_body(&mut docx, &skills_style);
        if kept_tables == 0 {
            warn!(
                style = %skills_style,
                "no table matches the skills style; all tables were removed"
            );
        } else {
            info!(style = %skills_style, "skills table identified and emptied");
        }

        docx.write_file(&self.options.output)
            .map_err(|e| Error::DocxWrite(format!("{:?}", e)))?;
        package::carry_missing_parts(&self.options.source, &self.options.output)?;
        info!(output = ?self.options.output, "template saved");
        Ok(())
    }
}

/// Removes text-only paragraphs and foreign tables from the document body.
///
/// Tables matching the skills style stay with their cells emptied; paragraphs
/// stay only when they hold an image; everything else in the body (section
/// properties, bookmarks) is left untouched. Returns how many tables were
/// kept.
pub(crate) fn strip_body(docx: &mut Docx<'_>, skills_style: &str) -> usize {
    let body = &mut docx.document.body.content;

    body.retain(|content| match content {
        BodyContent::Table(table) => table_matches_style(table, skills_style),
        BodyContent::Paragraph(para) => paragraph_has_image(para),
        _ => true,
    });

    let mut kept_tables = 0;
    for content in body.iter_mut() {
        if let BodyContent::Table(table) = content {
            clear_table_text(table);
            kept_tables += 1;
        }
    }
    kept_tables
}

/// Matches the table style, or the first cell's paragraph style when the
/// mapping was derived from a cell fallback.
fn table_matches_style(table: &Table<'_>, style: &str) -> bool {
    if table_style_id(table) == Some(style) {
        return true;
    }
    first_cell_paragraph_style(table) == Some(style)
}

fn paragraph_has_image(para: &Paragraph<'_>) -> bool {
    para.content.iter().any(|content| match content {
        ParagraphContent::Run(run) => run_has_drawing(run),
        ParagraphContent::Link(link) => link.content.iter().any(|run| run_has_drawing(run)),
        _ => false,
    })
}

fn run_has_drawing(run: &Run<'_>) -> bool {
    run.content
        .iter()
        .any(|content| matches!(content, RunContent::Drawing(_)))
}

/// Empties every cell paragraph, keeping paragraph and cell properties so
/// styles and column widths survive in the template.
fn clear_table_text(table: &mut Table<'_>) {
    for row in table.rows.iter_mut() {
        for cell_content in row.cells.iter_mut() {
            if let TableRowContent::TableCell(cell) = cell_content {
                for item in cell.content.iter_mut() {
                    if let TableCellContent::Paragraph(para) = item {
                        para.content.clear();
                    }
                }
            }
        }
    }
}
