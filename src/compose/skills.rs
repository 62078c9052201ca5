//! Skills table population.

use super::rich_text::plain_run;
use crate::markdown::SkillGroup;
use docx_rust::document::{
    BodyContent, ParagraphContent, Table, TableCell, TableCellContent, TableRow, TableRowContent,
};
use docx_rust::Docx;
use tracing::{info, warn};

/// Fills the template's first table with the parsed skill groups.
///
/// Each group occupies one column, items top to bottom. Rows are added as
/// clones of the first row (so cell properties and widths survive) until the
/// longest group fits; groups beyond the table's column count are dropped.
/// Returns `false` when the template holds no usable table.
pub fn fill_skills_table(docx: &mut Docx<'_>, groups: &[SkillGroup]) -> bool {
    let Some(table) = docx
        .document
        .body
        .content
        .iter_mut()
        .find_map(|content| match content {
            BodyContent::Table(table) => Some(table),
            _ => None,
        })
    else {
        warn!("no table found in the template document; skills were not filled");
        return false;
    };

    if table.rows.is_empty() {
        warn!("skills table has no rows; skills were not filled");
        return false;
    }

    let needed_rows = groups.iter().map(|g| g.items.len()).max().unwrap_or(0);
    let blank = blank_row(&table.rows[0]);
    while table.rows.len() < needed_rows {
        table.rows.push(blank.clone());
    }

    let column_count = cell_count(&table.rows[0]);
    if groups.len() > column_count {
        warn!(
            groups = groups.len(),
            columns = column_count,
            "more skill groups than table columns; extra groups dropped"
        );
    }

    for (col, group) in groups.iter().take(column_count).enumerate() {
        for (row, item) in group.items.iter().enumerate() {
            if row >= table.rows.len() {
                break;
            }
            if let Some(cell) = cell_mut(&mut table.rows[row], col) {
                set_cell_text(cell, item);
            }
        }
    }

    info!(groups = groups.len(), rows = table.rows.len(), "skills table filled");
    true
}

fn cell_count(row: &TableRow<'_>) -> usize {
    row.cells
        .iter()
        .filter(|content| matches!(content, TableRowContent::TableCell(_)))
        .count()
}

fn cell_mut<'a, 'b>(row: &'b mut TableRow<'a>, index: usize) -> Option<&'b mut TableCell<'a>> {
    row.cells
        .iter_mut()
        .filter_map(|content| match content {
            TableRowContent::TableCell(cell) => Some(cell),
            _ => None,
        })
        .nth(index)
}

/// Clones a row and empties every cell paragraph's runs.
fn blank_row<'a>(row: &TableRow<'a>) -> TableRow<'a> {
    let mut blank = row.clone();
    for cell_content in blank.cells.iter_mut() {
        if let TableRowContent::TableCell(cell) = cell_content {
            for item in cell.content.iter_mut() {
                if let TableCellContent::Paragraph(para) = item {
                    para.content.clear();
                }
            }
        }
    }
    blank
}

/// Replaces the cell text, reusing the first paragraph so its style survives.
fn set_cell_text<'a>(cell: &mut TableCell<'a>, text: &str) {
    let run = ParagraphContent::Run(plain_run(text));
    if let Some(TableCellContent::Paragraph(para)) = cell.content.first_mut() {
        para.content.clear();
        para.content.push(run);
    } else {
        let mut para = docx_rust::document::Paragraph::default();
        para.content.push(run);
        cell.content.insert(0, TableCellContent::Paragraph(para));
    }
}
