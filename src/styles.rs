//! Style lookup helpers shared by the analyzer and the template builder.

use docx_rust::document::{Paragraph, Table, TableCellContent, TableRowContent};

/// Style identifier Word assigns to the default paragraph style.
pub const NORMAL_PARAGRAPH_STYLE: &str = "Normal";

/// Style identifier Word assigns to the default table style.
pub const NORMAL_TABLE_STYLE: &str = "TableNormal";

/// Returns the paragraph's style identifier, defaulting to `Normal` when the
/// paragraph carries no explicit `w:pStyle`.
pub fn paragraph_style_id<'a>(para: &'a Paragraph<'_>) -> &'a str {
    para.property
        .as_ref()
        .and_then(|property| property.style_id.as_ref())
        .map(|style| style.value.as_ref())
        .unwrap_or(NORMAL_PARAGRAPH_STYLE)
}

/// Returns the table's own `w:tblStyle` identifier, if any.
pub fn table_style_id<'a>(table: &'a Table<'_>) -> Option<&'a str> {
    table
        .property
        .style_id
        .as_ref()
        .map(|style| style.value.as_ref())
}

/// Returns the style of the first paragraph in the table's first cell.
pub fn first_cell_paragraph_style<'a>(table: &'a Table<'_>) -> Option<&'a str> {
    let row = table.rows.first()?;
    let cell = row.cells.iter().find_map(|content| match content {
        TableRowContent::TableCell(cell) => Some(cell),
        _ => None,
    })?;
    let para = cell.content.iter().find_map(|content| match content {
        TableCellContent::Paragraph(para) => Some(para),
        _ => None,
    })?;
    para.property
        .as_ref()
        .and_then(|property| property.style_id.as_ref())
        .map(|style| style.value.as_ref())
}

/// Resolves the table style used to identify the skills table.
///
/// Falls back to the first cell's paragraph style when the table style is
/// absent or the built-in default, the same way word processors often leave
/// `w:tblStyle` unset and style the cell paragraphs instead.
pub fn effective_table_style(table: &Table<'_>) -> Option<String> {
    match table_style_id(table) {
        Some(style) if style != NORMAL_TABLE_STYLE => Some(style.to_string()),
        _ => first_cell_paragraph_style(table).map(str::to_string),
    }
}
