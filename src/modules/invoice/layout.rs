// Fixed seven-row invoice layout, rendered into a styled docx.
//
// The outer table is a single 6.5 inch column. Rows two, four, five and six
// nest a two-column sub-table. Each row carries its own border policy, and
// the title row deliberately drops its bottom border so it merges visually
// with the name row beneath it. The measurements and fill colors are fixed
// so new output lines up with previously issued invoices.

use std::fs;
use std::path::PathBuf;

use docx_rs::{
    AlignmentType, BorderType, BreakType, Docx, Paragraph, Run, RunFonts, ShdType, Shading, Table,
    TableCell, TableCellBorder, TableCellBorderPosition, TableRow, WidthType,
};

use crate::modules::invoice::request::{InvoiceRequest, LayoutError};

const DOCUMENT_EXTENSION: &str = ".docx";

// Column widths in dxa (1/20 point, 1440 per inch).
const OUTER_WIDTH: usize = 9360; // 6.5"
const NAME_COL: usize = 5760; // 4.0"
const DATE_COL: usize = 3600; // 2.5"
const DESCRIPTION_COL: usize = 7200; // 5.0"
const AMOUNT_COL: usize = 2160; // 1.5"

const HEADER_FILL: &str = "ff99cc";
const TOTAL_FILL: &str = "ffcc99";

const BODY_FONT: &str = "Times New Roman";
const BODY_SIZE_HALF_POINTS: usize = 22; // 11pt
const TITLE_FONT: &str = "Arial Black";
const TITLE_SIZE_HALF_POINTS: usize = 56; // 28pt

fn solid(position: TableCellBorderPosition) -> TableCellBorder {
    TableCellBorder::new(position)
        .border_type(BorderType::Single)
        .size(6)
        .color("000000")
}

fn hidden(position: TableCellBorderPosition) -> TableCellBorder {
    TableCellBorder::new(position).border_type(BorderType::Nil)
}

fn outer_cell() -> TableCell {
    TableCell::new().width(OUTER_WIDTH, WidthType::Dxa)
}

/// Nested-table cell with every edge suppressed.
fn inner_cell(width: usize, paragraph: Paragraph) -> TableCell {
    TableCell::new()
        .width(width, WidthType::Dxa)
        .add_paragraph(paragraph)
        .set_border(hidden(TableCellBorderPosition::Top))
        .set_border(hidden(TableCellBorderPosition::Bottom))
        .set_border(hidden(TableCellBorderPosition::Left))
        .set_border(hidden(TableCellBorderPosition::Right))
}

fn nested(widths: [usize; 2], rows: Vec<TableRow>) -> Table {
    Table::new(rows)
        .set_grid(widths.to_vec())
        .clear_all_border()
}

/// Wraps a nested table in an outer row cell. The trailing empty paragraph
/// keeps the cell well-formed, Word requires one after a nested table.
fn nested_row_cell(inner: Table) -> TableCell {
    outer_cell().add_table(inner).add_paragraph(Paragraph::new())
}

fn title_row() -> TableRow {
    let title = Run::new()
        .add_text("INVOICE")
        .fonts(RunFonts::new().ascii(TITLE_FONT))
        .size(TITLE_SIZE_HALF_POINTS)
        .bold();
    let cell = outer_cell()
        .add_paragraph(
            Paragraph::new()
                .add_run(title)
                .align(AlignmentType::Center),
        )
        .set_border(solid(TableCellBorderPosition::Top))
        .set_border(hidden(TableCellBorderPosition::Bottom))
        .set_border(solid(TableCellBorderPosition::Left))
        .set_border(solid(TableCellBorderPosition::Right));
    TableRow::new(vec![cell])
}

fn name_and_date_row(request: &InvoiceRequest) -> TableRow {
    let name = Paragraph::new().add_run(Run::new().add_text(request.name.as_str()).bold());
    let date = Paragraph::new()
        .add_run(Run::new().add_text(request.date.as_str()))
        .align(AlignmentType::Right);
    let inner = nested(
        [NAME_COL, DATE_COL],
        vec![TableRow::new(vec![
            inner_cell(NAME_COL, name),
            inner_cell(DATE_COL, date),
        ])],
    );
    let cell = nested_row_cell(inner)
        .set_border(hidden(TableCellBorderPosition::Top))
        .set_border(hidden(TableCellBorderPosition::Bottom))
        .set_border(solid(TableCellBorderPosition::Left))
        .set_border(solid(TableCellBorderPosition::Right));
    TableRow::new(vec![cell])
}

fn bill_to_row(request: &InvoiceRequest) -> TableRow {
    let mut paragraph = Paragraph::new().add_run(
        Run::new()
            .add_text("Bill To:")
            .add_break(BreakType::TextWrapping)
            .bold(),
    );
    for line in &request.bill_to {
        paragraph = paragraph.add_run(
            Run::new()
                .add_text(format!("    {line}"))
                .add_break(BreakType::TextWrapping),
        );
    }
    let cell = outer_cell()
        .add_paragraph(paragraph)
        .set_border(hidden(TableCellBorderPosition::Top))
        .set_border(hidden(TableCellBorderPosition::Bottom))
        .set_border(solid(TableCellBorderPosition::Left))
        .set_border(solid(TableCellBorderPosition::Right));
    TableRow::new(vec![cell])
}

fn column_header_row() -> TableRow {
    let header_cell = |width: usize, label: &str| {
        inner_cell(
            width,
            Paragraph::new()
                .add_run(Run::new().add_text(label).bold())
                .align(AlignmentType::Center),
        )
        .shading(Shading::new().shd_type(ShdType::Clear).fill(HEADER_FILL))
    };
    let inner = nested(
        [DESCRIPTION_COL, AMOUNT_COL],
        vec![TableRow::new(vec![
            header_cell(DESCRIPTION_COL, "DESCRIPTION"),
            header_cell(AMOUNT_COL, "AMOUNT"),
        ])],
    );
    let cell = nested_row_cell(inner)
        .set_border(solid(TableCellBorderPosition::Left))
        .set_border(solid(TableCellBorderPosition::Right));
    TableRow::new(vec![cell])
}

fn line_items_row(request: &InvoiceRequest) -> TableRow {
    let item_row = |description: &str, amount: &str| {
        let amount_paragraph = Paragraph::new()
            .add_run(Run::new().add_text(amount))
            .align(AlignmentType::Right);
        TableRow::new(vec![
            inner_cell(
                DESCRIPTION_COL,
                Paragraph::new().add_run(Run::new().add_text(description)),
            ),
            inner_cell(AMOUNT_COL, amount_paragraph),
        ])
    };

    let mut rows = vec![item_row(&request.salary_description, "")];
    for item in &request.details {
        rows.push(item_row(&item.description, &item.amount));
    }

    let cell = nested_row_cell(nested([DESCRIPTION_COL, AMOUNT_COL], rows))
        .set_border(hidden(TableCellBorderPosition::Top))
        .set_border(solid(TableCellBorderPosition::Bottom))
        .set_border(solid(TableCellBorderPosition::Left))
        .set_border(solid(TableCellBorderPosition::Right));
    TableRow::new(vec![cell])
}

fn total_row(request: &InvoiceRequest) -> TableRow {
    let label = inner_cell(
        DESCRIPTION_COL,
        Paragraph::new()
            .add_run(Run::new().add_text("TOTAL").bold())
            .align(AlignmentType::Right),
    );
    let amount = inner_cell(
        AMOUNT_COL,
        Paragraph::new()
            .add_run(Run::new().add_text(request.total.as_str()).bold())
            .align(AlignmentType::Right),
    )
    .shading(Shading::new().shd_type(ShdType::Clear).fill(TOTAL_FILL));

    let inner = nested(
        [DESCRIPTION_COL, AMOUNT_COL],
        vec![TableRow::new(vec![label, amount])],
    );
    let cell = nested_row_cell(inner)
        .set_border(solid(TableCellBorderPosition::Top))
        .set_border(hidden(TableCellBorderPosition::Bottom))
        .set_border(solid(TableCellBorderPosition::Left))
        .set_border(solid(TableCellBorderPosition::Right));
    TableRow::new(vec![cell])
}

fn amount_in_words_row(request: &InvoiceRequest) -> TableRow {
    let paragraph = Paragraph::new()
        .add_run(Run::new().add_text("Amount in Words: ").bold())
        .add_run(Run::new().add_text(request.total_words.as_str()));
    let cell = outer_cell()
        .add_paragraph(paragraph)
        .set_border(hidden(TableCellBorderPosition::Top))
        .set_border(solid(TableCellBorderPosition::Bottom))
        .set_border(solid(TableCellBorderPosition::Left))
        .set_border(solid(TableCellBorderPosition::Right));
    TableRow::new(vec![cell])
}

pub fn document_table(request: &InvoiceRequest) -> Table {
    Table::new(vec![
        title_row(),
        name_and_date_row(request),
        bill_to_row(request),
        column_header_row(),
        line_items_row(request),
        total_row(request),
        amount_in_words_row(request),
    ])
    .set_grid(vec![OUTER_WIDTH])
    .width(OUTER_WIDTH, WidthType::Dxa)
    .clear_all_border()
}

fn resolve_path(filename: &str) -> PathBuf {
    if filename.ends_with(DOCUMENT_EXTENSION) {
        PathBuf::from(filename)
    } else {
        PathBuf::from(format!("{filename}{DOCUMENT_EXTENSION}"))
    }
}

/// Renders the invoice and writes it next to the caller-supplied filename,
/// appending the document extension when absent. Returns the resolved path.
pub fn build(filename: &str, data: &serde_json::Value) -> Result<PathBuf, LayoutError> {
    let request = InvoiceRequest::from_value(data)?;
    let path = resolve_path(filename);

    let docx = Docx::new()
        .default_fonts(RunFonts::new().ascii(BODY_FONT))
        .default_size(BODY_SIZE_HALF_POINTS)
        .add_table(document_table(&request));

    let file = fs::File::create(&path).map_err(|e| LayoutError::Save(e.to_string()))?;
    docx.build()
        .pack(file)
        .map_err(|e| LayoutError::Save(e.to_string()))?;
    Ok(path)
}
