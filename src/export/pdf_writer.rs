use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::domain::driver::{DRIVER_LABELS, Driver};
use crate::export::{ExportError, ExportResult};

// A4 landscape.
const PAGE_WIDTH: f32 = 297.0;
const PAGE_HEIGHT: f32 = 210.0;
const MARGIN: f32 = 14.0;
const ROW_HEIGHT: f32 = 6.0;
const TITLE_SIZE: f32 = 14.0;
const TEXT_SIZE: f32 = 9.0;
/// Rough Helvetica advance at [`TEXT_SIZE`], used to clip cell text.
const CHAR_WIDTH: f32 = 1.7;

/// Column widths in mm for every field except the id.
const COLUMN_WIDTHS: [f32; 7] = [32.0, 32.0, 60.0, 32.0, 22.0, 55.0, 28.0];

fn pdf_error(err: impl std::fmt::Display) -> ExportError {
    ExportError::Pdf(err.to_string())
}

fn clip(text: &str, width: f32) -> String {
    let max_chars = (width / CHAR_WIDTH) as usize;
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    clipped.push_str("...");
    clipped
}

fn write_row(layer: &PdfLayerReference, cells: &[&str], y: f32, font: &IndirectFontRef) {
    let mut x = MARGIN;
    for (cell, width) in cells.iter().zip(COLUMN_WIDTHS) {
        layer.use_text(clip(cell, width), TEXT_SIZE, Mm(x), Mm(y), font);
        x += width;
    }
}

/// Titled table of the drivers: `title` on top, a bold label row without
/// the id column, then one row per driver. Rows flow onto new pages, each
/// repeating the label row.
pub fn to_pdf(drivers: &[Driver], title: &str) -> ExportResult<Vec<u8>> {
    let (doc, page, layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Drivers");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_error)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_error)?;

    let labels = &DRIVER_LABELS[1..];
    let mut layer = doc.get_page(page).get_layer(layer);
    let top = PAGE_HEIGHT - MARGIN;

    layer.use_text(title, TITLE_SIZE, Mm(MARGIN), Mm(top), &bold);
    let mut y = top - 2.0 * ROW_HEIGHT;
    write_row(&layer, labels, y, &bold);

    for driver in drivers {
        y -= ROW_HEIGHT;
        if y < MARGIN {
            let (page, new_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Drivers");
            layer = doc.get_page(page).get_layer(new_layer);
            y = top;
            write_row(&layer, labels, y, &bold);
            y -= ROW_HEIGHT;
        }
        write_row(&layer, &driver.values()[1..], y, &regular);
    }

    doc.save_to_bytes().map_err(pdf_error)
}
