use rust_xlsxwriter::{Format, Workbook};

use crate::domain::driver::{DRIVER_LABELS, Driver};
use crate::export::ExportResult;

const SHEET_NAME: &str = "Drivers";

/// Single worksheet with a bold label row followed by one row per driver.
pub fn to_xlsx(drivers: &[Driver]) -> ExportResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, label) in DRIVER_LABELS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *label, &header_format)?;
    }

    for (row, driver) in drivers.iter().enumerate() {
        let row = (row + 1) as u32;
        for (col, value) in driver.values().into_iter().enumerate() {
            worksheet.write_string(row, col as u16, value)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}
