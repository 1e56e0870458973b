use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::domain::driver::{DRIVER_FIELDS, Driver};
use crate::export::{ExportError, ExportResult};

/// Header from field names, every field quoted, CRLF line endings.
pub fn to_csv(drivers: &[Driver]) -> ExportResult<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(DRIVER_FIELDS)?;
    for driver in drivers {
        writer.write_record(driver.values())?;
    }

    writer
        .into_inner()
        .map_err(|err| ExportError::Io(err.into_error()))
}
