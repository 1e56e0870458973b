//! File exporters for the filtered driver table.

use std::fmt::{Display, Formatter};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::driver::Driver;

pub mod csv_writer;
pub mod pdf_writer;
pub mod xlsx_writer;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export")]
    Empty,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("PDF error: {0}")]
    Pdf(String),
}

pub type ExportResult<T> = Result<T, ExportError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Pdf => "application/pdf",
        }
    }

    /// Encodes `drivers`. An empty slice is rejected with [`ExportError::Empty`].
    ///
    /// `title` heads the PDF table; the other formats ignore it.
    pub fn encode(self, drivers: &[Driver], title: &str) -> ExportResult<Vec<u8>> {
        if drivers.is_empty() {
            return Err(ExportError::Empty);
        }
        match self {
            ExportFormat::Csv => csv_writer::to_csv(drivers),
            ExportFormat::Xlsx => xlsx_writer::to_xlsx(drivers),
            ExportFormat::Pdf => pdf_writer::to_pdf(drivers, title),
        }
    }
}

impl Display for ExportFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}
