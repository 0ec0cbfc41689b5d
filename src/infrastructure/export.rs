//! Spreadsheet export of the results collection.

use crate::domain::ResultsCollection;
use crate::infrastructure::settings::ExportSettings;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Error saving to spreadsheet: {0}")]
    Xlsx(#[from] XlsxError),
}

/// Writes the results collection to a single-sheet workbook.
///
/// Every cell, including the numbers, is written as a text cell holding the
/// same string the results table shows. An existing file at the target path
/// is replaced.
pub struct XlsxExporter<'a> {
    settings: &'a ExportSettings,
}

impl<'a> XlsxExporter<'a> {
    pub fn new(settings: &'a ExportSettings) -> Self {
        Self { settings }
    }

    /// Serializes `results` and saves the workbook.
    ///
    /// Returns the file name to report to the user. The collection is only
    /// read.
    pub fn export(&self, results: &ResultsCollection) -> Result<String, ExportError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.settings.sheet_name)?;

        for (r, row) in results.to_grid().iter().enumerate() {
            for (c, text) in row.iter().enumerate() {
                if r == 0 {
                    worksheet.write_string_with_format(0, c as u16, text, &header_format)?;
                } else {
                    worksheet.write_string(r as u32, c as u16, text)?;
                }
            }
        }

        for c in 0..crate::domain::COLUMN_HEADERS.len() {
            worksheet.set_column_width(c as u16, self.settings.column_width)?;
        }

        workbook.save(&self.settings.path)?;
        tracing::info!(
            path = %self.settings.path.display(),
            rows = results.len(),
            "exported results"
        );
        Ok(self.settings.display_name())
    }
}

/// Reads back an exported workbook: its sheet names and the cells of the
/// first sheet.
#[cfg(test)]
pub(crate) fn read_workbook(path: &std::path::Path) -> (Vec<String>, Vec<Vec<calamine::Data>>) {
    use calamine::{Reader, Xlsx, open_workbook};

    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    let names = workbook.sheet_names();
    let range = workbook.worksheet_range(&names[0]).unwrap();
    let cells = range.rows().map(|row| row.to_vec()).collect();
    (names, cells)
}
