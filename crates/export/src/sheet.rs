//! Spreadsheet export encoder.

use rust_xlsxwriter::{Format, Workbook};

use opdreg_core::registration::Registration;

use crate::columns::{row_values, SHEET_COLUMNS};
use crate::error::ExportError;

/// Column widths in characters, parallel to [`SHEET_COLUMNS`].
const COLUMN_WIDTHS: &[f64] = &[
    18.0, 25.0, 8.0, 10.0, 12.0, 20.0, 10.0, 15.0, 35.0, 18.0, 15.0,
];

/// Worksheet name for the exported tab.
const SHEET_NAME: &str = "Registrations";

/// Encode the full filtered record set as an `.xlsx` payload.
///
/// One bold header row, then one data row per record in input order.
pub fn encode_spreadsheet(records: &[Registration]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold();
    for (col, column) in SHEET_COLUMNS.iter().enumerate() {
        worksheet.set_column_width(col as u16, COLUMN_WIDTHS[col])?;
        worksheet.write_string_with_format(0, col as u16, column.header, &header_format)?;
    }

    for (row, record) in records.iter().enumerate() {
        for (col, value) in row_values(SHEET_COLUMNS, record).into_iter().enumerate() {
            worksheet.write_string(row as u32 + 1, col as u16, value)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
