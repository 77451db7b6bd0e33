use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;

use crate::models::Sheet;

/// Write a [`Sheet`] to an xlsx file: header row first, then the data
/// rows. No index column is added.
pub fn write_sheet(sheet: &Sheet, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in sheet.headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, header)?;
    }

    for (row_idx, row) in sheet.rows.iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            worksheet.write_string(row_idx as u32 + 1, col as u16, cell)?;
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("cannot write spreadsheet {}", path.display()))?;

    Ok(())
}
