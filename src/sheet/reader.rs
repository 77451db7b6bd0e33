use std::path::Path;

use anyhow::{bail, Context, Result};
use calamine::{open_workbook, Data, Reader, Xlsx};

use crate::models::Sheet;

/// Read the first worksheet of an xlsx file into a [`Sheet`].
///
/// The first row becomes the headers; every cell is stringified. Empty and
/// missing cells become empty strings, so a non-string ingredients cell
/// normalizes to an empty result instead of failing the row.
pub fn read_sheet(path: &Path) -> Result<Sheet> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("cannot open spreadsheet {}", path.display()))?;

    let range = workbook
        .worksheet_range_at(0)
        .context("workbook has no worksheets")?
        .with_context(|| format!("cannot read first worksheet of {}", path.display()))?;

    let mut rows_iter = range.rows();
    let Some(header_row) = rows_iter.next() else {
        bail!("worksheet in {} is empty", path.display());
    };

    let headers: Vec<String> = header_row.iter().map(cell_to_string).collect();
    let width = headers.len();

    let rows: Vec<Vec<String>> = rows_iter
        .map(|row| {
            let mut cells: Vec<String> = row.iter().map(cell_to_string).collect();
            // calamine trims trailing empty cells per row; keep rows rectangular.
            cells.resize(width, String::new());
            cells
        })
        .collect();

    Ok(Sheet { headers, rows })
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_fatal() {
        let err = read_sheet(Path::new("no/such/file.xlsx")).unwrap_err();
        assert!(err.to_string().contains("no/such/file.xlsx"));
    }

    #[test]
    fn test_cell_to_string() {
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::String("мука".into())), "мука");
        assert_eq!(cell_to_string(&Data::Float(2.0)), "2");
        assert_eq!(cell_to_string(&Data::Int(500)), "500");
    }
}
