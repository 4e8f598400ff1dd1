use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};

use super::fields::SheetRow;

/// Read the first sheet of the workbook at `path`. The first row holds the
/// headers; every later row with at least one non-blank cell becomes a
/// header-keyed map.
pub fn read_first_sheet(path: &Path) -> Result<Vec<SheetRow>, String> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| format!("Cannot open workbook: {e}"))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| "Workbook has no sheets".to_string())?
        .map_err(|e| format!("Cannot read first sheet: {e}"))?;

    Ok(rows_from_range(&range))
}

pub fn rows_from_range(range: &Range<Data>) -> Vec<SheetRow> {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Vec::new();
    };

    let headers: Vec<String> = header
        .iter()
        .map(|cell| cell_text(cell).trim().to_string())
        .collect();

    rows.filter_map(|cells| {
        let mut row = SheetRow::new();
        for (key, cell) in headers.iter().zip(cells) {
            if key.is_empty() {
                continue;
            }
            let value = cell_text(cell);
            if !value.is_empty() {
                // Duplicate headers: first column wins.
                row.entry(key.clone()).or_insert(value);
            }
        }
        (!row.is_empty()).then_some(row)
    })
    .collect()
}

/// Cell contents as text. Whole floats print without a fraction so phone
/// numbers typed as numbers survive.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
