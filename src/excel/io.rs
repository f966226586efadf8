use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

use crate::error::{Result, SlotgridError};

/// Convierte un `Data` de calamine a String
pub fn cell_to_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            if (f.floor() - f).abs() < f64::EPSILON {
                format!("{}", *f as i64)
            } else {
                format!("{}", f)
            }
        }
        Data::Int(i) => format!("{}", i),
        Data::Bool(b) => format!("{}", b),
        Data::Empty => String::new(),
        Data::Error(_) => String::new(),
        Data::DateTime(s) => s.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Normaliza encabezados: minúsculas, sólo letras y dígitos ("Time Slot" == "time_slot").
pub fn normalize_header(s: &str) -> String {
    s.to_lowercase().chars().filter(|c| c.is_alphanumeric()).collect()
}

/// Letras de columna estilo Excel (1-based): 1 -> "A", 28 -> "AB". El 0 da cadena vacía.
pub fn index_to_column_letters(mut idx: usize) -> String {
    let mut letters = Vec::new();
    while idx > 0 {
        let rem = (idx - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        idx = (idx - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Referencia de celda estilo Excel a partir de columna y fila 1-based.
pub fn cell_ref(col: usize, row: usize) -> String {
    format!("{}{}", index_to_column_letters(col), row)
}

/// Lee una hoja del libro como filas de texto. Si `sheet_name` está vacío o no
/// existe se usa la primera hoja.
pub fn read_sheet_rows<P: AsRef<Path>>(path: P, sheet_name: &str) -> Result<Vec<Vec<String>>> {
    let mut workbook = open_workbook_auto(path.as_ref())
        .map_err(|e| SlotgridError::Spreadsheet(format!("failed to open {:?}: {}", path.as_ref(), e)))?;

    let names = workbook.sheet_names().to_owned();
    let sheet_to_use = names
        .iter()
        .find(|s| !sheet_name.is_empty() && *s == sheet_name)
        .or_else(|| names.first())
        .cloned();

    let Some(sheet) = sheet_to_use else {
        return Ok(Vec::new());
    };

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| SlotgridError::Spreadsheet(format!("failed to read sheet '{}': {}", sheet, e)))?;

    Ok(range
        .rows()
        .map(|r| r.iter().map(cell_to_string).collect())
        .collect())
}
