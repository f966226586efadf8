use std::collections::HashSet;
use std::io::Cursor;

use crate::error::{Result, SlotgridError};
use crate::excel::io::cell_ref;
use crate::export::GridTable;

const MAX_SHEET_NAME: usize = 31;

/// Nombre de hoja válido para Excel: sin `[]:*?/\`, máximo 31 caracteres y
/// único dentro del libro.
pub fn sheet_name_for(title: &str, used: &mut HashSet<String>) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| if matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\') { '-' } else { c })
        .collect();
    let base: String = {
        let t = cleaned.trim();
        let t = if t.is_empty() { "Schedule" } else { t };
        t.chars().take(MAX_SHEET_NAME).collect()
    };

    let mut candidate = base.clone();
    let mut n = 2;
    while used.contains(&candidate.to_lowercase()) {
        let suffix = format!(" ({})", n);
        let keep = MAX_SHEET_NAME.saturating_sub(suffix.chars().count());
        candidate = format!("{}{}", base.chars().take(keep).collect::<String>(), suffix);
        n += 1;
    }
    used.insert(candidate.to_lowercase());
    candidate
}

/// Escribe cada tabla en su propia hoja y devuelve los bytes del `.xlsx`.
pub fn write_tables_xlsx(tables: &[GridTable]) -> Result<Vec<u8>> {
    let mut book = umya_spreadsheet::new_file_empty_worksheet();
    let mut used = HashSet::new();

    let placeholder;
    let tables: &[GridTable] = if tables.is_empty() {
        placeholder = [GridTable::empty("Schedule")];
        &placeholder
    } else {
        tables
    };

    for table in tables {
        let name = sheet_name_for(&table.title, &mut used);
        let sheet = book
            .new_sheet(name.as_str())
            .map_err(|e| SlotgridError::Spreadsheet(format!("failed to add sheet '{}': {}", name, e)))?;

        for (r, row) in table.rows().iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if value.is_empty() {
                    continue;
                }
                sheet.get_cell_mut(cell_ref(c + 1, r + 1).as_str()).set_value(value.as_str());
            }
        }
    }

    let mut buf = Cursor::new(Vec::new());
    umya_spreadsheet::writer::xlsx::write_writer(&book, &mut buf)
        .map_err(|e| SlotgridError::Spreadsheet(format!("failed to write xlsx: {}", e)))?;
    Ok(buf.into_inner())
}
