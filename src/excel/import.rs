use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

use crate::api_json::{self, RawRecord};
use crate::error::Result;
use crate::excel::io::{normalize_header, read_sheet_rows};
use crate::models::ScheduleEntry;

/// Todas las tablas de alias del adaptador, para reconocer encabezados de hoja.
fn alias_tables() -> [&'static [&'static str]; 12] {
    [
        api_json::COURSE_FIELDS,
        api_json::DAY_FIELDS,
        api_json::TIME_SLOT_FIELDS,
        api_json::INSTRUCTOR_FIELDS,
        api_json::ROOM_FIELDS,
        api_json::TYPE_FIELDS,
        api_json::YEAR_FIELDS,
        api_json::GROUP_FIELDS,
        api_json::STUDENT_ID_FIELDS,
        api_json::STUDENT_NAME_FIELDS,
        api_json::CLASSROOM_FIELDS,
        api_json::PROFESSOR_FIELDS,
    ]
}

/// Encabezado de hoja -> alias JSON equivalente (el primero que coincida).
fn header_to_alias(header: &str) -> Option<&'static str> {
    let norm = normalize_header(header);
    if norm.is_empty() {
        return None;
    }
    alias_tables()
        .iter()
        .flat_map(|t| t.iter())
        .find(|alias| normalize_header(alias) == norm)
        .copied()
}

/// Convierte filas (la primera es el encabezado) en registros crudos. Las
/// columnas desconocidas se ignoran; las celdas vacías no se copian.
pub fn rows_to_records(rows: &[Vec<String>]) -> Vec<RawRecord> {
    let Some((header, body)) = rows.split_first() else {
        return Vec::new();
    };

    let columns: Vec<Option<&'static str>> = header.iter().map(|h| header_to_alias(h)).collect();
    if columns.iter().all(Option::is_none) {
        warn!("spreadsheet header has no recognised schedule columns");
        return Vec::new();
    }

    let mut out = Vec::new();
    for row in body {
        if row.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        let mut rec = RawRecord::new();
        for (idx, cell) in row.iter().enumerate() {
            let Some(Some(alias)) = columns.get(idx) else { continue };
            if cell.is_empty() || rec.contains_key(*alias) {
                continue;
            }
            rec.insert((*alias).to_string(), Value::String(cell.clone()));
        }
        out.push(rec);
    }
    out
}

/// Lee sesiones desde un `.xlsx`, reconociendo las columnas por nombre.
pub fn read_schedule_xlsx<P: AsRef<Path>>(path: P, sheet: Option<&str>) -> Result<Vec<ScheduleEntry>> {
    let rows = read_sheet_rows(path.as_ref(), sheet.unwrap_or(""))?;
    let records = rows_to_records(&rows);
    debug!(path = ?path.as_ref(), rows = rows.len(), records = records.len(), "imported schedule sheet");
    Ok(records.iter().map(api_json::adapt_record).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_to_alias() {
        assert_eq!(header_to_alias("Time Slot"), Some("time_slot"));
        assert_eq!(header_to_alias("Class Room Name"), Some("class_room_name"));
        assert_eq!(header_to_alias("Notes"), None);
    }
}
