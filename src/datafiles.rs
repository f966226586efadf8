// Ficheros de datos locales (exportaciones del backend guardadas como .json o .xlsx).
use std::path::{Path, PathBuf};

use crate::error::{Result, SlotgridError};
use crate::excel::read_schedule_xlsx;
use crate::models::ScheduleEntry;

pub const SUPPORTED_EXTENSIONS: &[&str] = &["json", "xlsx"];

/// Nombre de fichero aceptable: sin rutas ni `..`.
pub fn is_safe_name(name: &str) -> bool {
    let name = name.trim();
    !name.is_empty() && !name.contains("..") && !name.contains('/') && !name.contains('\\')
}

pub fn resolve_datafile(dir: &Path, name: &str) -> Result<PathBuf> {
    if !is_safe_name(name) {
        return Err(SlotgridError::InvalidInput(format!("invalid datafile name '{}'", name)));
    }
    let path = dir.join(name.trim());
    if !path.is_file() {
        return Err(SlotgridError::NotFound(format!("datafile '{}'", name)));
    }
    Ok(path)
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(std::ffi::OsStr::to_str)
        .map(|s| s.to_lowercase())
}

/// `.json` o `.xlsx` (sin distinguir mayúsculas).
pub fn is_supported_name(name: &str) -> bool {
    extension_of(Path::new(name.trim()))
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Ficheros soportados del directorio, ordenados por nombre. Un directorio
/// inexistente equivale a vacío.
pub fn list_datafiles(dir: &Path) -> Result<Vec<String>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()).filter(|n| is_supported_name(n)) {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}

/// Carga las sesiones de un fichero según su extensión.
pub fn load_entries(dir: &Path, name: &str, sheet: Option<&str>) -> Result<Vec<ScheduleEntry>> {
    let path = resolve_datafile(dir, name)?;
    match extension_of(&path).as_deref() {
        Some("json") => {
            let text = std::fs::read_to_string(&path)?;
            crate::api_json::parse_entries(&text)
        }
        Some("xlsx") => read_schedule_xlsx(&path, sheet),
        _ => Err(SlotgridError::InvalidInput(format!(
            "unsupported datafile '{}' (expected .json or .xlsx)",
            name
        ))),
    }
}
