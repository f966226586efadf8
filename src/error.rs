//! Tipos de error del crate.
//!
//! La normalización y la agregación son totales y no usan este tipo; los
//! errores aparecen sólo en los bordes (adaptador de entrada, ficheros,
//! exportación, servidor remoto).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlotgridError {
    /// Entrada con forma incorrecta (p. ej. el JSON no es un array).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown view '{0}' (expected single, students, professors, classrooms or groups)")]
    UnknownView(String),

    #[error("unknown export format '{0}' (expected csv, xlsx, docx or json)")]
    UnknownFormat(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("export error: {0}")]
    Export(String),

    #[error("chart error: {0}")]
    Chart(String),

    /// Fallo al consultar el backend remoto de horarios.
    #[error("remote source error: {0}")]
    Remote(String),

    #[error("config error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for SlotgridError {
    fn from(e: reqwest::Error) -> Self {
        SlotgridError::Remote(e.to_string())
    }
}

impl From<zip::result::ZipError> for SlotgridError {
    fn from(e: zip::result::ZipError) -> Self {
        SlotgridError::Export(e.to_string())
    }
}

impl From<quick_xml::Error> for SlotgridError {
    fn from(e: quick_xml::Error) -> Self {
        SlotgridError::Export(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SlotgridError>;
