//! Exportación de la rejilla día x franja a ficheros (CSV, Excel, Word, JSON).
//!
//! Todas las salidas parten de la misma representación tabular (`GridTable`)
//! que usa la capa de presentación, de modo que lo que se descarga coincide
//! con lo que se ve en pantalla.
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SlotgridError};
use crate::models::{day_label, day_sort_key, Aggregation, ScheduleMatrix};

pub mod csv;
pub mod docx;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
    Docx,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Docx => "docx",
            ExportFormat::Json => "json",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            ExportFormat::Docx => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            ExportFormat::Json => "application/json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = SlotgridError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            "docx" | "word" => Ok(ExportFormat::Docx),
            "json" => Ok(ExportFormat::Json),
            _ => Err(SlotgridError::UnknownFormat(s.to_string())),
        }
    }
}

/// Una tabla lista para imprimir: título + celdas (la primera fila es el
/// encabezado). Cada celda guarda una línea por sesión.
#[derive(Debug, Clone, PartialEq)]
pub struct GridTable {
    pub title: String,
    pub cells: Vec<Vec<Vec<String>>>,
}

impl GridTable {
    pub fn empty(title: &str) -> GridTable {
        GridTable { title: title.to_string(), cells: vec![vec![vec!["Day".to_string()]]] }
    }

    /// Filas con las sesiones de cada celda unidas por `"; "` (CSV, Excel).
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.cells.iter().map(|row| join_cells(row)).collect()
    }
}

fn join_cells(row: &[Vec<String>]) -> Vec<String> {
    row.iter().map(|lines| lines.join("; ")).collect()
}

/// Igual que `render_grid` pero sin unir: cada celda es la lista de sesiones
/// en orden de llegada (vacía si no hay nada en esa franja).
pub fn render_grid_cells(matrix: &ScheduleMatrix, axis: &[String]) -> Vec<Vec<Vec<String>>> {
    let mut rows = Vec::with_capacity(matrix.len() + 1);

    let mut header = Vec::with_capacity(axis.len() + 1);
    header.push(vec!["Day".to_string()]);
    header.extend(axis.iter().map(|slot| vec![slot.clone()]));
    rows.push(header);

    let mut days: Vec<&String> = matrix.keys().collect();
    days.sort_by_key(|d| day_sort_key(d));

    for day in days {
        let slots = &matrix[day];
        let mut row = Vec::with_capacity(axis.len() + 1);
        row.push(vec![day_label(day)]);
        for slot in axis {
            let lines: Vec<String> = slots
                .get(slot)
                .map(|cells| cells.iter().map(|c| c.to_string()).collect())
                .unwrap_or_default();
            row.push(lines);
        }
        rows.push(row);
    }
    rows
}

/// Encabezado `["Day", franja...]` y una fila por día presente (sábado primero).
/// Cada celda une sus sesiones con `"; "`.
pub fn render_grid(matrix: &ScheduleMatrix, axis: &[String]) -> Vec<Vec<String>> {
    render_grid_cells(matrix, axis).iter().map(|row| join_cells(row)).collect()
}

/// Una tabla por hoja de la partición, titulada con su ruta ("2 / G1").
pub fn tables_from_aggregation(agg: &Aggregation, default_title: &str) -> Vec<GridTable> {
    agg.matrix
        .leaves()
        .into_iter()
        .map(|(path, matrix)| GridTable {
            title: if path.is_empty() { default_title.to_string() } else { path.join(" / ") },
            cells: render_grid_cells(matrix, &agg.axis),
        })
        .collect()
}

/// Genera el fichero completo en el formato pedido.
pub fn export_aggregation(agg: &Aggregation, format: ExportFormat, title: &str) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_vec_pretty(agg)?),
        ExportFormat::Csv => Ok(csv::write_tables_csv(&tables_from_aggregation(agg, title)).into_bytes()),
        ExportFormat::Xlsx => crate::excel::write_tables_xlsx(&tables_from_aggregation(agg, title)),
        ExportFormat::Docx => docx::write_tables_docx(title, &tables_from_aggregation(agg, title)),
    }
}

/// Nombre de descarga: `<vista>-<fecha>.<ext>`.
pub fn export_filename(view: &str, format: ExportFormat) -> String {
    format!("{}-{}.{}", view, chrono::Local::now().format("%Y%m%d-%H%M"), format.extension())
}
