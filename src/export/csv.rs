// CSV (RFC 4180) de una o varias tablas.
use crate::export::GridTable;

/// Entrecomilla si el campo contiene separador, comillas o saltos de línea.
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

pub fn write_row(row: &[String]) -> String {
    row.iter().map(|f| escape_field(f)).collect::<Vec<_>>().join(",")
}

/// Con una sola tabla sale sólo la tabla; con varias, cada una va precedida
/// de una línea con su título y separada por una línea en blanco.
pub fn write_tables_csv(tables: &[GridTable]) -> String {
    let mut out = String::new();
    let titled = tables.len() > 1;
    for (i, table) in tables.iter().enumerate() {
        if i > 0 {
            out.push_str("\r\n");
        }
        if titled {
            out.push_str(&escape_field(&table.title));
            out.push_str("\r\n");
        }
        for row in table.rows() {
            out.push_str(&write_row(&row));
            out.push_str("\r\n");
        }
    }
    out
}
