//! Módulo `excel`: lectura y escritura de hojas de cálculo.
//!
//! Submódulos:
//! - `io`: helpers de celdas, encabezados y lectura de hojas (calamine)
//! - `import`: sesiones a partir de una hoja con encabezados reconocibles
//! - `export`: escritura de la rejilla día x franja a `.xlsx` (umya-spreadsheet)

/// Helpers de IO y utilidades para parsing de Excel
pub mod io;

/// Importación de `ScheduleEntry` desde `.xlsx`: `read_schedule_xlsx`
pub mod import;

/// Exportación de tablas a `.xlsx`: `write_tables_xlsx`
pub mod export;

pub use import::{read_schedule_xlsx, rows_to_records};
pub use export::write_tables_xlsx;
