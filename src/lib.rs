// Biblioteca raíz del crate `slotgrid`.
// Normaliza franjas horarias libres ("9:00 - 11:00", "1-3") a "HH:MM-HH:MM" y
// agrupa registros de horario en una rejilla día x franja, con las vistas,
// exportaciones y el servidor HTTP que la consumen.
pub mod algorithm;
pub mod api_json;
pub mod chart;
pub mod config;
pub mod datafiles;
pub mod error;
pub mod excel;
pub mod export;
pub mod models;
pub mod server;
pub mod source;

pub use algorithm::{aggregate, aggregate_view, normalize_time_range, ViewKind};
pub use config::AppConfig;
pub use error::{Result, SlotgridError};
pub use models::{Aggregation, LectureCell, Partition, ScheduleEntry, ScheduleMatrix, SessionType};

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
