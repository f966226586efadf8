// Núcleo: normalización de franjas y agregación de horarios.
// Declarar submódulos (archivos en la carpeta `src/algorithm`)
pub mod normalize;
pub mod aggregate;
pub mod views;
pub mod analysis;

pub use normalize::{normalize_time_range, slot_start_minutes, TimeRange, SENTINEL_SLOT};
pub use aggregate::{aggregate, sort_axis, KeySelector};
pub use views::{ViewKind, UNASSIGNED};
pub use analysis::{analyze, ScheduleAnalysis};

use crate::models::{Aggregation, ScheduleEntry};

/// Atajo: agrega con los selectores de una vista predefinida.
pub fn aggregate_view(entries: &[ScheduleEntry], view: ViewKind) -> Aggregation {
	aggregate(entries, view.key_selectors())
}
