// Pivot de registros planos a la matriz día x franja, con particiones opcionales.
use std::collections::{BTreeMap, BTreeSet};

use tracing::warn;

use crate::algorithm::normalize::{normalize_time_range, slot_start_minutes};
use crate::models::{Aggregation, LectureCell, Partition, ScheduleEntry, ScheduleMatrix};

/// Extrae la clave de una partición externa (año, grupo, profesor...). Puede
/// ser un closure que capture parámetros de la pantalla que lo usa.
pub type KeySelector<'a> = &'a dyn Fn(&ScheduleEntry) -> String;

/// Agrupa `entries` en `selectors.len()` niveles de partición, luego por día y
/// por franja normalizada. Las celdas conservan el orden de entrada y no se
/// eliminan duplicados. Las entradas sin horario se descartan (y se cuentan).
pub fn aggregate(entries: &[ScheduleEntry], selectors: &[KeySelector<'_>]) -> Aggregation {
    let mut root = empty_partition(selectors.len());
    let mut slots: BTreeSet<String> = BTreeSet::new();
    let mut skipped = 0usize;

    for entry in entries {
        let raw = match entry.time_slot_raw.as_deref() {
            Some(r) if !r.is_empty() => r,
            _ => {
                warn!(course = %entry.course, day = %entry.day, "schedule entry without time slot, skipping");
                skipped += 1;
                continue;
            }
        };

        let slot = normalize_time_range(Some(raw));
        let keys: Vec<String> = selectors.iter().map(|sel| sel(entry)).collect();
        let matrix = leaf_for(&mut root, &keys);

        matrix
            .entry(entry.day.clone())
            .or_default()
            .entry(slot.clone())
            .or_default()
            .push(LectureCell::from(entry));

        slots.insert(slot);
    }

    Aggregation {
        matrix: root,
        axis: sort_axis(slots),
        skipped,
    }
}

/// Ordena franjas por minuto de inicio; a igualdad, por el texto completo.
pub fn sort_axis<I>(slots: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let unique: BTreeSet<String> = slots.into_iter().collect();
    let mut axis: Vec<String> = unique.into_iter().collect();
    // sort estable: el BTreeSet ya deja los empates en orden lexicográfico
    axis.sort_by_key(|s| slot_start_minutes(s));
    axis
}

fn empty_partition(depth: usize) -> Partition {
    if depth == 0 {
        Partition::Leaf(ScheduleMatrix::new())
    } else {
        Partition::Node(BTreeMap::new())
    }
}

/// Baja (creando niveles bajo demanda) hasta la matriz de la ruta `keys`.
fn leaf_for<'a>(node: &'a mut Partition, keys: &[String]) -> &'a mut ScheduleMatrix {
    match node {
        Partition::Leaf(m) => m,
        Partition::Node(children) => {
            let (head, rest) = keys
                .split_first()
                .map(|(h, r)| (h.clone(), r))
                .unwrap_or_default();
            let child = children
                .entry(head)
                .or_insert_with(|| empty_partition(rest.len()));
            leaf_for(child, rest)
        }
    }
}
