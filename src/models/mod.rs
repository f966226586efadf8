// Estructuras de datos principales

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Día de la semana tal como lo codifica el backend: "1".."7" = sábado..viernes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayCode {
    Saturday = 1,
    Sunday = 2,
    Monday = 3,
    Tuesday = 4,
    Wednesday = 5,
    Thursday = 6,
    Friday = 7,
}

impl DayCode {
    pub const ALL: [DayCode; 7] = [
        DayCode::Saturday,
        DayCode::Sunday,
        DayCode::Monday,
        DayCode::Tuesday,
        DayCode::Wednesday,
        DayCode::Thursday,
        DayCode::Friday,
    ];

    /// Interpreta un código "1".."7" (se toleran espacios alrededor).
    pub fn from_code(code: &str) -> Option<DayCode> {
        match code.trim() {
            "1" => Some(DayCode::Saturday),
            "2" => Some(DayCode::Sunday),
            "3" => Some(DayCode::Monday),
            "4" => Some(DayCode::Tuesday),
            "5" => Some(DayCode::Wednesday),
            "6" => Some(DayCode::Thursday),
            "7" => Some(DayCode::Friday),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            DayCode::Saturday => "1",
            DayCode::Sunday => "2",
            DayCode::Monday => "3",
            DayCode::Tuesday => "4",
            DayCode::Wednesday => "5",
            DayCode::Thursday => "6",
            DayCode::Friday => "7",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DayCode::Saturday => "Saturday",
            DayCode::Sunday => "Sunday",
            DayCode::Monday => "Monday",
            DayCode::Tuesday => "Tuesday",
            DayCode::Wednesday => "Wednesday",
            DayCode::Thursday => "Thursday",
            DayCode::Friday => "Friday",
        }
    }
}

/// Etiqueta legible para un código de día; los códigos desconocidos se devuelven tal cual.
pub fn day_label(code: &str) -> String {
    DayCode::from_code(code)
        .map(|d| d.label().to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Orden de presentación de días: primero los códigos válidos (sábado..viernes),
/// luego el resto alfabéticamente.
pub fn day_sort_key(code: &str) -> (u8, String) {
    match DayCode::from_code(code) {
        Some(d) => (d as u8, String::new()),
        None => (u8::MAX, code.to_string()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    #[default]
    Lecture,
    Section,
}

impl SessionType {
    /// Los valores crudos del backend varían ("lecture", "Section", "lab"...).
    pub fn from_raw(raw: Option<&str>) -> SessionType {
        let Some(r) = raw else { return SessionType::Lecture };
        let lower = r.trim().to_lowercase();
        if lower.contains("sec") || lower.contains("lab") || lower.contains("tut") {
            SessionType::Section
        } else {
            SessionType::Lecture
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SessionType::Lecture => "Lecture",
            SessionType::Section => "Section",
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Una sesión programada, ya traducida desde el registro crudo de la API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub course: String,
    pub day: String,
    /// Rango horario tal cual llega ("9:00 - 11:00", "1-3", ...). `None` si el
    /// registro no trae horario.
    pub time_slot_raw: Option<String>,
    pub instructor: String,
    pub room: Option<String>,
    pub session_type: SessionType,
    pub year: Option<String>,
    pub group_name: Option<String>,
    pub student_id: Option<String>,
    pub student_name: Option<String>,
    pub classroom_name: Option<String>,
    pub professor_name: Option<String>,
}

/// Proyección de `ScheduleEntry` que se coloca en una celda (día, franja).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LectureCell {
    pub course: String,
    pub instructor: String,
    pub room: Option<String>,
    pub session_type: SessionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
}

impl From<&ScheduleEntry> for LectureCell {
    fn from(e: &ScheduleEntry) -> Self {
        LectureCell {
            course: e.course.clone(),
            instructor: e.instructor.clone(),
            room: e.room.clone(),
            session_type: e.session_type,
            year: e.year.clone(),
            group_name: e.group_name.clone(),
        }
    }
}

impl fmt::Display for LectureCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.course, self.session_type)?;
        if !self.instructor.is_empty() {
            write!(f, " - {}", self.instructor)?;
        }
        if let Some(room) = self.room.as_deref().filter(|r| !r.is_empty()) {
            write!(f, " @ {}", room)?;
        }
        Ok(())
    }
}

/// día -> franja normalizada -> celdas en orden de llegada
pub type ScheduleMatrix = BTreeMap<String, BTreeMap<String, Vec<LectureCell>>>;

/// Resultado de la agregación: una matriz por hoja, anidada tantas veces como
/// selectores de agrupación se usaron. Se serializa como objetos JSON anidados.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Partition {
    Leaf(ScheduleMatrix),
    Node(BTreeMap<String, Partition>),
}

impl Partition {
    pub fn is_empty(&self) -> bool {
        match self {
            Partition::Leaf(m) => m.is_empty(),
            Partition::Node(n) => n.is_empty(),
        }
    }

    /// Recorre las hojas junto con la ruta de claves que lleva a cada una.
    pub fn leaves(&self) -> Vec<(Vec<String>, &ScheduleMatrix)> {
        let mut out = Vec::new();
        collect_leaves(self, &mut Vec::new(), &mut out);
        out
    }

    /// Matriz en una ruta concreta de particiones (vacía para la vista sin particiones).
    pub fn get(&self, path: &[&str]) -> Option<&ScheduleMatrix> {
        match (self, path.split_first()) {
            (Partition::Leaf(m), None) => Some(m),
            (Partition::Node(n), Some((head, rest))) => n.get(*head)?.get(rest),
            _ => None,
        }
    }
}

fn collect_leaves<'a>(
    p: &'a Partition,
    path: &mut Vec<String>,
    out: &mut Vec<(Vec<String>, &'a ScheduleMatrix)>,
) {
    match p {
        Partition::Leaf(m) => out.push((path.clone(), m)),
        Partition::Node(children) => {
            for (key, child) in children {
                path.push(key.clone());
                collect_leaves(child, path, out);
                path.pop();
            }
        }
    }
}

/// Salida de `aggregate`: matriz (posiblemente particionada) + eje de franjas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregation {
    pub matrix: Partition,
    pub axis: Vec<String>,
    /// Entradas descartadas por no traer horario.
    pub skipped: usize,
}
