// Vistas predefinidas: qué particiones externas usa cada pantalla.
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::algorithm::aggregate::KeySelector;
use crate::error::SlotgridError;
use crate::models::ScheduleEntry;

/// Clave usada cuando el campo de agrupación no viene en el registro.
pub const UNASSIGNED: &str = "unassigned";

const STUDENT_KEYS: &[KeySelector<'static>] = &[&student_key];
const PROFESSOR_KEYS: &[KeySelector<'static>] = &[&professor_key];
const CLASSROOM_KEYS: &[KeySelector<'static>] = &[&classroom_key];
const GROUP_KEYS: &[KeySelector<'static>] = &[&year_key, &group_key];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewKind {
    /// Un solo sujeto (un estudiante, estudiante especial, una asignatura): sin particiones.
    Single,
    Students,
    Professors,
    Classrooms,
    /// Año y luego grupo.
    Groups,
}

impl ViewKind {
    pub const ALL: [ViewKind; 5] = [
        ViewKind::Single,
        ViewKind::Students,
        ViewKind::Professors,
        ViewKind::Classrooms,
        ViewKind::Groups,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ViewKind::Single => "single",
            ViewKind::Students => "students",
            ViewKind::Professors => "professors",
            ViewKind::Classrooms => "classrooms",
            ViewKind::Groups => "groups",
        }
    }

    pub fn key_selectors(self) -> &'static [KeySelector<'static>] {
        match self {
            ViewKind::Single => &[],
            ViewKind::Students => STUDENT_KEYS,
            ViewKind::Professors => PROFESSOR_KEYS,
            ViewKind::Classrooms => CLASSROOM_KEYS,
            ViewKind::Groups => GROUP_KEYS,
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewKind {
    type Err = SlotgridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewKind::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SlotgridError::UnknownView(s.to_string()))
    }
}

fn first_present(candidates: &[Option<&String>]) -> String {
    candidates
        .iter()
        .flatten()
        .map(|s| s.trim())
        .find(|s| !s.is_empty())
        .unwrap_or(UNASSIGNED)
        .to_string()
}

pub fn student_key(e: &ScheduleEntry) -> String {
    first_present(&[e.student_id.as_ref(), e.student_name.as_ref()])
}

pub fn professor_key(e: &ScheduleEntry) -> String {
    first_present(&[e.professor_name.as_ref(), Some(&e.instructor)])
}

pub fn classroom_key(e: &ScheduleEntry) -> String {
    first_present(&[e.classroom_name.as_ref(), e.room.as_ref()])
}

pub fn year_key(e: &ScheduleEntry) -> String {
    first_present(&[e.year.as_ref()])
}

pub fn group_key(e: &ScheduleEntry) -> String {
    first_present(&[e.group_name.as_ref()])
}
