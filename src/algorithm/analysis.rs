//! Resúmenes de sólo lectura sobre un conjunto de sesiones (pantallas de análisis).
//!
//! Los choques de sala se informan, no se corrigen: la matriz agregada sigue
//! mostrando todas las entradas.
use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::algorithm::normalize::normalize_time_range;
use crate::models::{day_sort_key, DayCode, ScheduleEntry, SessionType};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayLoad {
    pub day: String,
    pub label: String,
    pub sessions: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstructorLoad {
    pub instructor: String,
    pub sessions: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomClash {
    pub day: String,
    pub slot: String,
    pub room: String,
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleAnalysis {
    pub total_entries: usize,
    pub scheduled: usize,
    pub skipped: usize,
    pub lectures: usize,
    pub sections: usize,
    pub per_day: Vec<DayLoad>,
    pub per_instructor: Vec<InstructorLoad>,
    pub room_clashes: Vec<RoomClash>,
}

pub fn analyze(entries: &[ScheduleEntry]) -> ScheduleAnalysis {
    let mut per_day: HashMap<String, usize> = HashMap::new();
    let mut per_instructor: HashMap<String, usize> = HashMap::new();
    // (día, franja, sala) -> cursos
    let mut rooms: BTreeMap<(String, String, String), Vec<String>> = BTreeMap::new();
    let (mut lectures, mut sections, mut skipped) = (0usize, 0usize, 0usize);

    for e in entries {
        let Some(raw) = e.time_slot_raw.as_deref().filter(|r| !r.is_empty()) else {
            skipped += 1;
            continue;
        };
        let slot = normalize_time_range(Some(raw));

        *per_day.entry(e.day.clone()).or_insert(0) += 1;
        match e.session_type {
            SessionType::Lecture => lectures += 1,
            SessionType::Section => sections += 1,
        }
        if !e.instructor.trim().is_empty() {
            *per_instructor.entry(e.instructor.trim().to_string()).or_insert(0) += 1;
        }
        if let Some(room) = e.room.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
            rooms
                .entry((e.day.clone(), slot, room.to_string()))
                .or_default()
                .push(e.course.clone());
        }
    }

    let mut days: Vec<DayLoad> = per_day
        .into_iter()
        .map(|(day, sessions)| DayLoad {
            label: crate::models::day_label(&day),
            day,
            sessions,
        })
        .collect();
    days.sort_by_key(|d| day_sort_key(&d.day));

    let mut instructors: Vec<InstructorLoad> = per_instructor
        .into_iter()
        .map(|(instructor, sessions)| InstructorLoad { instructor, sessions })
        .collect();
    instructors.sort_by(|a, b| b.sessions.cmp(&a.sessions).then_with(|| a.instructor.cmp(&b.instructor)));

    let room_clashes = rooms
        .into_iter()
        .filter(|(_, courses)| courses.len() > 1)
        .map(|((day, slot, room), courses)| RoomClash { day, slot, room, courses })
        .collect();

    ScheduleAnalysis {
        total_entries: entries.len(),
        scheduled: entries.len() - skipped,
        skipped,
        lectures,
        sections,
        per_day: days,
        per_instructor: instructors,
        room_clashes,
    }
}

/// Sesiones por día en el orden sábado..viernes, con cero para los días sin clases.
pub fn sessions_per_weekday(analysis: &ScheduleAnalysis) -> Vec<(DayCode, usize)> {
    DayCode::ALL
        .iter()
        .map(|d| {
            let n = analysis
                .per_day
                .iter()
                .find(|l| l.day.trim() == d.code())
                .map(|l| l.sessions)
                .unwrap_or(0);
            (*d, n)
        })
        .collect()
}
