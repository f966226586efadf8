//! Adaptador de entrada: registros JSON crudos del backend -> `ScheduleEntry`.
//!
//! Cada endpoint del backend nombra los campos a su manera (`time_slot` vs
//! `timeSlot`, `name_professor` vs `nameProfessorOrTeachingAssistant`...). Aquí
//! se concentra esa traducción para que el agregador sólo vea la forma canónica.
//!
//! # Ejemplo de entrada
//! ```json
//! [
//!   {"name_course": "Algorithms", "day": "1", "time_slot": "9:00 - 11:00",
//!    "name_professor": "Dr. Salem", "room": "B12", "type": "lecture",
//!    "year": 2, "name_group": "G1"},
//!   [ {"nameCourse": "Networks", "day": 3, "timeSlot": "1-3", "type": "section"} ]
//! ]
//! ```
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Result, SlotgridError};
use crate::models::{ScheduleEntry, SessionType};

pub mod handlers;

pub type RawRecord = Map<String, Value>;

pub const COURSE_FIELDS: &[&str] = &["name_course", "nameCourse", "course_name", "courseName", "course"];
pub const DAY_FIELDS: &[&str] = &["day"];
pub const TIME_SLOT_FIELDS: &[&str] = &["time_slot", "timeSlot", "time"];
pub const INSTRUCTOR_FIELDS: &[&str] = &[
	"name_professor_or_teaching_assistant",
	"nameProfessorOrTeachingAssistant",
	"name_professor",
	"nameProfessor",
	"professorName",
	"instructor",
];
pub const ROOM_FIELDS: &[&str] = &["room", "class_room_name", "classRoomName"];
pub const TYPE_FIELDS: &[&str] = &["type", "session_type", "sessionType"];
pub const YEAR_FIELDS: &[&str] = &["year"];
pub const GROUP_FIELDS: &[&str] = &["name_group", "group_name", "groupName"];
pub const STUDENT_ID_FIELDS: &[&str] = &["studentId", "student_id"];
pub const STUDENT_NAME_FIELDS: &[&str] = &["studentName", "student_name"];
pub const CLASSROOM_FIELDS: &[&str] = &["classRoomName", "class_room_name"];
pub const PROFESSOR_FIELDS: &[&str] = &["name_professor", "professorName", "nameProfessor"];

/// Aplana la respuesta de la API: debe ser un array; los elementos que son a su
/// vez arrays se expanden un nivel. Lo que no sea objeto se ignora.
pub fn flatten_records(value: Value) -> Result<Vec<RawRecord>> {
	let Value::Array(items) = value else {
		return Err(SlotgridError::InvalidInput(format!(
			"expected a JSON array of schedule records, got {}",
			json_kind(&value)
		)));
	};

	let mut out = Vec::with_capacity(items.len());
	for item in items {
		match item {
			Value::Object(obj) => out.push(obj),
			Value::Array(inner) => {
				for nested in inner {
					match nested {
						Value::Object(obj) => out.push(obj),
						other => debug!(kind = json_kind(&other), "ignoring non-object nested record"),
					}
				}
			}
			other => debug!(kind = json_kind(&other), "ignoring non-object record"),
		}
	}
	Ok(out)
}

fn json_kind(v: &Value) -> &'static str {
	match v {
		Value::Null => "null",
		Value::Bool(_) => "bool",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

/// Primer alias presente y no nulo, convertido a texto.
pub fn field_value(record: &RawRecord, aliases: &[&str]) -> Option<String> {
	aliases.iter().find_map(|k| match record.get(*k) {
		Some(Value::String(s)) => Some(s.clone()),
		Some(Value::Number(n)) => Some(n.to_string()),
		Some(Value::Bool(b)) => Some(b.to_string()),
		_ => None,
	})
}

fn trimmed(record: &RawRecord, aliases: &[&str]) -> Option<String> {
	field_value(record, aliases).map(|s| s.trim().to_string())
}

/// Traduce un registro crudo a la forma canónica. El horario se conserva tal
/// cual: la normalización y el descarte de vacíos son cosa del agregador.
pub fn adapt_record(record: &RawRecord) -> ScheduleEntry {
	ScheduleEntry {
		course: trimmed(record, COURSE_FIELDS).unwrap_or_default(),
		day: trimmed(record, DAY_FIELDS).unwrap_or_default(),
		time_slot_raw: field_value(record, TIME_SLOT_FIELDS),
		instructor: trimmed(record, INSTRUCTOR_FIELDS).unwrap_or_default(),
		room: trimmed(record, ROOM_FIELDS),
		session_type: SessionType::from_raw(field_value(record, TYPE_FIELDS).as_deref()),
		year: trimmed(record, YEAR_FIELDS),
		group_name: trimmed(record, GROUP_FIELDS),
		student_id: trimmed(record, STUDENT_ID_FIELDS),
		student_name: trimmed(record, STUDENT_NAME_FIELDS),
		classroom_name: trimmed(record, CLASSROOM_FIELDS),
		professor_name: trimmed(record, PROFESSOR_FIELDS),
	}
}

pub fn adapt_records(value: Value) -> Result<Vec<ScheduleEntry>> {
	let records = flatten_records(value)?;
	debug!(count = records.len(), "adapting raw schedule records");
	Ok(records.iter().map(adapt_record).collect())
}

/// Parsea un cuerpo JSON de texto y lo adapta.
pub fn parse_entries(json_str: &str) -> Result<Vec<ScheduleEntry>> {
	let value: Value = serde_json::from_str(json_str)?;
	adapt_records(value)
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_field_value_takes_first_alias_present() {
		let rec = json!({"timeSlot": "8:00-9:00", "time_slot": null, "time": "x"});
		let Value::Object(rec) = rec else { unreachable!() };
		assert_eq!(field_value(&rec, TIME_SLOT_FIELDS), Some("8:00-9:00".to_string()));
	}

	#[test]
	fn test_json_kind() {
		assert_eq!(json_kind(&json!(1)), "number");
		assert_eq!(json_kind(&json!({})), "object");
	}
}
