use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::algorithm::ViewKind;

pub async fn health_handler() -> impl Responder {
    HttpResponse::Ok().json(json!({"status": "ok", "version": env!("CARGO_PKG_VERSION")}))
}

/// GET /help
pub async fn help_handler() -> impl Responder {
    let example = json!([
        {"name_course": "Algorithms", "day": "1", "time_slot": "9:00 - 11:00",
         "name_professor": "Dr. Salem", "room": "B12", "type": "lecture", "year": 2, "name_group": "G1"},
        {"nameCourse": "Networks", "day": 3, "timeSlot": "1-3",
         "nameProfessorOrTeachingAssistant": "Eng. Hana", "classRoomName": "Lab 4", "type": "section"}
    ]);

    let views: Vec<&str> = ViewKind::ALL.iter().map(|v| v.as_str()).collect();

    HttpResponse::Ok().json(json!({
        "description": "Normaliza franjas horarias y agrupa registros de horario en una rejilla día x franja. POST /schedule/{view} acepta el array crudo del backend (ver 'post_example').",
        "views": views,
        "export_formats": ["csv", "xlsx", "docx", "json"],
        "post_example": example,
        "endpoints": [
            "POST /schedule/{view}",
            "POST /schedule/{view}/export?format=xlsx",
            "GET /schedule/{view}/file?name=horario.json",
            "GET /schedule/{view}/remote?path=/api/timetable",
            "POST /analysis",
            "POST /analysis/chart",
            "GET /datafiles",
            "POST /datafiles",
            "GET /datafiles/download?name=...",
            "DELETE /datafiles?name=..."
        ],
        "note": "Días: \"1\"..\"7\" = sábado..viernes. Horas 1-5 sin AM/PM se interpretan como de la tarde."
    }))
}
