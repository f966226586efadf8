use actix_web::{http::header, web, HttpResponse, Responder};
use serde_json::json;
use std::collections::HashMap;
use tracing::info;

use crate::algorithm::aggregate_view;
use crate::api_json::adapt_records;
use crate::api_json::handlers::{error_response, parse_view};
use crate::config::AppConfig;
use crate::export::{export_aggregation, export_filename, ExportFormat};
use crate::models::ScheduleEntry;
use crate::source::ScheduleSource;

fn non_empty(q: &HashMap<String, String>, key: &str) -> Option<String> {
    q.get(key).map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn aggregated_response(view: &str, entries: &[ScheduleEntry]) -> HttpResponse {
    let kind = match parse_view(view) {
        Ok(k) => k,
        Err(resp) => return resp,
    };
    let agg = aggregate_view(entries, kind);
    info!(view = %kind, entries = entries.len(), slots = agg.axis.len(), skipped = agg.skipped, "schedule aggregated");
    HttpResponse::Ok().json(agg)
}

/// POST /schedule/{view}
/// Cuerpo: array JSON de registros crudos (puede venir anidado un nivel).
pub async fn schedule_handler(view: web::Path<String>, body: web::Json<serde_json::Value>) -> impl Responder {
    let entries = match adapt_records(body.into_inner()) {
        Ok(e) => e,
        Err(e) => return error_response(&e),
    };
    aggregated_response(&view, &entries)
}

/// POST /schedule/{view}/export?format=csv|xlsx|docx|json
pub async fn schedule_export_handler(
    view: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
    body: web::Json<serde_json::Value>,
) -> impl Responder {
    let kind = match parse_view(&view) {
        Ok(k) => k,
        Err(resp) => return resp,
    };
    let format = match non_empty(&query, "format").unwrap_or_else(|| "xlsx".to_string()).parse::<ExportFormat>() {
        Ok(f) => f,
        Err(e) => return error_response(&e),
    };
    let entries = match adapt_records(body.into_inner()) {
        Ok(e) => e,
        Err(e) => return error_response(&e),
    };

    let agg = aggregate_view(&entries, kind);
    let title = non_empty(&query, "title").unwrap_or_else(|| format!("{} timetable", kind));
    match export_aggregation(&agg, format, &title) {
        Ok(bytes) => {
            let filename = export_filename(kind.as_str(), format);
            info!(view = %kind, %format, bytes = bytes.len(), "schedule exported");
            HttpResponse::Ok()
                .content_type(format.mime_type())
                .append_header((header::CONTENT_DISPOSITION, format!("attachment; filename=\"{}\"", filename)))
                .body(bytes)
        }
        Err(e) => error_response(&e),
    }
}

/// GET /schedule/{view}/file?name=horario.json[&sheet=Hoja1]
pub async fn schedule_file_handler(
    cfg: web::Data<AppConfig>,
    view: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let Some(name) = non_empty(&query, "name") else {
        return HttpResponse::BadRequest().json(json!({"error": "missing name parameter"}));
    };
    let sheet = non_empty(&query, "sheet");
    let dir = cfg.data_dir.clone();
    // lectura de disco + calamine: fuera del hilo del runtime
    match web::block(move || crate::datafiles::load_entries(&dir, &name, sheet.as_deref())).await {
        Ok(Ok(entries)) => aggregated_response(&view, &entries),
        Ok(Err(e)) => error_response(&e),
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": format!("failed to load datafile: {}", e)})),
    }
}

/// GET /schedule/{view}/remote?path=/api/timetable/students
/// Descarga los registros del backend configurado y los agrega.
pub async fn schedule_remote_handler(
    cfg: web::Data<AppConfig>,
    view: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    if let Err(resp) = parse_view(&view) {
        return resp;
    }
    let Some(path) = non_empty(&query, "path") else {
        return HttpResponse::BadRequest().json(json!({"error": "missing path parameter"}));
    };
    let source = match ScheduleSource::from_config(&cfg) {
        Ok(s) => s,
        Err(e) => return error_response(&e),
    };
    match source.fetch_entries(&path).await {
        Ok(entries) => aggregated_response(&view, &entries),
        Err(e) => error_response(&e),
    }
}
