use actix_web::{web, HttpResponse, Responder};

use crate::algorithm::analyze;
use crate::api_json::adapt_records;
use crate::api_json::handlers::error_response;
use crate::chart::sessions_per_day_svg;

/// POST /analysis
pub async fn analysis_handler(body: web::Json<serde_json::Value>) -> impl Responder {
    match adapt_records(body.into_inner()) {
        Ok(entries) => HttpResponse::Ok().json(analyze(&entries)),
        Err(e) => error_response(&e),
    }
}

/// POST /analysis/chart -> image/svg+xml
pub async fn analysis_chart_handler(body: web::Json<serde_json::Value>) -> impl Responder {
    let entries = match adapt_records(body.into_inner()) {
        Ok(e) => e,
        Err(e) => return error_response(&e),
    };
    match sessions_per_day_svg(&analyze(&entries)) {
        Ok(svg) => HttpResponse::Ok().content_type("image/svg+xml").body(svg),
        Err(e) => error_response(&e),
    }
}
