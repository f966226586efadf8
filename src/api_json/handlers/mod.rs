use actix_web::HttpResponse;
use serde_json::json;
use tracing::warn;

use crate::algorithm::ViewKind;
use crate::error::SlotgridError;

pub mod analysis;
pub mod datafiles;
pub mod docs;
pub mod schedule;

pub use analysis::*;
pub use datafiles::*;
pub use docs::*;
pub use schedule::*;

/// Traduce un error del crate a respuesta `{"error": ...}` con el status adecuado.
pub fn error_response(e: &SlotgridError) -> HttpResponse {
    let body = json!({"error": e.to_string()});
    match e {
        SlotgridError::InvalidInput(_)
        | SlotgridError::UnknownView(_)
        | SlotgridError::UnknownFormat(_)
        | SlotgridError::Json(_) => HttpResponse::BadRequest().json(body),
        SlotgridError::NotFound(_) => HttpResponse::NotFound().json(body),
        SlotgridError::Remote(_) => HttpResponse::BadGateway().json(body),
        SlotgridError::Config(_) => HttpResponse::ServiceUnavailable().json(body),
        _ => {
            warn!(error = %e, "request failed");
            HttpResponse::InternalServerError().json(body)
        }
    }
}

pub(crate) fn parse_view(raw: &str) -> Result<ViewKind, HttpResponse> {
    raw.parse::<ViewKind>().map_err(|e| error_response(&e))
}
