use actix_multipart::Multipart;
use actix_web::{http::header, web, HttpResponse, Responder};
use futures_util::stream::StreamExt;
use serde_json::json;
use std::collections::HashMap;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

use crate::api_json::handlers::error_response;
use crate::config::AppConfig;
use crate::datafiles::{is_safe_name, is_supported_name, list_datafiles, resolve_datafile};

fn name_param(query: &HashMap<String, String>) -> Result<String, HttpResponse> {
    match query.get("name") {
        Some(n) if !n.trim().is_empty() => Ok(n.trim().to_string()),
        _ => Err(HttpResponse::BadRequest().json(json!({"error": "missing name parameter"}))),
    }
}

/// GET /datafiles
pub async fn datafiles_list_handler(cfg: web::Data<AppConfig>) -> impl Responder {
    let dir = cfg.data_dir.clone();
    match web::block(move || list_datafiles(&dir)).await {
        Ok(Ok(files)) => HttpResponse::Ok().json(json!({"files": files})),
        Ok(Err(e)) => error_response(&e),
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": format!("failed to list datafiles: {}", e)})),
    }
}

/// POST /datafiles (multipart)
/// Sólo se guardan ficheros `.json`/`.xlsx` con nombre seguro; el resto se
/// devuelve en `rejected`. Una subida interrumpida no deja el fichero a medias.
pub async fn datafiles_upload_handler(cfg: web::Data<AppConfig>, mut payload: Multipart) -> impl Responder {
    let base = cfg.data_dir.clone();
    if let Err(e) = tokio::fs::create_dir_all(&base).await {
        return HttpResponse::InternalServerError().json(json!({"error": format!("failed to create datafiles dir: {}", e)}));
    }

    let mut saved: Vec<String> = Vec::new();
    let mut rejected: Vec<String> = Vec::new();
    while let Some(field_res) = payload.next().await {
        // un error del stream multipart no es recuperable: se corta aquí
        let mut field = match field_res {
            Ok(f) => f,
            Err(e) => {
                warn!(error = %e, "multipart field error");
                break;
            }
        };

        let filename = field
            .content_disposition()
            .get_filename()
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|| format!("upload-{}.json", chrono::Utc::now().timestamp_millis()));

        if !is_safe_name(&filename) {
            warn!(%filename, "rejecting upload with unsafe name");
            rejected.push(filename);
            continue;
        }
        if !is_supported_name(&filename) {
            warn!(%filename, "rejecting upload with unsupported extension");
            rejected.push(filename);
            continue;
        }

        let filepath = base.join(&filename);
        let mut f = match tokio::fs::File::create(&filepath).await {
            Ok(f) => f,
            Err(e) => {
                warn!(error = %e, %filename, "failed to create upload file");
                continue;
            }
        };

        let mut complete = true;
        while let Some(chunk) = field.next().await {
            let written = match chunk {
                Ok(bytes) => f.write_all(&bytes).await.map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            if let Err(e) = written {
                warn!(error = %e, %filename, "upload interrupted");
                complete = false;
                break;
            }
        }
        if complete {
            complete = f.flush().await.is_ok();
        }
        drop(f);

        if complete {
            info!(%filename, "datafile uploaded");
            saved.push(filename);
        } else {
            if let Err(e) = tokio::fs::remove_file(&filepath).await {
                warn!(error = %e, %filename, "failed to remove partial upload");
            }
            rejected.push(filename);
        }
    }

    HttpResponse::Ok().json(json!({"status": "ok", "saved": saved, "rejected": rejected}))
}

/// GET /datafiles/download?name=...
pub async fn datafiles_download_handler(cfg: web::Data<AppConfig>, query: web::Query<HashMap<String, String>>) -> impl Responder {
    let name = match name_param(&query) {
        Ok(n) => n,
        Err(resp) => return resp,
    };
    let path = match resolve_datafile(&cfg.data_dir, &name) {
        Ok(p) => p,
        Err(e) => return error_response(&e),
    };

    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let mime = match path.extension().and_then(std::ffi::OsStr::to_str) {
                Some("xlsx") => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
                Some("json") => "application/json",
                _ => "application/octet-stream",
            };
            HttpResponse::Ok()
                .content_type(mime)
                .append_header((header::CONTENT_DISPOSITION, format!("attachment; filename=\"{}\"", name)))
                .body(bytes)
        }
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": format!("failed to read file: {}", e)})),
    }
}

/// DELETE /datafiles?name=...
pub async fn datafiles_delete_handler(cfg: web::Data<AppConfig>, query: web::Query<HashMap<String, String>>) -> impl Responder {
    let name = match name_param(&query) {
        Ok(n) => n,
        Err(resp) => return resp,
    };
    let path = match resolve_datafile(&cfg.data_dir, &name) {
        Ok(p) => p,
        Err(e) => return error_response(&e),
    };
    match tokio::fs::remove_file(&path).await {
        Ok(_) => {
            info!(%name, "datafile deleted");
            HttpResponse::Ok().json(json!({"status": "deleted", "name": name}))
        }
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": format!("failed to delete file: {}", e)})),
    }
}
