use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing::info;

use crate::api_json::handlers::*;
use crate::config::AppConfig;

/// Límite de cuerpo JSON: los listados de horarios superan holgadamente el valor por defecto (32 KiB).
const JSON_LIMIT: usize = 8 * 1024 * 1024;

/// Registra todas las rutas (compartido por el servidor y los tests).
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().limit(JSON_LIMIT))
        .route("/health", web::get().to(health_handler))
        .route("/help", web::get().to(help_handler))
        .route("/schedule/{view}", web::post().to(schedule_handler))
        .route("/schedule/{view}/export", web::post().to(schedule_export_handler))
        .route("/schedule/{view}/file", web::get().to(schedule_file_handler))
        .route("/schedule/{view}/remote", web::get().to(schedule_remote_handler))
        .route("/analysis", web::post().to(analysis_handler))
        .route("/analysis/chart", web::post().to(analysis_chart_handler))
        .route("/datafiles", web::get().to(datafiles_list_handler))
        .route("/datafiles", web::post().to(datafiles_upload_handler))
        .route("/datafiles", web::delete().to(datafiles_delete_handler))
        .route("/datafiles/download", web::get().to(datafiles_download_handler));
}

fn cors_for(origins: &[String]) -> Cors {
    if origins.is_empty() {
        return Cors::permissive();
    }
    origins
        .iter()
        .fold(Cors::default(), |c, o| c.allowed_origin(o))
        .allow_any_method()
        .allow_any_header()
        .expose_headers(vec![actix_web::http::header::CONTENT_DISPOSITION])
}

pub async fn run_server(config: AppConfig) -> std::io::Result<()> {
    let bind = config.bind.clone();
    info!(%bind, data_dir = ?config.data_dir, remote = config.api_base.is_some(), "starting slotgrid server");

    let data = web::Data::new(config);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(cors_for(&data.cors_origins))
            .app_data(data.clone())
            .configure(routes)
    })
    .bind(bind.as_str())?
    .run()
    .await
}
