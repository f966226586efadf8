//! Configuración del servicio a partir de variables de entorno (y `.env` si existe).
//!
//! Variables:
//! - `SLOTGRID_BIND`: dirección de escucha (por defecto `127.0.0.1:8080`)
//! - `SLOTGRID_DATA_DIR`: directorio de ficheros de datos (por defecto `data`)
//! - `SLOTGRID_API_BASE`: URL base del backend de horarios (opcional)
//! - `SLOTGRID_API_TOKEN`: token bearer para ese backend (opcional)
//! - `SLOTGRID_CORS_ORIGINS`: orígenes permitidos separados por coma (vacío = cualquiera)
use std::path::PathBuf;

use crate::error::{Result, SlotgridError};

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: String,
    pub data_dir: PathBuf,
    pub api_base: Option<String>,
    pub api_token: Option<String>,
    pub cors_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bind: DEFAULT_BIND.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            api_base: None,
            api_token: None,
            cors_origins: Vec::new(),
        }
    }
}

fn load_dotenv() {
    let _ = dotenv::dotenv();
}

impl AppConfig {
    pub fn from_env() -> Result<AppConfig> {
        load_dotenv();
        AppConfig::from_lookup(|key| std::env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables inyectable (tests).
    pub fn from_lookup<F>(lookup: F) -> Result<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind = non_empty("SLOTGRID_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        if !bind.contains(':') {
            return Err(SlotgridError::Config(format!("SLOTGRID_BIND must be host:port, got '{}'", bind)));
        }

        let api_base = non_empty("SLOTGRID_API_BASE").map(|b| b.trim_end_matches('/').to_string());
        if let Some(base) = &api_base {
            if !(base.starts_with("http://") || base.starts_with("https://")) {
                return Err(SlotgridError::Config(format!("SLOTGRID_API_BASE must be an http(s) URL, got '{}'", base)));
            }
        }

        let cors_origins = non_empty("SLOTGRID_CORS_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(AppConfig {
            bind,
            data_dir: non_empty("SLOTGRID_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            api_base,
            api_token: non_empty("SLOTGRID_API_TOKEN"),
            cors_origins,
        })
    }
}
