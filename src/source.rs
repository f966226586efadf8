//! Cliente del backend de horarios (la fuente de datos remota).
//!
//! La autenticación vive aquí y en `AppConfig`; el núcleo sólo recibe el
//! array ya descargado y adaptado.
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info};

use crate::api_json::adapt_records;
use crate::config::AppConfig;
use crate::error::{Result, SlotgridError};
use crate::models::ScheduleEntry;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ScheduleSource {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ScheduleSource {
    pub fn new(base_url: &str, token: Option<String>) -> Result<ScheduleSource> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(ScheduleSource {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn from_config(cfg: &AppConfig) -> Result<ScheduleSource> {
        let base = cfg
            .api_base
            .as_deref()
            .ok_or_else(|| SlotgridError::Config("SLOTGRID_API_BASE is not set".to_string()))?;
        ScheduleSource::new(base, cfg.api_token.clone())
    }

    /// URL absoluta para un path del backend; se rechazan URLs absolutas para
    /// no reenviar el token a otro host.
    pub fn url_for(&self, path: &str) -> Result<String> {
        let path = path.trim();
        if path.contains("://") {
            return Err(SlotgridError::InvalidInput(format!("expected a path relative to the API base, got '{}'", path)));
        }
        Ok(format!("{}/{}", self.base_url, path.trim_start_matches('/')))
    }

    pub async fn fetch_json(&self, path: &str) -> Result<Value> {
        let url = self.url_for(path)?;
        let mut req = self.client.get(&url);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        debug!(%url, "fetching schedule records");
        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SlotgridError::Remote(format!("GET {} returned {}", url, status)));
        }
        Ok(resp.json::<Value>().await?)
    }

    pub async fn fetch_entries(&self, path: &str) -> Result<Vec<ScheduleEntry>> {
        let value = self.fetch_json(path).await?;
        let entries = adapt_records(value)?;
        info!(path, count = entries.len(), "fetched schedule entries");
        Ok(entries)
    }
}
