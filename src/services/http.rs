use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::Config;
use crate::error::{AppError, FetchError, FetchResult, Result};
use crate::models::{AnalysisRecord, InventionName, InventionSummary, Pattern, TimelineEntry};

use super::AnalysisGateway;

const USER_AGENT: &str = concat!("invention-origins/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    invention_name: &'a str,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

/// [`AnalysisGateway`] over the service's JSON HTTP API.
pub struct HttpGateway {
    client: Client,
    base_url: Url,
    analysis_timeout: Duration,
}

impl HttpGateway {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: parse_base_url(&config.api_base_url)?,
            analysis_timeout: Duration::from_secs(config.analysis_timeout_secs),
        })
    }

    fn endpoint(&self, path: &str) -> FetchResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| FetchError::Transport(format!("invalid endpoint {path}: {e}")))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> FetchResult<T> {
        let url = self.endpoint(path)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::from_status(response.status()));
        }

        Ok(response.json().await?)
    }

    /// Ping the service's health endpoint. Any status other than
    /// `healthy` is an error.
    pub async fn health(&self) -> Result<String> {
        let health: HealthResponse = self.get_json("health").await?;
        ensure_healthy(health.status)
    }
}

fn ensure_healthy(status: String) -> Result<String> {
    if status != "healthy" {
        return Err(anyhow::anyhow!("service reports status {:?}", status).into());
    }
    Ok(status)
}

#[async_trait]
impl AnalysisGateway for HttpGateway {
    async fn list_inventions(&self) -> FetchResult<Vec<InventionSummary>> {
        self.get_json("inventions").await
    }

    async fn list_patterns(&self) -> FetchResult<Vec<Pattern>> {
        self.get_json("patterns").await
    }

    async fn list_timeline(&self) -> FetchResult<Vec<TimelineEntry>> {
        self.get_json("patterns/timeline").await
    }

    async fn get_analysis(&self, id: i64) -> FetchResult<AnalysisRecord> {
        self.get_json(&format!("inventions/{id}")).await
    }

    async fn create_analysis(&self, name: &InventionName) -> FetchResult<AnalysisRecord> {
        let url = self.endpoint("inventions/analyze")?;
        tracing::debug!("POST {} for {}", url, name);

        let response = self
            .client
            .post(url)
            .timeout(self.analysis_timeout)
            .json(&AnalyzeRequest {
                invention_name: name.as_str(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::debug!("Analyze failed with {}: {}", status, body);
            return Err(FetchError::from_status(status));
        }

        Ok(response.json().await?)
    }
}

/// Relative endpoint paths join under the base, so it must end in `/`.
fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw).map_err(|e| AppError::Config(format!("api_base_url: {e}")))?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
