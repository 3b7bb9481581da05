// IoT API repository implementation
use crate::application::environment_repository::EnvironmentRepository;
use crate::domain::device::Device;
use crate::domain::time_series::{Record, TimeSeries};
use crate::infrastructure::config::{ApiSettings, prepare_path};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ApiRepository {
    client: reqwest::Client,
    base_url: String,
    devices_path: String,
    measurements_path: String,
    predictions_path: String,
}

#[derive(Debug, Deserialize)]
struct EntriesResponse {
    #[serde(default)]
    entries: Vec<Record>,
}

#[derive(Debug, Deserialize)]
struct DevicesResponse {
    #[serde(default)]
    devices: Vec<Device>,
}

impl ApiRepository {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            devices_path: settings.devices_path.clone(),
            measurements_path: settings.measurements_path.clone(),
            predictions_path: settings.predictions_path.clone(),
        })
    }

    fn build_series_url(&self, template: &str, device_id: &str, date: NaiveDate) -> String {
        let mut vars = HashMap::new();
        vars.insert("device_id", device_id.to_string());
        vars.insert("date", date.to_string());
        format!("{}{}", self.base_url, prepare_path(template, &vars))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("Requesting {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to send request to the IoT API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("IoT API request failed with status {}: {}", status, body);
        }

        response
            .json::<T>()
            .await
            .context("Failed to parse IoT API response")
    }

    async fn fetch_series(&self, template: &str, device_id: &str, date: NaiveDate) -> Result<TimeSeries> {
        let url = self.build_series_url(template, device_id, date);
        let response: EntriesResponse = self.get_json(&url).await?;
        Ok(TimeSeries::new(response.entries, Some(date.to_string())))
    }
}

#[async_trait]
impl EnvironmentRepository for ApiRepository {
    async fn list_devices(&self) -> Result<Vec<Device>> {
        let url = format!("{}{}", self.base_url, self.devices_path);
        let response: DevicesResponse = self.get_json(&url).await?;
        Ok(response.devices)
    }

    async fn fetch_measurements(&self, device_id: &str, date: NaiveDate) -> Result<TimeSeries> {
        self.fetch_series(&self.measurements_path, device_id, date)
            .await
            .context("Failed to fetch measurements")
    }

    async fn fetch_predictions(&self, device_id: &str, date: NaiveDate) -> Result<TimeSeries> {
        self.fetch_series(&self.predictions_path, device_id, date)
            .await
            .context("Failed to fetch predictions")
    }
}
