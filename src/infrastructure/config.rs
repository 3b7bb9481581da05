use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub api: ApiSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_devices_path")]
    pub devices_path: String,
    #[serde(default = "default_measurements_path")]
    pub measurements_path: String,
    #[serde(default = "default_predictions_path")]
    pub predictions_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Value of `Access-Control-Allow-Origin`; `*` allows any origin.
    #[serde(default = "default_cors_allowed_origin")]
    pub cors_allowed_origin: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            cors_allowed_origin: default_cors_allowed_origin(),
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_cors_allowed_origin() -> String {
    "*".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_devices_path() -> String {
    "/devices".to_string()
}

fn default_measurements_path() -> String {
    "/metrics?date=${date}&deviceId=${device_id}".to_string()
}

fn default_predictions_path() -> String {
    "/predictions?date=${date}&deviceId=${device_id}".to_string()
}

/// Load `config/dashboard.*`, overridden by `DASHBOARD__SECTION__KEY` environment variables.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Replace `${name}` placeholders in a path template with percent-encoded values
pub fn prepare_path(template: &str, vars: &HashMap<&str, String>) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        let placeholder = format!("${{{}}}", key);
        result = result.replace(&placeholder, &urlencoding::encode(value));
    }
    result
}
