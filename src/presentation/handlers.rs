// HTTP request handlers
use crate::domain::dashboard::Dashboard;
use crate::domain::device::Device;
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// List all devices
pub async fn list_devices(State(state): State<Arc<AppState>>) -> Json<Vec<Device>> {
    match state.device_service.list_devices().await {
        Ok(devices) => Json(devices),
        Err(e) => {
            tracing::error!("Error fetching devices: {:#}", e);
            // Return empty list on error
            Json(Vec::new())
        }
    }
}

/// Combined measurements and predictions of a device for one day
pub async fn get_dashboard(
    Path(id): Path<String>,
    Query(query): Query<DateQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Dashboard>, ApiError> {
    let date = parse_date(query.date.as_deref(), Local::now().date_naive())?;
    let dashboard = state.dashboard_service.get_dashboard(&id, date).await;
    Ok(Json(dashboard))
}

/// An absent or empty date means `today`, which is different from it being invalid.
fn parse_date(date: Option<&str>, today: NaiveDate) -> Result<NaiveDate, ApiError> {
    match date.map(str::trim) {
        None | Some("") => Ok(today),
        Some(date) => NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| ApiError::InvalidDate(date.to_string())),
    }
}
