// Dashboard service - Use case for building a device's daily dashboard
use crate::application::environment_repository::EnvironmentRepository;
use crate::domain::dashboard::Dashboard;
use crate::domain::environment_metrics::EnvironmentMetrics;
use crate::domain::time_series::TimeSeries;
use chrono::NaiveDate;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn EnvironmentRepository>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn EnvironmentRepository>) -> Self {
        Self { repository }
    }

    /// Fetch measurements and predictions for the day and combine them.
    ///
    /// A failed fetch is logged and treated as missing data, so this never fails.
    pub async fn get_dashboard(&self, device_id: &str, date: NaiveDate) -> Dashboard {
        let (measurements, predictions) = tokio::join!(
            self.repository.fetch_measurements(device_id, date),
            self.repository.fetch_predictions(device_id, date),
        );

        let measurements = Self::ok_or_log(measurements, "measurements", device_id, date);
        let predictions = Self::ok_or_log(predictions, "predictions", device_id, date);

        let mut metrics = EnvironmentMetrics::new();
        metrics.combine_metrics(measurements, predictions);

        Dashboard::new(device_id.to_string(), date.to_string(), &metrics)
    }

    fn ok_or_log(
        result: anyhow::Result<TimeSeries>,
        kind: &str,
        device_id: &str,
        date: NaiveDate,
    ) -> Option<TimeSeries> {
        match result {
            Ok(series) => {
                tracing::debug!("Fetched {} {} for {} on {}", series.len(), kind, device_id, date);
                Some(series)
            }
            Err(e) => {
                tracing::warn!("Error fetching {} for {} on {}: {:#}", kind, device_id, date, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::environment_repository::testing::InMemoryRepository;
    use serde_json::json;

    fn series(value: serde_json::Value) -> TimeSeries {
        TimeSeries::new(serde_json::from_value(value).unwrap(), Some("2024-03-01".to_string()))
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[tokio::test]
    async fn test_get_dashboard_combines_both_series() {
        let repository = InMemoryRepository {
            measurements: Some(series(json!([{"t": 1, "tmp": 20}, {"t": 2, "tmp": 21}]))),
            predictions: Some(series(json!([{"t": 1, "tmp": 22}, {"t": 2, "tmp": 23}, {"t": 3, "tmp": 24}]))),
            ..Default::default()
        };
        let service = DashboardService::new(Arc::new(repository));

        let dashboard = service.get_dashboard("rpi-4", date()).await;
        assert_eq!(dashboard.device_id, "rpi-4");
        assert_eq!(dashboard.date, "2024-03-01");
        assert_eq!(dashboard.data.len(), 2);
        assert_eq!(dashboard.data.data_points[1]["tmpPrediction"], 23);
        assert_eq!(dashboard.charts[0].series.len(), 2);
    }

    #[tokio::test]
    async fn test_get_dashboard_with_failed_measurements() {
        let repository = InMemoryRepository {
            predictions: Some(series(json!([{"t": 1, "hum": 50}]))),
            ..Default::default()
        };
        let service = DashboardService::new(Arc::new(repository));

        let dashboard = service.get_dashboard("rpi-4", date()).await;
        assert_eq!(dashboard.data, series(json!([{"t": 1, "humPrediction": 50}])));
    }

    #[tokio::test]
    async fn test_get_dashboard_with_everything_failing() {
        let service = DashboardService::new(Arc::new(InMemoryRepository::default()));

        let dashboard = service.get_dashboard("rpi-4", date()).await;
        assert!(dashboard.data.is_empty());
        assert_eq!(dashboard.data.date.as_deref(), None);
        assert!(dashboard.rows.is_empty());
    }
}
