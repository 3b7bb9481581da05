// Repository trait for environment data access
use crate::domain::device::Device;
use crate::domain::time_series::TimeSeries;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait EnvironmentRepository: Send + Sync {
    /// List all registered devices
    async fn list_devices(&self) -> anyhow::Result<Vec<Device>>;

    /// Measurements recorded by the device on the given day
    async fn fetch_measurements(&self, device_id: &str, date: NaiveDate) -> anyhow::Result<TimeSeries>;

    /// Model predictions for the device on the given day
    async fn fetch_predictions(&self, device_id: &str, date: NaiveDate) -> anyhow::Result<TimeSeries>;
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use anyhow::anyhow;

    /// In-memory repository; a `None` series makes the matching fetch fail.
    #[derive(Default)]
    pub struct InMemoryRepository {
        pub devices: Vec<Device>,
        pub measurements: Option<TimeSeries>,
        pub predictions: Option<TimeSeries>,
    }

    #[async_trait]
    impl EnvironmentRepository for InMemoryRepository {
        async fn list_devices(&self) -> anyhow::Result<Vec<Device>> {
            Ok(self.devices.clone())
        }

        async fn fetch_measurements(&self, _device_id: &str, _date: NaiveDate) -> anyhow::Result<TimeSeries> {
            self.measurements.clone().ok_or_else(|| anyhow!("measurements unavailable"))
        }

        async fn fetch_predictions(&self, _device_id: &str, _date: NaiveDate) -> anyhow::Result<TimeSeries> {
            self.predictions.clone().ok_or_else(|| anyhow!("predictions unavailable"))
        }
    }
}
