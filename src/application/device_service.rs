// Device service - Use case for listing devices
use crate::application::environment_repository::EnvironmentRepository;
use crate::domain::device::Device;
use std::sync::Arc;

#[derive(Clone)]
pub struct DeviceService {
    repository: Arc<dyn EnvironmentRepository>,
}

impl DeviceService {
    pub fn new(repository: Arc<dyn EnvironmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_devices(&self) -> anyhow::Result<Vec<Device>> {
        let devices = self.repository.list_devices().await?;
        tracing::debug!("Found {} devices", devices.len());
        Ok(devices)
    }
}
