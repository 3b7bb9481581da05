// Application layer - Use cases over the environment repository
pub mod dashboard_service;
pub mod device_service;
pub mod environment_repository;
