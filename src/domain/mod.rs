// Domain layer - Environment data model, free of I/O
pub mod dashboard;
pub mod device;
pub mod environment_metrics;
pub mod environment_table;
pub mod metric_type;
pub mod time_series;
