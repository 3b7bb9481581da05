// Dashboard domain model
use super::environment_metrics::{EnvironmentMetrics, LegendEntry};
use super::environment_table::{TableRow, build_table};
use super::metric_type::MetricType;
use super::time_series::{TIMESTAMP_KEY, TimeSeries};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub device_id: String,
    pub date: String,
    pub charts: Vec<ChartData>,
    pub data: TimeSeries,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub metric_type: MetricType,
    pub title: &'static str,
    pub x_key: &'static str,
    pub series: Vec<LegendEntry>,
}

impl ChartData {
    fn new(metric_type: MetricType, metrics: &EnvironmentMetrics) -> Self {
        Self {
            metric_type,
            title: metric_type.label(),
            x_key: TIMESTAMP_KEY,
            series: metrics.legend_for_metric_type(metric_type.name()),
        }
    }
}

impl Dashboard {
    pub fn new(device_id: String, date: String, metrics: &EnvironmentMetrics) -> Self {
        let charts = MetricType::ALL
            .into_iter()
            .map(|metric_type| ChartData::new(metric_type, metrics))
            .collect();
        let rows = build_table(metrics.data_set());
        let data = metrics.combined_metrics().clone();

        Self {
            device_id,
            date,
            charts,
            data,
            rows,
        }
    }
}
