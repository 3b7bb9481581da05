// Environment metrics - combines measured and predicted series for charting
use super::metric_type::{MEASUREMENT_COLOR, MetricType, PREDICTION_COLOR, prediction_key};
use super::time_series::{Record, TIMESTAMP_KEY, TimeSeries};
use serde::Serialize;

static EMPTY_SERIES: TimeSeries = TimeSeries::empty();

/// One plottable line: field key, stroke color and legend name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    pub data_key: String,
    pub color: String,
    pub name: String,
}

/// Holds the most recent combination of a day's measurements and predictions.
///
/// Every query is defined before `combine_metrics` has been called: it answers as if
/// an empty series had been combined.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentMetrics {
    combined_metrics: Option<TimeSeries>,
}

impl EnvironmentMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Combine the two series into one.
    ///
    /// - measurements and predictions: merged row by row, prediction fields renamed
    /// - measurements only: kept as they are
    /// - predictions only: every field except the timestamp renamed
    /// - neither: an empty series without a date
    pub fn combine_metrics(&mut self, measurements: Option<TimeSeries>, predictions: Option<TimeSeries>) {
        let measurements = measurements.filter(|series| !series.is_empty());
        let predictions = predictions.filter(|series| !series.is_empty());

        let combined = match (measurements, predictions) {
            (Some(measurements), Some(predictions)) => merge_predictions(measurements, &predictions),
            (Some(measurements), None) => measurements,
            (None, Some(predictions)) => convert_to_predictions_only(predictions),
            (None, None) => TimeSeries::empty(),
        };

        self.combined_metrics = Some(combined);
    }

    pub fn combined_metrics(&self) -> &TimeSeries {
        self.combined_metrics.as_ref().unwrap_or(&EMPTY_SERIES)
    }

    pub fn data_set(&self) -> &[Record] {
        &self.combined_metrics().data_points
    }

    /// Field keys present for the metric type, measurement key first.
    pub fn data_keys_for_metric_type(&self, metric_type: &str) -> Vec<String> {
        self.present_keys(metric_type)
            .into_iter()
            .map(|(key, _)| key)
            .collect()
    }

    /// Line colors parallel to [`Self::data_keys_for_metric_type`].
    pub fn grid_colors_for_metric_type(&self, metric_type: &str) -> Vec<&'static str> {
        self.present_keys(metric_type)
            .into_iter()
            .map(|(_, color)| color)
            .collect()
    }

    /// Keys zipped with their colors and a legend name.
    pub fn legend_for_metric_type(&self, metric_type: &str) -> Vec<LegendEntry> {
        let Some(label) = MetricType::from_name(metric_type).map(MetricType::label) else {
            return Vec::new();
        };

        self.data_keys_for_metric_type(metric_type)
            .into_iter()
            .zip(self.grid_colors_for_metric_type(metric_type))
            .map(|(data_key, color)| {
                let name = if color == PREDICTION_COLOR {
                    format!("{label} prediction")
                } else {
                    label.to_string()
                };
                LegendEntry {
                    data_key,
                    color: color.to_string(),
                    name,
                }
            })
            .collect()
    }

    fn present_keys(&self, metric_type: &str) -> Vec<(String, &'static str)> {
        let Some(combined) = &self.combined_metrics else {
            return Vec::new();
        };
        let Some(metric_type) = MetricType::from_name(metric_type) else {
            return Vec::new();
        };

        let mut keys = Vec::with_capacity(2);
        if combined.has_key(metric_type.code()) {
            keys.push((metric_type.code().to_string(), MEASUREMENT_COLOR));
        }
        let prediction_code = metric_type.prediction_code();
        if combined.has_key(&prediction_code) {
            keys.push((prediction_code, PREDICTION_COLOR));
        }
        keys
    }
}

/// Merge predictions into the measurement rows by index.
///
/// The result always has the measurements' length and date. Predictions past the end of
/// the measurements are dropped; measurements past the end of the predictions get no
/// prediction fields.
fn merge_predictions(measurements: TimeSeries, predictions: &TimeSeries) -> TimeSeries {
    if measurements.len() != predictions.len() {
        // Expected while the selected day is still in progress: predictions cover the
        // whole day, measurements only the hours so far.
        tracing::warn!(
            measurements = measurements.len(),
            predictions = predictions.len(),
            date = measurements.date.as_deref(),
            "Measurements and predictions differ in length, rows are aligned by index"
        );
    }

    let TimeSeries { data_points, date } = measurements;
    let merged = data_points
        .into_iter()
        .enumerate()
        .map(|(index, mut record)| {
            if let Some(prediction) = predictions.data_points.get(index) {
                record.extend(to_prediction_fields(prediction));
            }
            record
        })
        .collect();

    TimeSeries::new(merged, date)
}

fn convert_to_predictions_only(predictions: TimeSeries) -> TimeSeries {
    let TimeSeries { data_points, date } = predictions;
    let converted = data_points
        .into_iter()
        .map(|record| {
            let mut converted: Record = to_prediction_fields(&record).collect();
            if let Some(timestamp) = record.get(TIMESTAMP_KEY) {
                converted.insert(TIMESTAMP_KEY.to_string(), timestamp.clone());
            }
            converted
        })
        .collect();

    TimeSeries::new(converted, date)
}

/// Rename every field except the timestamp to its prediction key.
fn to_prediction_fields(record: &Record) -> impl Iterator<Item = (String, serde_json::Value)> + '_ {
    record
        .iter()
        .filter(|(key, _)| key.as_str() != TIMESTAMP_KEY)
        .map(|(key, value)| (prediction_key(key), value.clone()))
}
