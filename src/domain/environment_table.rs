// Tabular view of a combined series - one row per record with measured vs predicted values
use super::metric_type::MetricType;
use super::time_series::{Record, TIMESTAMP_KEY};
use serde::Serialize;
use serde_json::Value;

const DELTA_DECIMALS: i32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub t: Option<Value>,
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    pub metric_type: MetricType,
    pub unit: &'static str,
    pub value: Option<f64>,
    pub prediction: Option<f64>,
    /// Signed `prediction - value`, only when both are known.
    pub delta: Option<String>,
}

pub fn build_table(records: &[Record]) -> Vec<TableRow> {
    records.iter().map(build_row).collect()
}

fn build_row(record: &Record) -> TableRow {
    let cells = MetricType::ALL
        .into_iter()
        .map(|metric_type| {
            let value = record.get(metric_type.code()).and_then(Value::as_f64);
            let prediction = record
                .get(&metric_type.prediction_code())
                .and_then(Value::as_f64);
            let delta = value
                .zip(prediction)
                .map(|(value, prediction)| format_delta(value, prediction, DELTA_DECIMALS));

            TableCell {
                metric_type,
                unit: metric_type.unit(),
                value,
                prediction,
                delta,
            }
        })
        .collect();

    TableRow {
        t: record.get(TIMESTAMP_KEY).cloned(),
        cells,
    }
}

/// Format `to - from` rounded to `decimals` places.
///
/// The `+` sign follows the unrounded delta, so a small rise still reads `+0`.
pub fn format_delta(from: f64, to: f64, decimals: i32) -> String {
    let delta = to - from;
    let factor = 10_f64.powi(decimals);
    // Adding zero turns a rounded `-0` into `0`.
    let rounded = (delta * factor).round() / factor + 0.0;
    if delta > 0.0 {
        format!("+{rounded}")
    } else {
        rounded.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::time_series::TimeSeries;
    use serde_json::json;

    #[test]
    fn test_format_delta() {
        assert_eq!(format_delta(20.0, 21.5, 2), "+1.5");
        assert_eq!(format_delta(21.5, 20.0, 2), "-1.5");
        assert_eq!(format_delta(1.0, 1.234, 2), "+0.23");
        assert_eq!(format_delta(1.0, 3.0, 2), "+2");
        assert_eq!(format_delta(1.0, 1.0, 2), "0");
        assert_eq!(format_delta(1.0, 1.004, 2), "+0");
        assert_eq!(format_delta(1.004, 1.0, 2), "0");
    }

    #[test]
    fn test_build_table() {
        let series = TimeSeries::new(
            serde_json::from_value(json!([
                {"t": 1000, "tmp": 20, "tmpPrediction": 21.25, "hum": 40},
                {"t": 2000, "prPrediction": 1012},
            ]))
            .unwrap(),
            None,
        );

        let rows = build_table(&series.data_points);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].t, Some(json!(1000)));

        let temperature = &rows[0].cells[0];
        assert_eq!(temperature.metric_type, MetricType::Temperature);
        assert_eq!(temperature.unit, "°C");
        assert_eq!(temperature.value, Some(20.0));
        assert_eq!(temperature.prediction, Some(21.25));
        assert_eq!(temperature.delta.as_deref(), Some("+1.25"));

        let humidity = &rows[0].cells[1];
        assert_eq!(humidity.value, Some(40.0));
        assert_eq!(humidity.prediction, None);
        assert_eq!(humidity.delta, None);

        let pressure = &rows[1].cells[2];
        assert_eq!(pressure.value, None);
        assert_eq!(pressure.prediction, Some(1012.0));
        assert_eq!(pressure.delta, None);
    }

    #[test]
    fn test_build_table_empty() {
        assert!(build_table(&TimeSeries::empty().data_points).is_empty());
    }
}
