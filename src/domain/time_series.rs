// Time series domain model - ordered records for one calendar day
use serde::Serialize;
use serde_json::{Map, Value};

/// Key carrying the timestamp of a record. Copied through unchanged by every transformation.
pub const TIMESTAMP_KEY: &str = "t";

/// One timestamped observation: a flat mapping of field code to value.
pub type Record = Map<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeries {
    pub data_points: Vec<Record>,
    /// Day the series covers, if known.
    pub date: Option<String>,
}

impl TimeSeries {
    pub fn new(data_points: Vec<Record>, date: Option<String>) -> Self {
        Self { data_points, date }
    }

    pub const fn empty() -> Self {
        Self {
            data_points: Vec::new(),
            date: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data_points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data_points.len()
    }

    /// Whether the series carries `key`.
    ///
    /// Records are assumed to share one schema, so only the first record is checked.
    /// Keys nested inside values do not count.
    pub fn has_key(&self, key: &str) -> bool {
        self.data_points
            .first()
            .is_some_and(|record| record.contains_key(key))
    }
}
