// Metric type metadata - sensor categories and their field codes
use serde::Serialize;

/// Suffix appended to a measurement code to name its forecast counterpart.
pub const PREDICTION_SUFFIX: &str = "Prediction";

pub const MEASUREMENT_COLOR: &str = "#8884d8";
pub const PREDICTION_COLOR: &str = "#ff7300";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricType {
    Temperature,
    Humidity,
    Pressure,
}

impl MetricType {
    pub const ALL: [MetricType; 3] = [Self::Temperature, Self::Humidity, Self::Pressure];

    /// Look up a metric type by its name, e.g. `"temperature"`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|metric_type| metric_type.name() == name)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::Pressure => "pressure",
        }
    }

    /// Field code used by the device for measured values.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Temperature => "tmp",
            Self::Humidity => "hum",
            Self::Pressure => "pr",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature (in C)",
            Self::Humidity => "Humidity (in %)",
            Self::Pressure => "Pressure (in hPa)",
        }
    }

    pub const fn unit(self) -> &'static str {
        match self {
            Self::Temperature => "°C",
            Self::Humidity => "%",
            Self::Pressure => "hPa",
        }
    }

    pub fn prediction_code(self) -> String {
        prediction_key(self.code())
    }
}

pub fn prediction_key(code: &str) -> String {
    format!("{code}{PREDICTION_SUFFIX}")
}
