use serde::{Deserialize, Serialize};

/// Input feed of the forecasting model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    pub name: String,
    pub status: String,
}

/// Header badges and performance cards of the forecast page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub name: String,
    pub updated: String,
    /// Historical validation accuracy, percent
    pub accuracy: f64,
    pub data_sources: Vec<DataSource>,
}

impl ModelInfo {
    /// "89.3%"
    pub fn accuracy_label(&self) -> String {
        format!("{:.1}%", self.accuracy)
    }
}
