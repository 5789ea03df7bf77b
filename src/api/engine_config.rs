use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{GearMapError, GearMapResult};

use super::HeatmapStyle;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format. The default inputs
/// are a familiar road setup: a 36/50 compact crankset against an
/// 11-28 nine-speed cassette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapEngineConfig {
    pub viewport: Viewport,
    #[serde(default = "default_front_input")]
    pub front_input: String,
    #[serde(default = "default_rear_input")]
    pub rear_input: String,
    #[serde(default)]
    pub style: HeatmapStyle,
}

impl HeatmapEngineConfig {
    /// Creates a config with the default drivetrain and style.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            front_input: default_front_input(),
            rear_input: default_rear_input(),
            style: HeatmapStyle::default(),
        }
    }

    /// Sets initial front chainring input text.
    #[must_use]
    pub fn with_front_input(mut self, front_input: impl Into<String>) -> Self {
        self.front_input = front_input.into();
        self
    }

    /// Sets initial rear sprocket input text.
    #[must_use]
    pub fn with_rear_input(mut self, rear_input: impl Into<String>) -> Self {
        self.rear_input = rear_input.into();
        self
    }

    /// Sets initial heatmap style.
    #[must_use]
    pub fn with_style(mut self, style: HeatmapStyle) -> Self {
        self.style = style;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> GearMapResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GearMapError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> GearMapResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| GearMapError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_front_input() -> String {
    "36, 50".to_owned()
}

fn default_rear_input() -> String {
    "11, 13, 15, 17, 19, 21, 23, 25, 28".to_owned()
}
