//! Tray item configuration.

use serde::{Deserialize, Serialize};

use crate::error::TrayResult;
use crate::registry::{CALCULATOR_ITEM_ID, SYSTRAY_CATEGORY};

/// How the calculator appears in the tray.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrayConfig {
    /// Registry category the item is listed under.
    pub category: String,
    /// Identifier inside the category.
    pub item_id: String,
    /// Ordering among tray items; lower comes first.
    pub sequence: i32,
    /// Panel translation when first shown.
    pub initial_position: (f64, f64),
    /// Caption shown on the tray button and panel header.
    pub title: String,
}

impl Default for TrayConfig {
    fn default() -> Self {
        Self {
            category: SYSTRAY_CATEGORY.to_string(),
            item_id: CALCULATOR_ITEM_ID.to_string(),
            sequence: 10,
            initial_position: (0.0, 0.0),
            title: "Calculator".to_string(),
        }
    }
}

impl TrayConfig {
    /// Parse a configuration, filling missing fields with defaults.
    pub fn from_json(json: &str) -> TrayResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> TrayResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
