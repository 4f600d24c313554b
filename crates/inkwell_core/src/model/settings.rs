//! Global application preferences.

use serde::{Deserialize, Serialize};

/// Display name used when none has been saved or the saved one is blank.
pub const DEFAULT_DISPLAY_NAME: &str = "Writer";

/// Single global preference record.
///
/// Missing fields in stored JSON fall back to their defaults, so records
/// written by older builds still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    pub display_name: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
        }
    }
}

impl AppSettings {
    /// Builds settings from user input, trimming and defaulting blank names.
    pub fn with_display_name(name: &str) -> Self {
        let trimmed = name.trim();
        Self {
            display_name: if trimmed.is_empty() {
                DEFAULT_DISPLAY_NAME.to_string()
            } else {
                trimmed.to_string()
            },
        }
    }
}
