//! App text content drawn onto the assets

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    pub name: String,
    pub tagline: String,
    /// Two-letter mark drawn inside the icon disc
    pub monogram: String,
    /// Description lines; joined with newlines before wrapping
    pub description: Vec<String>,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "StudyFlow".to_string(),
            tagline: "Organize. Focus. Succeed.".to_string(),
            monogram: "SF".to_string(),
            description: vec![
                "The ultimate study companion for students".to_string(),
                "• Track assignments and deadlines".to_string(),
                "• Create study plans and schedules".to_string(),
                "• Stay focused with Pomodoro timer".to_string(),
                "• Sync across all your devices".to_string(),
            ],
        }
    }
}

impl AppMetadata {
    pub fn description_text(&self) -> String {
        self.description.join("\n")
    }
}
