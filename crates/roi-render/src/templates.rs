//! Template loading for report rendering.
//!
//! A templates file maps names to Handlebars sources:
//!
//! ```yaml
//! version: "1.0"
//! templates:
//!   report_headline:
//!     description: One-line summary
//!     template: "{{currency summary.netMonthlyProfit}}/mo net"
//! ```

use serde::Deserialize;
use std::collections::HashMap;

/// Templates shipped with the crate
pub const BUILTIN_TEMPLATES: &str = include_str!("../templates/report.yaml");

#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesFile {
    pub version: String,
    pub templates: HashMap<String, Template>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    pub description: String,
    pub template: String,
    /// Expected output prefix for the default scenario
    #[serde(default)]
    pub output: Option<String>,
}

impl TemplatesFile {
    pub fn load(path: &str) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read templates file: {}", e))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse templates YAML: {}", e))
    }

    pub fn builtin() -> Result<Self, String> {
        Self::from_yaml(BUILTIN_TEMPLATES)
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    pub fn list_templates(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}
