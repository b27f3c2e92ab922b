use serde_derive::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub const DEFAULT_INPUT_ID: &str = "name";
pub const DEFAULT_BUTTON_ID: &str = "clickMeBtn";
pub const DEFAULT_OUTPUT_ID: &str = "greeting";

/// Ids of the three page elements the greeting handler is wired to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    input: String,
    button: String,
    output: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT_ID.to_string(),
            button: DEFAULT_BUTTON_ID.to_string(),
            output: DEFAULT_OUTPUT_ID.to_string(),
        }
    }
}

impl ElementIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses ids from JSON; omitted fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn with_input(mut self, id: impl Into<String>) -> Self {
        self.input = id.into();
        self
    }

    pub fn with_button(mut self, id: impl Into<String>) -> Self {
        self.button = id.into();
        self
    }

    pub fn with_output(mut self, id: impl Into<String>) -> Self {
        self.output = id.into();
        self
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn button(&self) -> &str {
        &self.button
    }

    pub fn output(&self) -> &str {
        &self.output
    }
}
