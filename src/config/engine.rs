//! Acceptability engine configuration

use serde::Deserialize;

use super::error::ValidationError;

/// External engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Engine executable
    pub command: Option<String>,

    /// Engine arguments (whitespace-separated)
    pub args: Option<String>,

    /// Simulation rounds per run
    #[serde(default = "default_iterations")]
    pub iterations: u32,
}

impl EngineConfig {
    /// Check if an engine executable is configured
    pub fn has_command(&self) -> bool {
        !self.command().is_empty()
    }

    /// Engine executable, empty when not configured
    pub fn command(&self) -> &str {
        self.command.as_deref().map(str::trim).unwrap_or_default()
    }

    /// Get engine arguments as a vector
    pub fn args_list(&self) -> Vec<String> {
        self.args
            .as_ref()
            .map(|s| s.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_command() {
            return Err(ValidationError::MissingRequired("ENGINE__COMMAND"));
        }
        if self.iterations == 0 {
            return Err(ValidationError::InvalidIterations);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            command: None,
            args: None,
            iterations: default_iterations(),
        }
    }
}

fn default_iterations() -> u32 {
    10_000
}
