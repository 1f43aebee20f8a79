//! Acceptability Engine Port - Interface to the SMAA-2 simulation.
//!
//! The stochastic acceptability analysis (Monte-Carlo sampling of weights and
//! measurements) lives outside this crate. The pipeline hands it a complete
//! [`DecisionModel`] and waits until it reports a [`ResultSet`] or fails.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct FixedEngine(ResultSet);
//!
//! #[async_trait]
//! impl AcceptabilityEngine for FixedEngine {
//!     async fn run(
//!         &self,
//!         _model: &DecisionModel,
//!         _iterations: u32,
//!     ) -> Result<ResultSet, EngineError> {
//!         Ok(self.0.clone())
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::domain::model::{DecisionModel, ResultSet};

/// Port for running an acceptability analysis on a decision model.
///
/// Implementations block (asynchronously) until the computation completes;
/// there is no timeout and no cancellation.
#[async_trait]
pub trait AcceptabilityEngine: Send + Sync {
    /// Runs `iterations` simulation rounds over `model`.
    async fn run(&self, model: &DecisionModel, iterations: u32) -> Result<ResultSet, EngineError>;
}

/// Acceptability engine errors.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The engine could not be started.
    #[error("engine unavailable: {0}")]
    Unavailable(String),

    /// Communication with the engine failed.
    #[error("engine i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The engine ran but reported failure.
    #[error("engine failed (exit code {code:?}): {message}")]
    Failed {
        /// Process exit code, if any.
        code: Option<i32>,
        /// Diagnostic output.
        message: String,
    },

    /// The engine's output could not be interpreted as a result set.
    #[error("invalid engine output: {0}")]
    InvalidOutput(String),
}

impl EngineError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        EngineError::Unavailable(message.into())
    }

    /// Creates a failed-run error.
    pub fn failed(code: Option<i32>, message: impl Into<String>) -> Self {
        EngineError::Failed {
            code,
            message: message.into(),
        }
    }
}
