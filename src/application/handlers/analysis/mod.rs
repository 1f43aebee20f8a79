//! Analysis handlers.
//!
//! Handlers that run a complete acceptability analysis.

mod run_analysis;

pub use run_analysis::{
    RunAnalysisCommand, RunAnalysisError, RunAnalysisHandler, RunAnalysisResult,
    DEFAULT_ITERATIONS,
};
