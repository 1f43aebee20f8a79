//! RunAnalysisHandler - Command handler for one full SMAA run.
//!
//! Sequence: load the XMCDA input documents -> build the decision model ->
//! run the acceptability engine -> write the four result documents.
//!
//! Loading and validation complete before the engine is invoked; if they fail
//! the engine is never called and nothing is written.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};

use crate::adapters::xmcda::{XmcdaError, XmcdaInputReader, XmcdaResultWriter};
use crate::domain::model::OutputMessage;
use crate::ports::{AcceptabilityEngine, EngineError};

/// Default number of simulation rounds per run.
pub const DEFAULT_ITERATIONS: u32 = 10_000;

/// Command to analyse the problem in `input_dir` and write results to `output_dir`.
#[derive(Debug, Clone)]
pub struct RunAnalysisCommand {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub iterations: u32,
}

impl RunAnalysisCommand {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            iterations: DEFAULT_ITERATIONS,
        }
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct RunAnalysisResult {
    pub alternatives: usize,
    pub criteria: usize,
    pub written: Vec<PathBuf>,
}

/// Why a run stopped.
#[derive(Debug, Error)]
pub enum RunAnalysisError {
    #[error("Unable to load input: {0}")]
    Input(#[source] XmcdaError),

    #[error("Acceptability analysis failed: {0}")]
    Engine(#[from] EngineError),

    #[error("Unable to write output: {0}")]
    Output(#[source] XmcdaError),
}

/// Handler orchestrating a full load -> compute -> write cycle.
pub struct RunAnalysisHandler {
    engine: Arc<dyn AcceptabilityEngine>,
}

impl RunAnalysisHandler {
    pub fn new(engine: Arc<dyn AcceptabilityEngine>) -> Self {
        Self { engine }
    }

    pub async fn handle(
        &self,
        cmd: RunAnalysisCommand,
    ) -> Result<RunAnalysisResult, RunAnalysisError> {
        // 1. Load and validate the problem
        let model = XmcdaInputReader::new(&cmd.input_dir)
            .load_problem()
            .map_err(|e| {
                error!(input_dir = %cmd.input_dir.display(), error = %e, "Input rejected");
                RunAnalysisError::Input(e)
            })?;

        // 2. Run the engine until it reports results
        info!(iterations = cmd.iterations, "Running acceptability analysis");
        let results = self.engine.run(&model, cmd.iterations).await.map_err(|e| {
            error!(iterations = cmd.iterations, error = %e, "Acceptability engine failed");
            RunAnalysisError::Engine(e)
        })?;

        // 3. Write results
        let writer = XmcdaResultWriter::new(&cmd.output_dir);
        let written = writer
            .write_all(&model, &results, &[OutputMessage::done()])
            .map_err(|e| {
                error!(output_dir = %cmd.output_dir.display(), error = %e, "Output not written");
                RunAnalysisError::Output(e)
            })?;

        Ok(RunAnalysisResult {
            alternatives: model.alternatives().len(),
            criteria: model.criteria().len(),
            written,
        })
    }
}
