//! Mock Acceptability Engine for testing.
//!
//! Provides a configurable implementation of the AcceptabilityEngine port so
//! the pipeline can be exercised without an external simulation.
//!
//! # Features
//!
//! - Pre-configured result set
//! - Error injection
//! - Call tracking for verification
//!
//! Without a configured result it answers with a uniform result set: every
//! rank equally likely, equal central weights, confidence factor 1.
//!
//! # Example
//!
//! ```ignore
//! let engine = MockAcceptabilityEngine::new().with_result(expected.clone());
//! let results = engine.run(&model, 10_000).await?;
//! assert_eq!(engine.calls()[0].iterations, 10_000);
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::model::{DecisionModel, ResultSet};
use crate::ports::{AcceptabilityEngine, EngineError};

/// Mock engine for testing.
#[derive(Debug, Clone, Default)]
pub struct MockAcceptabilityEngine {
    response: Option<MockResponse>,
    calls: Arc<Mutex<Vec<MockCall>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return this result set.
    Success(ResultSet),
    /// Return an error.
    Error(MockError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Simulate an engine that cannot be started.
    Unavailable { message: String },
    /// Simulate a run that reports failure.
    Failed { code: Option<i32>, message: String },
}

impl From<MockError> for EngineError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::Unavailable { message } => EngineError::unavailable(message),
            MockError::Failed { code, message } => EngineError::failed(code, message),
        }
    }
}

/// A recorded call to [`MockAcceptabilityEngine::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCall {
    pub alternatives: usize,
    pub criteria: usize,
    pub iterations: u32,
}

impl MockAcceptabilityEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers every run with `result`.
    pub fn with_result(mut self, result: ResultSet) -> Self {
        self.response = Some(MockResponse::Success(result));
        self
    }

    /// Fails every run with `error`.
    pub fn with_error(mut self, error: MockError) -> Self {
        self.response = Some(MockResponse::Error(error));
        self
    }

    /// Returns the calls made so far.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }

    fn uniform(model: &DecisionModel) -> ResultSet {
        let n = model.alternatives().len();
        let m = model.criteria().len();
        let acceptability = 1.0 / n as f64;
        let weight = 1.0 / m as f64;

        model.alternatives().iter().fold(ResultSet::new(), |results, alternative| {
            let weights: HashMap<_, _> = model
                .criteria()
                .iter()
                .map(|criterion| (criterion.id.clone(), weight))
                .collect();
            results
                .with_rank_acceptabilities(alternative.id.clone(), vec![acceptability; n])
                .with_central_weights(alternative.id.clone(), weights)
                .with_confidence_factor(alternative.id.clone(), 1.0)
        })
    }
}

#[async_trait]
impl AcceptabilityEngine for MockAcceptabilityEngine {
    async fn run(&self, model: &DecisionModel, iterations: u32) -> Result<ResultSet, EngineError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(MockCall {
                alternatives: model.alternatives().len(),
                criteria: model.criteria().len(),
                iterations,
            });
        }

        match &self.response {
            Some(MockResponse::Success(result)) => Ok(result.clone()),
            Some(MockResponse::Error(error)) => Err(error.clone().into()),
            None => Ok(Self::uniform(model)),
        }
    }
}
