//! Process Acceptability Engine - runs the SMAA-2 simulation as a child process.
//!
//! The model is written to the child's stdin as one JSON request and the child
//! answers with one JSON [`ResultSet`] on stdout:
//!
//! ```text
//! stdin:  {"iterations":10000,
//!          "alternatives":["A1","A2"],
//!          "criteria":[{"id":"C1","direction":"ascending"}],
//!          "measurements":[{"alternative":"A1","criterion":"C1","lower":3.0,"upper":3.0}, ...]}
//! stdout: {"rank_acceptabilities":{"A1":[0.7,0.3],...},
//!          "central_weights":{"A1":{"C1":1.0},...},
//!          "confidence_factors":{"A1":0.93,...}}
//! ```
//!
//! A non-zero exit status is a failed run; stderr becomes the error message.

use async_trait::async_trait;
use serde::Serialize;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info};

use crate::domain::foundation::{AlternativeId, CriterionId};
use crate::domain::model::{Criterion, DecisionModel, ResultSet};
use crate::ports::{AcceptabilityEngine, EngineError};

/// Engine adapter that delegates to an external executable.
#[derive(Debug, Clone)]
pub struct ProcessAcceptabilityEngine {
    command: String,
    args: Vec<String>,
}

impl ProcessAcceptabilityEngine {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
        }
    }

    /// Sets the arguments passed to the engine executable.
    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

#[derive(Debug, Serialize)]
struct EngineRequest<'a> {
    iterations: u32,
    alternatives: Vec<&'a AlternativeId>,
    criteria: Vec<&'a Criterion>,
    measurements: Vec<MeasurementRecord<'a>>,
}

#[derive(Debug, Serialize)]
struct MeasurementRecord<'a> {
    alternative: &'a AlternativeId,
    criterion: &'a CriterionId,
    lower: f64,
    upper: f64,
}

impl<'a> EngineRequest<'a> {
    fn new(model: &'a DecisionModel, iterations: u32) -> Self {
        Self {
            iterations,
            alternatives: model.alternatives().iter().map(|a| &a.id).collect(),
            criteria: model.criteria().iter().collect(),
            measurements: model
                .measurements()
                .map(|(criterion, alternative, interval)| MeasurementRecord {
                    alternative: &alternative.id,
                    criterion: &criterion.id,
                    lower: interval.lower(),
                    upper: interval.upper(),
                })
                .collect(),
        }
    }
}

#[async_trait]
impl AcceptabilityEngine for ProcessAcceptabilityEngine {
    async fn run(&self, model: &DecisionModel, iterations: u32) -> Result<ResultSet, EngineError> {
        let payload = serde_json::to_vec(&EngineRequest::new(model, iterations))
            .map_err(|e| EngineError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;

        info!(command = %self.command, iterations, "Starting acceptability engine");

        let mut child = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| EngineError::unavailable(format!("{}: {}", self.command, e)))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| EngineError::unavailable("engine stdin was not captured"))?;

        // Feed stdin while collecting output so a chatty engine cannot stall on a full pipe.
        let feed = async move {
            stdin.write_all(&payload).await?;
            stdin.shutdown().await
        };
        let (fed, output) = tokio::join!(feed, child.wait_with_output());
        let output = output?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(EngineError::failed(output.status.code(), stderr.trim()));
        }
        // An engine may answer without draining its input.
        match fed {
            Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                debug!("Engine closed stdin before reading the full request")
            }
            other => other?,
        }

        debug!(bytes = output.stdout.len(), "Engine finished");
        serde_json::from_slice(&output.stdout)
            .map_err(|e| EngineError::InvalidOutput(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Interval;
    use crate::domain::model::{Alternative, Catalog, ImpactMatrix};

    fn model() -> DecisionModel {
        let alternatives = Catalog::new(vec![
            Alternative::new(AlternativeId::new("A1").unwrap()),
            Alternative::new(AlternativeId::new("A2").unwrap()),
        ])
        .unwrap();
        let criteria =
            Catalog::new(vec![Criterion::ascending(CriterionId::new("C1").unwrap())]).unwrap();
        let mut matrix = ImpactMatrix::for_catalogs(&alternatives, &criteria);
        matrix.set(0, 0, Interval::point(3.0).unwrap());
        matrix.set(0, 1, Interval::try_new(1.0, 2.0).unwrap());
        let complete = matrix.validate(&alternatives, &criteria).unwrap();
        DecisionModel::new(alternatives, criteria, &complete)
    }

    fn shell(script: &str) -> ProcessAcceptabilityEngine {
        ProcessAcceptabilityEngine::new("sh").with_args(["-c", script])
    }

    #[test]
    fn request_lists_every_measurement() {
        let model = model();
        let json = serde_json::to_value(EngineRequest::new(&model, 500)).unwrap();
        assert_eq!(json["iterations"], 500);
        assert_eq!(json["alternatives"], serde_json::json!(["A1", "A2"]));
        assert_eq!(json["criteria"][0]["direction"], "ascending");
        assert_eq!(json["measurements"].as_array().unwrap().len(), 2);
        assert_eq!(
            json["measurements"][1],
            serde_json::json!({"alternative": "A2", "criterion": "C1", "lower": 1.0, "upper": 2.0})
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn parses_result_set_from_stdout() {
        let engine = shell(
            r#"cat > /dev/null; echo '{"rank_acceptabilities":{"A1":[0.7,0.3],"A2":[0.3,0.7]},"central_weights":{},"confidence_factors":{"A1":1.0}}'"#,
        );
        let results = engine.run(&model(), 100).await.unwrap();
        assert_eq!(
            results.rank_acceptabilities_for(&AlternativeId::new("A2").unwrap()),
            Some(&[0.3, 0.7][..])
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn engine_ignoring_stdin_still_answers() {
        let mut alts = Vec::new();
        let mut criteria = Vec::new();
        for i in 0..64 {
            alts.push(Alternative::new(AlternativeId::new(format!("A{i}")).unwrap()));
            criteria.push(Criterion::ascending(CriterionId::new(format!("C{i}")).unwrap()));
        }
        let alternatives = Catalog::new(alts).unwrap();
        let criteria = Catalog::new(criteria).unwrap();
        let mut matrix = ImpactMatrix::for_catalogs(&alternatives, &criteria);
        for c in 0..criteria.len() {
            for a in 0..alternatives.len() {
                matrix.set(c, a, Interval::point(1.0).unwrap());
            }
        }
        let complete = matrix.validate(&alternatives, &criteria).unwrap();
        let large = DecisionModel::new(alternatives, criteria, &complete);

        // Exits without reading a request larger than the pipe buffer.
        let engine = shell(
            r#"exec 0<&-; echo '{"rank_acceptabilities":{},"central_weights":{},"confidence_factors":{"A0":1.0}}'"#,
        );
        let results = engine.run(&large, 100).await.unwrap();
        assert_eq!(
            results.confidence_factor(&AlternativeId::new("A0").unwrap()),
            Some(1.0)
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn non_zero_exit_is_failed_run() {
        let engine = shell("cat > /dev/null; echo 'simulation diverged' >&2; exit 3");
        match engine.run(&model(), 100).await {
            Err(EngineError::Failed { code, message }) => {
                assert_eq!(code, Some(3));
                assert_eq!(message, "simulation diverged");
            }
            other => panic!("Expected Failed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn garbage_output_is_invalid() {
        let engine = shell("cat > /dev/null; echo not-json");
        assert!(matches!(
            engine.run(&model(), 100).await,
            Err(EngineError::InvalidOutput(_))
        ));
    }

    #[tokio::test]
    async fn missing_executable_is_unavailable() {
        let engine = ProcessAcceptabilityEngine::new("/nonexistent/smaa-engine");
        assert!(matches!(
            engine.run(&model(), 100).await,
            Err(EngineError::Unavailable(_))
        ));
    }
}
