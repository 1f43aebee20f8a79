//! XMCDA result writer - the four output documents of a run.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::documents::{render, XmcdaDocument};
use super::XmcdaError;
use crate::domain::model::{DecisionModel, OutputMessage, ResultSet};

pub const RANK_ACCEPTABILITIES_FILE: &str = "rankAcceptabilities.xml";
pub const CENTRAL_WEIGHTS_FILE: &str = "centralWeights.xml";
pub const CONFIDENCE_FACTORS_FILE: &str = "confidenceFactors.xml";
pub const MESSAGES_FILE: &str = "messages.xml";

/// Writes result documents into an output directory.
///
/// Each document is built in memory before its file is opened, so a result
/// set that cannot be represented never truncates an existing file. There is
/// no rollback across documents: files written before a failure stay on disk.
#[derive(Debug, Clone)]
pub struct XmcdaResultWriter {
    output_dir: PathBuf,
}

impl XmcdaResultWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes all four documents in order and returns their paths.
    pub fn write_all(
        &self,
        model: &DecisionModel,
        results: &ResultSet,
        messages: &[OutputMessage],
    ) -> Result<Vec<PathBuf>, XmcdaError> {
        let written = vec![
            self.write_rank_acceptabilities(model, results)?,
            self.write_central_weights(model, results)?,
            self.write_confidence_factors(model, results)?,
            self.write_messages(messages)?,
        ];
        info!(
            output_dir = %self.output_dir.display(),
            documents = written.len(),
            "Results written"
        );
        Ok(written)
    }

    pub fn write_rank_acceptabilities(
        &self,
        model: &DecisionModel,
        results: &ResultSet,
    ) -> Result<PathBuf, XmcdaError> {
        self.write(RANK_ACCEPTABILITIES_FILE, || {
            XmcdaDocument::rank_acceptabilities(model, results)
        })
    }

    pub fn write_central_weights(
        &self,
        model: &DecisionModel,
        results: &ResultSet,
    ) -> Result<PathBuf, XmcdaError> {
        self.write(CENTRAL_WEIGHTS_FILE, || XmcdaDocument::central_weights(model, results))
    }

    pub fn write_confidence_factors(
        &self,
        model: &DecisionModel,
        results: &ResultSet,
    ) -> Result<PathBuf, XmcdaError> {
        self.write(CONFIDENCE_FACTORS_FILE, || {
            XmcdaDocument::confidence_factors(model, results)
        })
    }

    pub fn write_messages(&self, messages: &[OutputMessage]) -> Result<PathBuf, XmcdaError> {
        self.write(MESSAGES_FILE, || Ok(XmcdaDocument::messages(messages)))
    }

    fn write<F>(&self, file_name: &str, build: F) -> Result<PathBuf, XmcdaError>
    where
        F: FnOnce() -> Result<XmcdaDocument, String>,
    {
        let path = self.output_dir.join(file_name);

        let xml = build()
            .and_then(|document| render(&document))
            .map_err(|reason| XmcdaError::serialization(&path, reason))?;

        let file = File::create(&path).map_err(|e| XmcdaError::io(&path, e))?;
        let mut out = BufWriter::new(file);
        out.write_all(xml.as_bytes())
            .map_err(|e| XmcdaError::io(&path, e))?;
        out.flush().map_err(|e| XmcdaError::io(&path, e))?;

        debug!(path = %path.display(), bytes = xml.len(), "Document written");
        Ok(path)
    }
}
