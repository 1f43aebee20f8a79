//! XMCDA output documents as immutable records.
//!
//! Each builder here decides only *what* goes into a document. Turning the
//! record tree into XML text is left to [`render`], which hands it to the
//! quick-xml serde serializer.

use serde::Serialize;

use crate::domain::model::{DecisionModel, MessageKind, OutputMessage, ResultSet};

pub const XMCDA_NAMESPACE: &str = "http://www.decision-deck.org/2009/XMCDA-2.0.0";

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Root `xmcda:XMCDA` element holding exactly one top-level block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename = "xmcda:XMCDA")]
pub struct XmcdaDocument {
    #[serde(rename = "@xmlns:xmcda")]
    namespace: &'static str,

    #[serde(rename = "alternativesValues", skip_serializing_if = "Option::is_none")]
    alternatives_values: Option<AlternativesValues>,

    #[serde(rename = "alternativesCriteriaValues", skip_serializing_if = "Option::is_none")]
    alternatives_criteria_values: Option<AlternativesCriteriaValues>,

    #[serde(rename = "methodMessages", skip_serializing_if = "Option::is_none")]
    method_messages: Option<MethodMessages>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlternativesValues {
    #[serde(rename = "@mcdaConcept")]
    concept: &'static str,
    #[serde(rename = "alternativeValue")]
    entries: Vec<AlternativeValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlternativeValue {
    #[serde(rename = "alternativeID")]
    alternative_id: String,
    values: Values,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Values {
    value: Vec<Value>,
}

/// A `value` element, optionally tagged, holding an integer or a real.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Value {
    #[serde(rename = "@mcdaConcept", skip_serializing_if = "Option::is_none")]
    concept: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    integer: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    real: Option<f64>,
}

impl Value {
    fn real(concept: Option<&'static str>, value: f64) -> Result<Self, String> {
        if !value.is_finite() {
            return Err(format!("non-finite value {}", value));
        }
        Ok(Self {
            concept,
            integer: None,
            real: Some(value),
        })
    }

    fn integer(concept: Option<&'static str>, value: usize) -> Self {
        Self {
            concept,
            integer: Some(value),
            real: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlternativesCriteriaValues {
    #[serde(rename = "@mcdaConcept")]
    concept: &'static str,
    #[serde(rename = "alternativeCriteriaValue")]
    entries: Vec<AlternativeCriteriaValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlternativeCriteriaValue {
    #[serde(rename = "alternativeID")]
    alternative_id: String,
    #[serde(rename = "criterionValue", skip_serializing_if = "Vec::is_empty")]
    criterion_values: Vec<CriterionValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionValue {
    #[serde(rename = "criterionID")]
    criterion_id: String,
    value: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodMessages {
    #[serde(rename = "$value")]
    entries: Vec<MessageEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum MessageEntry {
    #[serde(rename = "logMessage")]
    Log(MessageBody),
    #[serde(rename = "message")]
    Message(MessageBody),
    #[serde(rename = "errorMessage")]
    Error(MessageBody),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageBody {
    #[serde(rename = "@name")]
    name: String,
    text: String,
}

impl From<&OutputMessage> for MessageEntry {
    fn from(msg: &OutputMessage) -> Self {
        let body = MessageBody {
            name: msg.code.clone(),
            text: msg.text.clone(),
        };
        match msg.kind {
            MessageKind::Log => MessageEntry::Log(body),
            MessageKind::Message => MessageEntry::Message(body),
            MessageKind::Error => MessageEntry::Error(body),
        }
    }
}

impl XmcdaDocument {
    fn empty() -> Self {
        Self {
            namespace: XMCDA_NAMESPACE,
            alternatives_values: None,
            alternatives_criteria_values: None,
            method_messages: None,
        }
    }

    /// One `alternativeValue` per (alternative, rank), ranks ascending from 1.
    pub fn rank_acceptabilities(
        model: &DecisionModel,
        results: &ResultSet,
    ) -> Result<Self, String> {
        let n = model.alternatives().len();
        let mut entries = Vec::with_capacity(n * n);

        for alternative in model.alternatives() {
            let ranks = results
                .rank_acceptabilities_for(&alternative.id)
                .ok_or_else(|| {
                    format!("no rank acceptabilities for alternative '{}'", alternative.id)
                })?;
            if ranks.len() != n {
                return Err(format!(
                    "alternative '{}' has {} rank acceptabilities, expected {}",
                    alternative.id,
                    ranks.len(),
                    n
                ));
            }

            for (i, acceptability) in ranks.iter().enumerate() {
                entries.push(AlternativeValue {
                    alternative_id: alternative.id.to_string(),
                    values: Values {
                        value: vec![
                            Value::integer(Some("rank"), i + 1),
                            Value::real(Some("acceptability"), *acceptability).map_err(|e| {
                                format!("{} for alternative '{}'", e, alternative.id)
                            })?,
                        ],
                    },
                });
            }
        }

        Ok(Self {
            alternatives_values: Some(AlternativesValues {
                concept: "rankAcceptabilities",
                entries,
            }),
            ..Self::empty()
        })
    }

    /// One `alternativeCriteriaValue` per alternative with a `criterionValue` per criterion.
    pub fn central_weights(model: &DecisionModel, results: &ResultSet) -> Result<Self, String> {
        let entries = model
            .alternatives()
            .iter()
            .map(|alternative| -> Result<AlternativeCriteriaValue, String> {
                let criterion_values = model
                    .criteria()
                    .iter()
                    .map(|criterion| -> Result<CriterionValue, String> {
                        let weight = results
                            .central_weight(&alternative.id, &criterion.id)
                            .ok_or_else(|| {
                                format!(
                                    "no central weight for alternative '{}' on criterion '{}'",
                                    alternative.id, criterion.id
                                )
                            })?;
                        Ok(CriterionValue {
                            criterion_id: criterion.id.to_string(),
                            value: Value::real(None, weight).map_err(|e| {
                                format!(
                                    "{} for alternative '{}' on criterion '{}'",
                                    e, alternative.id, criterion.id
                                )
                            })?,
                        })
                    })
                    .collect::<Result<Vec<_>, String>>()?;

                Ok(AlternativeCriteriaValue {
                    alternative_id: alternative.id.to_string(),
                    criterion_values,
                    value: None,
                })
            })
            .collect::<Result<Vec<_>, String>>()?;

        Ok(Self {
            alternatives_criteria_values: Some(AlternativesCriteriaValues {
                concept: "centralWeights",
                entries,
            }),
            ..Self::empty()
        })
    }

    /// One `alternativeCriteriaValue` per alternative holding its confidence factor.
    pub fn confidence_factors(model: &DecisionModel, results: &ResultSet) -> Result<Self, String> {
        let entries = model
            .alternatives()
            .iter()
            .map(|alternative| -> Result<AlternativeCriteriaValue, String> {
                let factor = results
                    .confidence_factor(&alternative.id)
                    .ok_or_else(|| {
                        format!("no confidence factor for alternative '{}'", alternative.id)
                    })?;
                Ok(AlternativeCriteriaValue {
                    alternative_id: alternative.id.to_string(),
                    criterion_values: Vec::new(),
                    value: Some(
                        Value::real(None, factor)
                            .map_err(|e| format!("{} for alternative '{}'", e, alternative.id))?,
                    ),
                })
            })
            .collect::<Result<Vec<_>, String>>()?;

        Ok(Self {
            alternatives_criteria_values: Some(AlternativesCriteriaValues {
                concept: "confidenceFactors",
                entries,
            }),
            ..Self::empty()
        })
    }

    pub fn messages(messages: &[OutputMessage]) -> Self {
        Self {
            method_messages: Some(MethodMessages {
                entries: messages.iter().map(MessageEntry::from).collect(),
            }),
            ..Self::empty()
        }
    }
}

/// Renders a document as indented XML text with a leading declaration.
pub fn render(document: &XmcdaDocument) -> Result<String, String> {
    let mut xml = String::from(XML_DECLARATION);
    let mut serializer = quick_xml::se::Serializer::new(&mut xml);
    serializer.indent(' ', 2);
    document.serialize(serializer).map_err(|e| e.to_string())?;
    xml.push('\n');
    Ok(xml)
}
