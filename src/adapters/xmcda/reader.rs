//! XMCDA input reader - entity loaders and the impact matrix loader.
//!
//! Reads the three input documents of a run from one directory:
//!
//! ```text
//! {input_dir}/
//! ├── alternatives.xml       <alternative id="..."/>*
//! ├── criteria.xml           <criterion id="..."/>*
//! └── performanceTable.xml   <alternativePerformances>*
//! ```
//!
//! Every file is read fully into memory and closed before it is parsed, so no
//! handle outlives a failed parse.

use std::fs;
use std::path::{Path, PathBuf};

use roxmltree::Document;
use tracing::{debug, info};

use super::tree::{descendant_text, descendants, first_descendant};
use super::value_parser::parse_value;
use super::XmcdaError;
use crate::domain::foundation::{AlternativeId, CriterionId, ValidationError};
use crate::domain::model::{
    Alternative, Catalog, CompleteImpactMatrix, Criterion, DecisionModel, Entity, ImpactMatrix,
};

pub const ALTERNATIVES_FILE: &str = "alternatives.xml";
pub const CRITERIA_FILE: &str = "criteria.xml";
pub const PERFORMANCE_TABLE_FILE: &str = "performanceTable.xml";

/// Loads a decision problem from XMCDA documents in an input directory.
#[derive(Debug, Clone)]
pub struct XmcdaInputReader {
    input_dir: PathBuf,
}

impl XmcdaInputReader {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
        }
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// Loads all three documents, validates them and builds the model.
    ///
    /// Nothing is returned unless every performance entry resolves and every
    /// (alternative, criterion) pair is measured.
    pub fn load_problem(&self) -> Result<DecisionModel, XmcdaError> {
        let alternatives = self.load_alternatives()?;
        let criteria = self.load_criteria()?;
        let matrix = self.load_impact_matrix(&alternatives, &criteria)?;

        info!(
            alternatives = alternatives.len(),
            criteria = criteria.len(),
            "Decision problem loaded"
        );
        Ok(DecisionModel::new(alternatives, criteria, &matrix))
    }

    pub fn load_alternatives(&self) -> Result<Catalog<Alternative>, XmcdaError> {
        let path = self.input_dir.join(ALTERNATIVES_FILE);
        parse_alternatives(&read(&path)?, &path)
    }

    pub fn load_criteria(&self) -> Result<Catalog<Criterion>, XmcdaError> {
        let path = self.input_dir.join(CRITERIA_FILE);
        parse_criteria(&read(&path)?, &path)
    }

    pub fn load_impact_matrix(
        &self,
        alternatives: &Catalog<Alternative>,
        criteria: &Catalog<Criterion>,
    ) -> Result<CompleteImpactMatrix, XmcdaError> {
        let path = self.input_dir.join(PERFORMANCE_TABLE_FILE);
        parse_performance_table(&read(&path)?, &path, alternatives, criteria)
    }
}

fn read(path: &Path) -> Result<String, XmcdaError> {
    debug!(path = %path.display(), "Reading input document");
    let bytes = fs::read(path).map_err(|e| XmcdaError::io(path, e))?;
    decode(bytes, path)
}

/// Decodes document bytes as UTF-8, or as Latin-1 when the prolog declares it.
fn decode(bytes: Vec<u8>, path: &Path) -> Result<String, XmcdaError> {
    let bytes = match String::from_utf8(bytes) {
        Ok(text) => return Ok(text),
        Err(e) => e.into_bytes(),
    };

    match declared_encoding(&bytes).as_deref() {
        Some("iso-8859-1" | "latin1" | "latin-1") => {
            Ok(bytes.iter().map(|&b| char::from(b)).collect())
        }
        Some(other) => Err(XmcdaError::format(
            path,
            format!("unsupported encoding '{}'", other),
        )),
        None => Err(XmcdaError::format(path, "document is not valid UTF-8")),
    }
}

/// Lower-cased `encoding` pseudo-attribute of the XML declaration, if any.
fn declared_encoding(bytes: &[u8]) -> Option<String> {
    let prolog = bytes.strip_prefix(b"<?xml")?;
    let end = prolog.windows(2).position(|w| w == b"?>")?;
    let prolog = &prolog[..end];

    let at = prolog.windows(8).position(|w| w == b"encoding")?;
    let rest = &prolog[at + 8..];
    let eq = rest.iter().position(|&b| b == b'=')?;
    let rest = &rest[eq + 1..];
    let rest = &rest[rest.iter().position(|b| !b.is_ascii_whitespace())?..];
    let quote = *rest.first().filter(|&&q| q == b'"' || q == b'\'')?;
    let value = &rest[1..];
    let close = value.iter().position(|&b| b == quote)?;

    std::str::from_utf8(&value[..close])
        .ok()
        .map(str::to_ascii_lowercase)
}

fn parse_document<'input>(xml: &'input str, path: &Path) -> Result<Document<'input>, XmcdaError> {
    Document::parse(xml).map_err(|e| XmcdaError::format(path, e.to_string()))
}

/// Reads every `alternative` element's `id`, in document order.
pub fn parse_alternatives(xml: &str, path: &Path) -> Result<Catalog<Alternative>, XmcdaError> {
    parse_entities(xml, path, "alternative", |id| {
        AlternativeId::new(id).map(Alternative::new)
    })
}

/// Reads every `criterion` element's `id`; each becomes an ascending cardinal criterion.
pub fn parse_criteria(xml: &str, path: &Path) -> Result<Catalog<Criterion>, XmcdaError> {
    parse_entities(xml, path, "criterion", |id| {
        CriterionId::new(id).map(Criterion::ascending)
    })
}

fn parse_entities<T, F>(
    xml: &str,
    path: &Path,
    tag: &'static str,
    build: F,
) -> Result<Catalog<T>, XmcdaError>
where
    T: Entity,
    F: Fn(&str) -> Result<T, ValidationError>,
{
    let doc = parse_document(xml, path)?;

    let entities = descendants(doc.root(), tag)
        .map(|node| {
            let id = node
                .attribute("id")
                .map(str::trim)
                .ok_or_else(|| {
                    XmcdaError::format(path, format!("{} element without id attribute", tag))
                })?;
            build(id).map_err(|e| XmcdaError::format(path, e.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let kind = T::KIND;
    debug!(path = %path.display(), count = entities.len(), %kind, "Entities parsed");
    Ok(Catalog::new(entities)?)
}

/// Populates the impact matrix from a performance table, then checks completeness.
pub fn parse_performance_table(
    xml: &str,
    path: &Path,
    alternatives: &Catalog<Alternative>,
    criteria: &Catalog<Criterion>,
) -> Result<CompleteImpactMatrix, XmcdaError> {
    let doc = parse_document(xml, path)?;
    let mut matrix = ImpactMatrix::for_catalogs(alternatives, criteria);

    for block in descendants(doc.root(), "alternativePerformances") {
        let alternative_id = descendant_text(block, "alternativeID").ok_or_else(|| {
            XmcdaError::format(path, "alternativePerformances without alternativeID")
        })?;
        let a = alternatives.resolve(alternative_id)?;

        for performance in descendants(block, "performance") {
            let criterion_id = descendant_text(performance, "criterionID").ok_or_else(|| {
                XmcdaError::format(
                    path,
                    format!("performance of '{}' without criterionID", alternative_id),
                )
            })?;
            let c = criteria.resolve(criterion_id)?;

            let value = first_descendant(performance, "value").ok_or_else(|| {
                XmcdaError::format(
                    path,
                    format!(
                        "performance of '{}' on '{}' without value",
                        alternative_id, criterion_id
                    ),
                )
            })?;
            let interval = parse_value(value).map_err(|e| {
                e.with_context(format!(
                    "alternative '{}', criterion '{}'",
                    alternative_id, criterion_id
                ))
            })?;

            if let Some(previous) = matrix.set(c, a, interval) {
                debug!(
                    alternative = alternative_id,
                    criterion = criterion_id,
                    %previous,
                    %interval,
                    "Measurement overwritten"
                );
            }
        }
    }

    debug!(filled = matrix.filled(), "Performance table parsed");
    Ok(matrix.validate(alternatives, criteria)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{EntityKind, Interval, ModelError};

    fn path() -> PathBuf {
        PathBuf::from("in/test.xml")
    }

    const ALTERNATIVES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xmcda:XMCDA xmlns:xmcda="http://www.decision-deck.org/2009/XMCDA-2.0.0">
  <alternatives>
    <alternative id="A1"><active>true</active></alternative>
    <alternative id="A2"/>
  </alternatives>
</xmcda:XMCDA>"#;

    const CRITERIA: &str = r#"<xmcda:XMCDA xmlns:xmcda="http://www.decision-deck.org/2009/XMCDA-2.0.0">
  <criteria>
    <criterion id="C1"/>
    <criterion id="C2"/>
  </criteria>
</xmcda:XMCDA>"#;

    fn performance(criterion: &str, value: &str) -> String {
        format!(
            "<performance><criterionID>{}</criterionID><value><real>{}</real></value></performance>",
            criterion, value
        )
    }

    fn table(blocks: &[(&str, Vec<String>)]) -> String {
        let mut xml = String::from("<xmcda:XMCDA xmlns:xmcda=\"urn:x\"><performanceTable>");
        for (alt, perfs) in blocks {
            xml.push_str(&format!(
                "<alternativePerformances><alternativeID>{}</alternativeID>{}</alternativePerformances>",
                alt,
                perfs.concat()
            ));
        }
        xml.push_str("</performanceTable></xmcda:XMCDA>");
        xml
    }

    fn entities() -> (Catalog<Alternative>, Catalog<Criterion>) {
        (
            parse_alternatives(ALTERNATIVES, &path()).unwrap(),
            parse_criteria(CRITERIA, &path()).unwrap(),
        )
    }

    fn point(v: f64) -> Interval {
        Interval::point(v).unwrap()
    }

    #[test]
    fn alternatives_load_in_document_order() {
        let alts = parse_alternatives(ALTERNATIVES, &path()).unwrap();
        let ids: Vec<_> = alts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["A1", "A2"]);
    }

    #[test]
    fn criteria_are_ascending_cardinal() {
        let crits = parse_criteria(CRITERIA, &path()).unwrap();
        assert_eq!(crits.len(), 2);
        assert!(crits.iter().all(Criterion::is_ascending));
    }

    #[test]
    fn malformed_xml_is_format_error() {
        match parse_alternatives("<alternatives><alternative id=\"A1\">", &path()) {
            Err(XmcdaError::Format { path: p, .. }) => assert_eq!(p, path()),
            other => panic!("Expected Format error, got {:?}", other),
        }
    }

    #[test]
    fn entity_without_id_is_format_error() {
        let result = parse_criteria("<criteria><criterion/></criteria>", &path());
        assert!(matches!(result, Err(XmcdaError::Format { .. })));
    }

    #[test]
    fn entity_ids_are_trimmed() {
        let alts =
            parse_alternatives("<alternatives><alternative id=\" A1 \"/></alternatives>", &path())
                .unwrap();
        assert_eq!(alts.position("A1"), Some(0));

        let result =
            parse_alternatives("<alternatives><alternative id=\"  \"/></alternatives>", &path());
        assert!(matches!(result, Err(XmcdaError::Format { .. })));
    }

    #[test]
    fn duplicate_alternative_is_rejected() {
        let result = parse_alternatives(
            "<alternatives><alternative id=\"A1\"/><alternative id=\"A1\"/></alternatives>",
            &path(),
        );
        match result {
            Err(XmcdaError::Model(ModelError::DuplicateEntity { kind, id })) => {
                assert_eq!(kind, EntityKind::Alternative);
                assert_eq!(id, "A1");
            }
            other => panic!("Expected DuplicateEntity, got {:?}", other),
        }
    }

    #[test]
    fn duplicate_criterion_is_rejected() {
        let result = parse_criteria(
            "<criteria><criterion id=\"C1\"/><criterion id=\"C2\"/><criterion id=\"C1\"/></criteria>",
            &path(),
        );
        match result {
            Err(XmcdaError::Model(ModelError::DuplicateEntity { kind, id })) => {
                assert_eq!(kind, EntityKind::Criterion);
                assert_eq!(id, "C1");
            }
            other => panic!("Expected DuplicateEntity, got {:?}", other),
        }
    }

    #[test]
    fn complete_table_loads_exact_values() {
        let (alts, crits) = entities();
        let xml = table(&[
            ("A1", vec![performance("C1", "3.0"), performance("C2", "5.0")]),
            ("A2", vec![performance("C1", "1.0"), performance("C2", "9.0")]),
        ]);

        let matrix = parse_performance_table(&xml, &path(), &alts, &crits).unwrap();
        assert_eq!(matrix.measurement(0, 0), point(3.0));
        assert_eq!(matrix.measurement(1, 0), point(5.0));
        assert_eq!(matrix.measurement(0, 1), point(1.0));
        assert_eq!(matrix.measurement(1, 1), point(9.0));
    }

    #[test]
    fn criteria_may_arrive_in_any_order_per_block() {
        let (alts, crits) = entities();
        let xml = table(&[
            ("A2", vec![performance("C2", "9"), performance("C1", "1")]),
            ("A1", vec![performance("C2", "5"), performance("C1", "3")]),
        ]);

        let matrix = parse_performance_table(&xml, &path(), &alts, &crits).unwrap();
        assert_eq!(matrix.measurement(1, 1), point(9.0));
        assert_eq!(matrix.measurement(0, 0), point(3.0));
    }

    #[test]
    fn missing_pair_is_reported() {
        let (alts, crits) = entities();
        let xml = table(&[
            ("A1", vec![performance("C1", "3.0"), performance("C2", "5.0")]),
            ("A2", vec![performance("C1", "1.0")]),
        ]);

        match parse_performance_table(&xml, &path(), &alts, &crits) {
            Err(XmcdaError::Model(ModelError::MissingMeasurement {
                alternative,
                criterion,
            })) => {
                assert_eq!(alternative, "A2");
                assert_eq!(criterion, "C2");
            }
            other => panic!("Expected MissingMeasurement, got {:?}", other),
        }
    }

    #[test]
    fn unknown_alternative_is_reported_with_kind() {
        let (alts, crits) = entities();
        let xml = table(&[("A7", vec![performance("C1", "3.0")])]);

        match parse_performance_table(&xml, &path(), &alts, &crits) {
            Err(XmcdaError::Model(ModelError::UnknownEntity { kind, id })) => {
                assert_eq!(kind, EntityKind::Alternative);
                assert_eq!(id, "A7");
            }
            other => panic!("Expected UnknownEntity, got {:?}", other),
        }
    }

    #[test]
    fn unknown_criterion_is_reported_with_kind() {
        let (alts, crits) = entities();
        let xml = table(&[("A1", vec![performance("C9", "3.0")])]);

        match parse_performance_table(&xml, &path(), &alts, &crits) {
            Err(XmcdaError::Model(ModelError::UnknownEntity { kind, id })) => {
                assert_eq!(kind, EntityKind::Criterion);
                assert_eq!(id, "C9");
            }
            other => panic!("Expected UnknownEntity, got {:?}", other),
        }
    }

    #[test]
    fn later_entry_overwrites_earlier_one() {
        let (alts, crits) = entities();
        let xml = table(&[
            (
                "A1",
                vec![
                    performance("C1", "3.0"),
                    performance("C2", "5.0"),
                    performance("C1", "4.0"),
                ],
            ),
            ("A2", vec![performance("C1", "1.0"), performance("C2", "9.0")]),
        ]);

        let matrix = parse_performance_table(&xml, &path(), &alts, &crits).unwrap();
        assert_eq!(matrix.measurement(0, 0), point(4.0));
    }

    #[test]
    fn malformed_value_names_its_pair() {
        let (alts, crits) = entities();
        let xml = table(&[("A1", vec![performance("C2", "n/a")])]);

        match parse_performance_table(&xml, &path(), &alts, &crits) {
            Err(XmcdaError::MalformedValue { reason }) => {
                assert!(reason.contains("'n/a'"), "{}", reason);
                assert!(reason.contains("alternative 'A1', criterion 'C2'"), "{}", reason);
            }
            other => panic!("Expected MalformedValue, got {:?}", other),
        }
    }

    #[test]
    fn interval_entries_are_kept_as_intervals() {
        let (alts, crits) = entities();
        let interval = "<performance><criterionID>C1</criterionID><value><interval>\
            <lowerBound><real>1</real></lowerBound><upperBound><real>2</real></upperBound>\
            </interval></value></performance>"
            .to_string();
        let xml = table(&[
            ("A1", vec![interval, performance("C2", "5")]),
            ("A2", vec![performance("C1", "1"), performance("C2", "9")]),
        ]);

        let matrix = parse_performance_table(&xml, &path(), &alts, &crits).unwrap();
        assert_eq!(matrix.measurement(0, 0), Interval::try_new(1.0, 2.0).unwrap());
    }

    #[test]
    fn block_without_alternative_id_is_format_error() {
        let (alts, crits) = entities();
        let xml = "<performanceTable><alternativePerformances>\
            <performance><criterionID>C1</criterionID><value><real>1</real></value></performance>\
            </alternativePerformances></performanceTable>";
        assert!(matches!(
            parse_performance_table(xml, &path(), &alts, &crits),
            Err(XmcdaError::Format { .. })
        ));
    }

    #[test]
    fn reader_reports_missing_file_as_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let reader = XmcdaInputReader::new(dir.path());
        match reader.load_alternatives() {
            Err(XmcdaError::Io { path, .. }) => {
                assert_eq!(path, dir.path().join(ALTERNATIVES_FILE))
            }
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_utf8_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(ALTERNATIVES_FILE),
            b"<alternatives><alternative id=\"caf\xe9\"/></alternatives>",
        )
        .unwrap();

        match XmcdaInputReader::new(dir.path()).load_alternatives() {
            Err(XmcdaError::Format { path, message }) => {
                assert_eq!(path, dir.path().join(ALTERNATIVES_FILE));
                assert!(message.contains("UTF-8"), "{}", message);
            }
            other => panic!("Expected Format error, got {:?}", other),
        }
    }

    #[test]
    fn latin1_declared_document_is_decoded() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(ALTERNATIVES_FILE),
            b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n\
              <alternatives><alternative id=\"caf\xe9\"/></alternatives>",
        )
        .unwrap();

        let alts = XmcdaInputReader::new(dir.path()).load_alternatives().unwrap();
        assert_eq!(alts.position("caf\u{e9}"), Some(0));
    }

    #[test]
    fn other_declared_encoding_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CRITERIA_FILE),
            b"<?xml version='1.0' encoding='Shift_JIS'?><criteria><criterion id=\"\x82\xa0\"/></criteria>",
        )
        .unwrap();

        match XmcdaInputReader::new(dir.path()).load_criteria() {
            Err(XmcdaError::Format { message, .. }) => {
                assert!(message.contains("shift_jis"), "{}", message)
            }
            other => panic!("Expected Format error, got {:?}", other),
        }
    }

    #[test]
    fn reader_loads_problem_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(ALTERNATIVES_FILE), ALTERNATIVES).unwrap();
        fs::write(dir.path().join(CRITERIA_FILE), CRITERIA).unwrap();
        fs::write(
            dir.path().join(PERFORMANCE_TABLE_FILE),
            table(&[
                ("A1", vec![performance("C1", "3.0"), performance("C2", "5.0")]),
                ("A2", vec![performance("C1", "1.0"), performance("C2", "9.0")]),
            ]),
        )
        .unwrap();

        let model = XmcdaInputReader::new(dir.path()).load_problem().unwrap();
        assert_eq!(model.alternatives().len(), 2);
        assert_eq!(model.criteria().len(), 2);
        assert_eq!(
            model.measurement(&CriterionId::new("C2").unwrap(), &AlternativeId::new("A2").unwrap()),
            Some(point(9.0))
        );
    }
}
