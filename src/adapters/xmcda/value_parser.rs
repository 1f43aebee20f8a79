//! Value parser - reads a `value` element into an [`Interval`].
//!
//! Two shapes are recognised:
//!
//! ```xml
//! <value><real>3.0</real></value>
//! <value><interval>
//!   <lowerBound><real>1.0</real></lowerBound>
//!   <upperBound><real>2.0</real></upperBound>
//! </interval></value>
//! ```

use roxmltree::Node;

use super::tree::first_descendant;
use super::XmcdaError;
use crate::domain::foundation::Interval;

/// Parses a `value` element as a point value or a bounded interval.
pub fn parse_value(value: Node<'_, '_>) -> Result<Interval, XmcdaError> {
    if let Some(interval) = first_descendant(value, "interval") {
        let lower = bound(interval, "lowerBound")?;
        let upper = bound(interval, "upperBound")?;
        return Interval::try_new(lower, upper).map_err(|e| XmcdaError::malformed(e.to_string()));
    }

    let real = first_descendant(value, "real")
        .ok_or_else(|| XmcdaError::malformed("value has neither a real nor an interval"))?;
    let v = parse_real(real.text())?;
    Interval::point(v).map_err(|e| XmcdaError::malformed(e.to_string()))
}

fn bound(interval: Node<'_, '_>, name: &'static str) -> Result<f64, XmcdaError> {
    let node = first_descendant(interval, name)
        .ok_or_else(|| XmcdaError::malformed(format!("interval without {}", name)))?;
    let real = first_descendant(node, "real")
        .ok_or_else(|| XmcdaError::malformed(format!("{} without a real", name)))?;
    parse_real(real.text())
}

/// Parses the text of a `real` element. Whitespace around the number is ignored.
pub fn parse_real(text: Option<&str>) -> Result<f64, XmcdaError> {
    let text = text.map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return Err(XmcdaError::malformed("empty real"));
    }
    text.parse::<f64>()
        .map_err(|_| XmcdaError::malformed(format!("'{}' is not a real number", text)))
}
