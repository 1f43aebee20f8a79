//! XMCDA adapters - reading decision problems and writing SMAA results.
//!
//! - `XmcdaInputReader` - Loads alternatives, criteria and the performance table
//! - `XmcdaResultWriter` - Writes rank acceptabilities, central weights,
//!   confidence factors and run messages
//!
//! Input is traversed as a tree (roxmltree); output documents are immutable
//! serde records serialized by quick-xml.

mod documents;
mod error;
mod reader;
mod tree;
mod value_parser;
mod writer;

pub use documents::{render, XmcdaDocument, XMCDA_NAMESPACE};
pub use error::XmcdaError;
pub use reader::{
    parse_alternatives, parse_criteria, parse_performance_table, XmcdaInputReader,
    ALTERNATIVES_FILE, CRITERIA_FILE, PERFORMANCE_TABLE_FILE,
};
pub use value_parser::{parse_real, parse_value};
pub use writer::{
    XmcdaResultWriter, CENTRAL_WEIGHTS_FILE, CONFIDENCE_FACTORS_FILE, MESSAGES_FILE,
    RANK_ACCEPTABILITIES_FILE,
};
