//! Adapters - Implementations of port interfaces and document formats.
//!
//! - `xmcda` - XMCDA 2.0 input reader and result writer
//! - `engine` - Acceptability engine implementations (external process, mock)

pub mod engine;
pub mod xmcda;

pub use engine::{MockAcceptabilityEngine, ProcessAcceptabilityEngine};
pub use xmcda::{XmcdaError, XmcdaInputReader, XmcdaResultWriter};
