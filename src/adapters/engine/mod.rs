//! Engine adapters - implementations of the AcceptabilityEngine port.
//!
//! - `ProcessAcceptabilityEngine` - Runs an external SMAA-2 executable over JSON stdio
//! - `MockAcceptabilityEngine` - Configurable in-process engine for tests

mod mock_engine;
mod process_engine;

pub use mock_engine::{MockAcceptabilityEngine, MockCall, MockError, MockResponse};
pub use process_engine::ProcessAcceptabilityEngine;
