//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! domain and the outside world. Adapters implement these ports.
//!
//! - `AcceptabilityEngine` - The external SMAA-2 simulation

mod acceptability_engine;

pub use acceptability_engine::{AcceptabilityEngine, EngineError};
