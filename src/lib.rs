//! SMAA XMCDA - Stochastic Multicriteria Acceptability Analysis front-end
//!
//! This crate reads a decision problem expressed as XMCDA 2.0 documents
//! (alternatives, criteria, performance table), hands the validated model to an
//! SMAA-2 acceptability engine, and writes rank acceptabilities, central
//! weights, confidence factors and run messages back as XMCDA documents.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
