//! Agents Module
//!
//! Per-agent-type adapters for auxiliary configuration the generic
//! service template does not represent.

pub mod supafund;

pub use supafund::{validate_weights, SupafundAdapter};
