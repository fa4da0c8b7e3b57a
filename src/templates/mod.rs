//! Templates Module
//!
//! The per-agent-type service template catalog and its read-only
//! registry.

pub mod catalog;
pub mod registry;

pub use catalog::KPI_DESC_PREFIX;
pub use registry::{find_by_agent_type, find_by_hash, templates};
