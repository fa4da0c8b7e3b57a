//! Hangar -- Agent Deployment Manager Core
//!
//! Service-template configuration model and reconciliation pipeline
//! for a desktop agent-deployment manager: per-agent-type deployment
//! templates, the merge logic that turns user form input into partial
//! updates for the service-management backend, and agent-specific
//! config adapters.

pub mod types;
pub mod error;
pub mod config;
pub mod chains;
pub mod templates;
pub mod reconcile;
pub mod backend;
pub mod store;
pub mod agents;
