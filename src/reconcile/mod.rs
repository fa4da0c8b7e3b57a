//! Reconciliation Module
//!
//! Merges user-edited form values back into a partial service-template
//! update, with per-agent-type form strategies and an explicit edit
//! session gating submission.

pub mod engine;
pub mod session;
pub mod strategies;

pub use engine::{build_partial_update, resolve_template, save};
pub use session::{EditSession, EditState};
