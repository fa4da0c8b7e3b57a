//! Backend Module
//!
//! HTTP client for the remote service-management backend. The core
//! consumes its lifecycle calls; it never defines them.

pub mod client;

pub use client::HttpBackend;
