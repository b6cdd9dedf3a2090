//! HTTP API: server, routing, and request/response mapping.
//!
//! Thin shell over `railcast-pipeline`: handlers translate wire payloads to
//! the orchestrator and its error taxonomy back to status codes. No decision
//! logic lives here.

pub mod app;
pub mod config;
pub mod state;
