//! Networking modules for the stars REST surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and `types` defines the shared wire schema and
//! page props.

pub mod api;
pub mod types;
