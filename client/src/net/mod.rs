//! Networking modules for the catalog REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls (search, detail, categories, map metadata)
//! and `types` defines the wire schema of catalog records.

pub mod api;
pub mod types;
