//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages bind route state to network calls and shared components. Each page
//! owns the overlay it renders.

pub mod detail;
pub mod search;
