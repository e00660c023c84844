//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep timer and browser concerns out of page logic so the
//! pure parts stay testable on native targets.

pub mod debounce;
