//! Reusable UI components.
//!
//! DESIGN
//! ======
//! Components are thin views. Fallback text and style computation live in
//! plain functions next to each component so they test without a browser.

pub mod book_card;
pub mod map_panel;
