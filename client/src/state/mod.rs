//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by page (`search`, `detail`) so each route owns a small
//! focused model. Overlay state lives in `shelfmap::OverlayController`,
//! held by the page that renders the map.

pub mod detail;
pub mod search;
