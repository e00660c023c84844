//! Floor-plan overlay for the library catalog browser.
//!
//! Book shelf positions and static floor-plan sections are authored in an
//! abstract view-box space tied to a reference image. This crate projects them
//! into container-relative percentages so a browser resize needs no
//! recomputation, and owns the protocol that keeps the overlay in sync with
//! search results. It has no browser dependencies: the host renders whatever
//! the controller pushes into its [`render::RenderTarget`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Overlay lifecycle, metadata loading and the marker sync entry point |
//! | [`viewbox`] | View-box dimensions and the percentage coordinate mapper |
//! | [`map`] | Map metadata, sections and the overlay's view of a book |
//! | [`render`] | Render-target seam plus the section and marker layers |
//! | [`scene`] | Recording render target consumed by declarative hosts |
//! | [`nav`] | Detail-view URLs for marker activation |
//! | [`error`] | Map metadata loading errors |
//! | [`consts`] | Shared defaults (fallback view-box, placeholder labels) |

pub mod consts;
pub mod controller;
pub mod error;
pub mod map;
pub mod nav;
pub mod render;
pub mod scene;
pub mod viewbox;

pub use controller::{MapSource, OverlayController, OverlayState, Phase};
pub use error::MapError;
pub use map::{Book, MapMetadata, Section};
pub use render::{Marker, Region, RenderTarget};
pub use scene::Scene;
pub use viewbox::{Percent, PercentRect, Point, ViewBox};
