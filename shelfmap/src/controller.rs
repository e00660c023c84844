//! Overlay lifecycle and the marker sync entry point.
//!
//! The controller is an ordinary value owned by the page composition layer.
//! It moves through an explicit [`Phase`] state machine:
//!
//! ```text
//! Uninitialized --begin_initialize--> MetadataLoading --finish_initialize--> Ready
//! ```
//!
//! `begin_initialize` fires when the reference image has loaded and the
//! container has real dimensions. `finish_initialize` applies the metadata
//! result (or falls back to defaults) and runs the first overlay pass.
//! [`OverlayController::update_markers`] is accepted in every phase; before
//! `Ready` it draws against the initial view box with no sections.
//!
//! ERROR HANDLING
//! ==============
//! Metadata failures are logged and swallowed. The overlay is secondary to
//! search and degrades to "no sections" rather than blocking anything.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::future::Future;

use serde_json::Value;

use crate::error::MapError;
use crate::map::{Book, MapMetadata, Section};
use crate::render::{self, RenderTarget};
use crate::viewbox::ViewBox;

/// Source of `GET /api/map` metadata.
pub trait MapSource {
    /// Fetch and decode the map metadata document.
    fn fetch_map(&self) -> impl Future<Output = Result<MapMetadata, MapError>>;
}

/// Lifecycle phase of the overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Reference image not loaded yet.
    #[default]
    Uninitialized,
    /// Map metadata request in flight.
    MetadataLoading,
    /// Metadata applied (or defaulted) and the first pass drawn.
    Ready,
}

/// Everything a layout pass reads.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlayState {
    pub view_box: ViewBox,
    pub sections: Vec<Section>,
    pub current_books: Vec<Book>,
}

/// Owns the overlay state and its render target.
#[derive(Clone, Debug, Default)]
pub struct OverlayController<T: RenderTarget> {
    state: OverlayState,
    phase: Phase,
    /// View box restored when metadata cannot be loaded.
    fallback_view_box: ViewBox,
    target: T,
}

impl<T: RenderTarget> OverlayController<T> {
    /// Controller with the 600×400 default view box.
    #[must_use]
    pub fn new(target: T) -> Self {
        Self::with_view_box(target, ViewBox::default())
    }

    /// Controller whose initial view box comes from the host (for example the
    /// map container's declared dimensions). Metadata may still override it.
    #[must_use]
    pub fn with_view_box(target: T, view_box: ViewBox) -> Self {
        Self {
            state: OverlayState { view_box, ..OverlayState::default() },
            phase: Phase::Uninitialized,
            fallback_view_box: view_box,
            target,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    #[must_use]
    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    #[must_use]
    pub fn target(&self) -> &T {
        &self.target
    }

    // --- Lifecycle ---

    /// Load metadata from `source` and become ready.
    ///
    /// Ignored unless the controller is still uninitialized.
    pub async fn initialize<S: MapSource>(&mut self, source: &S) {
        if !self.begin_initialize() {
            return;
        }
        let result = source.fetch_map().await;
        self.finish_initialize(result);
    }

    /// `Uninitialized -> MetadataLoading`.
    ///
    /// Returns `false` (and changes nothing) in any other phase, so a caller
    /// that cannot hold the controller across an await can split
    /// initialization around its own fetch.
    pub fn begin_initialize(&mut self) -> bool {
        if self.phase != Phase::Uninitialized {
            log::debug!("overlay initialize ignored in phase {:?}", self.phase);
            return false;
        }
        self.phase = Phase::MetadataLoading;
        log::debug!("overlay metadata loading");
        true
    }

    /// `MetadataLoading -> Ready`, applying `result` and drawing a pass.
    ///
    /// On error the fallback view box and an empty section list are used.
    /// The pass draws the most recent book set, which is empty unless
    /// `update_markers` was called while loading. Returns `false` outside
    /// `MetadataLoading`.
    pub fn finish_initialize(&mut self, result: Result<MapMetadata, MapError>) -> bool {
        if self.phase != Phase::MetadataLoading {
            log::debug!("overlay metadata result ignored in phase {:?}", self.phase);
            return false;
        }
        match result {
            Ok(meta) => {
                self.state.view_box = meta.view_box_over(self.fallback_view_box);
                self.state.sections = meta.sections;
            }
            Err(e) => {
                log::warn!("map metadata unavailable, using defaults: {e}");
                self.state.view_box = self.fallback_view_box;
                self.state.sections = Vec::new();
            }
        }
        self.phase = Phase::Ready;
        log::debug!(
            "overlay ready: view box {}x{}, {} sections",
            self.state.view_box.width(),
            self.state.view_box.height(),
            self.state.sections.len()
        );
        self.layout();
        true
    }

    // --- Sync ---

    /// Replace the current book set and redraw both layers.
    pub fn update_markers(&mut self, books: Vec<Book>) {
        self.state.current_books = books;
        self.layout();
    }

    /// [`update_markers`](Self::update_markers) from raw search-result JSON.
    ///
    /// Non-array input is treated as an empty set; malformed records degrade
    /// individually (see [`Book::batch_from_json`]).
    pub fn update_markers_json(&mut self, books: &Value) {
        self.update_markers(Book::batch_from_json(books));
    }

    fn layout(&mut self) {
        let OverlayState { view_box, sections, current_books } = &self.state;
        render::draw(&mut self.target, view_box, sections, current_books);
        log::debug!("overlay pass: {} sections, {} books", sections.len(), current_books.len());
    }
}
