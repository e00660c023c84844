//! Recording render target.
//!
//! Declarative hosts (the Leptos client) keep a [`Scene`] inside the overlay
//! controller and render its regions and markers from reactive state. Tests
//! use it to inspect exactly what a pass produced.

use crate::render::{Marker, Region, RenderTarget};

/// The regions and markers produced by the most recent overlay pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    regions: Vec<Region>,
    markers: Vec<Marker>,
    passes: u64,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Number of clears seen so far; one per overlay pass.
    #[must_use]
    pub fn passes(&self) -> u64 {
        self.passes
    }
}

impl RenderTarget for Scene {
    fn clear(&mut self) {
        self.regions.clear();
        self.markers.clear();
        self.passes += 1;
    }

    fn add_region(&mut self, region: Region) {
        self.regions.push(region);
    }

    fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }
}
