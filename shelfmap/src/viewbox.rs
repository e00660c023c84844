#[cfg(test)]
#[path = "viewbox_test.rs"]
mod viewbox_test;

use crate::consts::{DEFAULT_VIEWBOX_HEIGHT, DEFAULT_VIEWBOX_WIDTH};

/// A point in view-box space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Placement relative to the live container box, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percent {
    pub left: f64,
    pub top: f64,
}

/// A rectangle relative to the live container box, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Map one coordinate onto a percentage of its axis.
///
/// Pure and linear. No clamping: values outside `0..=dimension` land outside
/// `0..=100`. Callers go through [`ViewBox`], which guarantees a positive
/// dimension.
#[must_use]
pub fn to_percent(value: f64, dimension: f64) -> f64 {
    value / dimension * 100.0
}

/// Dimensions of the coordinate space floor-plan positions are authored in.
///
/// Both dimensions are always finite and positive. Absent or unusable values
/// are replaced at construction time, so projection never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    width: f64,
    height: f64,
}

impl Default for ViewBox {
    fn default() -> Self {
        Self { width: DEFAULT_VIEWBOX_WIDTH, height: DEFAULT_VIEWBOX_HEIGHT }
    }
}

impl ViewBox {
    /// Build a view box, replacing each unusable dimension with the 600×400 default.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self::default().with_overrides(Some(width), Some(height))
    }

    /// Apply metadata dimensions on top of this view box.
    ///
    /// Each dimension is taken only when present, finite and positive;
    /// otherwise the current value is kept.
    #[must_use]
    pub fn with_overrides(self, width: Option<f64>, height: Option<f64>) -> Self {
        Self {
            width: usable(width).unwrap_or(self.width),
            height: usable(height).unwrap_or(self.height),
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Project a view-box point to container percentages.
    #[must_use]
    pub fn project(&self, point: Point) -> Percent {
        Percent { left: to_percent(point.x, self.width), top: to_percent(point.y, self.height) }
    }

    /// Project a view-box rectangle (top-left origin plus size) to container percentages.
    #[must_use]
    pub fn project_rect(&self, origin: Point, width: f64, height: f64) -> PercentRect {
        let Percent { left, top } = self.project(origin);
        PercentRect {
            left,
            top,
            width: to_percent(width, self.width),
            height: to_percent(height, self.height),
        }
    }
}

fn usable(dimension: Option<f64>) -> Option<f64> {
    dimension.filter(|d| d.is_finite() && *d > 0.0)
}
