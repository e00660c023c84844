//! Shared defaults for the shelfmap crate.

// ── View box ────────────────────────────────────────────────────

/// Fallback view-box width when metadata omits it or supplies a non-positive value.
pub const DEFAULT_VIEWBOX_WIDTH: f64 = 600.0;

/// Fallback view-box height when metadata omits it or supplies a non-positive value.
pub const DEFAULT_VIEWBOX_HEIGHT: f64 = 400.0;

// ── Labels ──────────────────────────────────────────────────────

/// Shelf label shown in a marker's accessible label when the book has none.
pub const UNKNOWN_SHELF: &str = "?";

/// Tooltip text for a marker whose book has an empty title.
pub const UNTITLED_BOOK: &str = "Libro";

// ── Navigation ──────────────────────────────────────────────────

/// Route of the book detail view. The book id travels in the `id` query parameter.
pub const DETAIL_ROUTE: &str = "/detalle_libro.html";
