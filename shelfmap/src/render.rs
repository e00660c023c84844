//! Overlay layers: projects sections and books into a render target.
//!
//! This module never touches a rendering surface. It turns overlay state into
//! [`Region`]s and [`Marker`]s and hands them to a [`RenderTarget`], which the
//! host implements against whatever surface it owns (see [`crate::scene`]).
//!
//! Every pass is a full clear followed by the section layer and then the
//! marker layer. There is no incremental diffing.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::consts::{UNKNOWN_SHELF, UNTITLED_BOOK};
use crate::map::{Book, Section};
use crate::nav::detail_href;
use crate::viewbox::{Percent, PercentRect, Point, ViewBox};

/// A static, non-interactive labeled region.
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    pub id: String,
    pub label: String,
    pub rect: PercentRect,
}

/// An interactive marker for one book's shelf location.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub book_id: String,
    pub position: Percent,
    /// Accessible label: title plus shelf.
    pub label: String,
    /// Hover text: the title.
    pub tooltip: String,
    /// Where activation navigates.
    pub href: String,
}

/// Surface capabilities the overlay layers need.
pub trait RenderTarget {
    /// Drop every region and marker currently drawn.
    fn clear(&mut self);

    fn add_region(&mut self, region: Region);

    fn add_marker(&mut self, marker: Marker);
}

/// Run one overlay pass: clear, then sections, then markers.
pub fn draw<T: RenderTarget + ?Sized>(target: &mut T, view_box: &ViewBox, sections: &[Section], books: &[Book]) {
    // Layer 1: clear.
    target.clear();

    // Layer 2: reference regions.
    draw_sections(target, view_box, sections);

    // Layer 3: book markers.
    draw_markers(target, view_box, books);
}

/// Add one region per section, in order.
pub fn draw_sections<T: RenderTarget + ?Sized>(target: &mut T, view_box: &ViewBox, sections: &[Section]) {
    for section in sections {
        target.add_region(region_for(section, view_box));
    }
}

/// Add one marker per placeable book, in order. Books missing a coordinate
/// are skipped; books sharing a position each get their own marker.
pub fn draw_markers<T: RenderTarget + ?Sized>(target: &mut T, view_box: &ViewBox, books: &[Book]) {
    for marker in books.iter().filter_map(|book| marker_for(book, view_box)) {
        target.add_marker(marker);
    }
}

#[must_use]
pub fn region_for(section: &Section, view_box: &ViewBox) -> Region {
    Region {
        id: section.id.clone(),
        label: section.label().to_owned(),
        rect: view_box.project_rect(Point::new(section.x, section.y), section.w, section.h),
    }
}

/// Marker for `book`, or `None` when its shelf position is unknown.
#[must_use]
pub fn marker_for(book: &Book, view_box: &ViewBox) -> Option<Marker> {
    let position = view_box.project(book.position()?);
    Some(Marker {
        book_id: book.id.clone(),
        position,
        label: marker_label(book),
        tooltip: display_title(book).to_owned(),
        href: detail_href(&book.id),
    })
}

/// `"<title> — Estante <shelf>"`, with `?` standing in for an unknown shelf.
#[must_use]
pub fn marker_label(book: &Book) -> String {
    let shelf = book.shelf.as_deref().unwrap_or(UNKNOWN_SHELF);
    format!("{} — Estante {shelf}", display_title(book))
}

fn display_title(book: &Book) -> &str {
    if book.title.trim().is_empty() { UNTITLED_BOOK } else { &book.title }
}
