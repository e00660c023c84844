#![allow(clippy::float_cmp)]

use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::scene::Scene;

// =============================================================
// Helpers
// =============================================================

struct FakeSource {
    result: Result<MapMetadata, MapError>,
}

impl MapSource for FakeSource {
    async fn fetch_map(&self) -> Result<MapMetadata, MapError> {
        self.result.clone()
    }
}

fn library_map() -> MapMetadata {
    MapMetadata {
        view_box: Some(vec![Some(200.0), Some(100.0)]),
        sections: vec![Section { id: "A1".into(), name: None, x: 0.0, y: 0.0, w: 100.0, h: 50.0 }],
    }
}

fn ready_controller(meta: MapMetadata) -> OverlayController<Scene> {
    let mut controller = OverlayController::new(Scene::new());
    block_on(controller.initialize(&FakeSource { result: Ok(meta) }));
    controller
}

fn marker_positions(controller: &OverlayController<Scene>) -> Vec<(String, f64, f64)> {
    controller
        .target()
        .markers()
        .iter()
        .map(|m| (m.book_id.clone(), m.position.left, m.position.top))
        .collect()
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn new_controller_is_uninitialized_with_defaults() {
    let controller = OverlayController::new(Scene::new());
    assert_eq!(controller.phase(), Phase::Uninitialized);
    assert_eq!(controller.state().view_box, ViewBox::default());
    assert!(controller.state().sections.is_empty());
    assert_eq!(controller.target().passes(), 0);
}

#[test]
fn initialize_success_applies_metadata_and_draws() {
    let controller = ready_controller(library_map());
    assert!(controller.is_ready());
    assert_eq!(controller.state().view_box, ViewBox::new(200.0, 100.0));
    assert_eq!(controller.target().passes(), 1);
    assert!(controller.target().markers().is_empty());

    let region = &controller.target().regions()[0];
    assert_eq!(region.id, "A1");
    assert_eq!(region.rect.left, 0.0);
    assert_eq!(region.rect.top, 0.0);
    assert_eq!(region.rect.width, 50.0);
    assert_eq!(region.rect.height, 50.0);
}

#[test]
fn initialize_http_500_still_reaches_ready_with_defaults() {
    let mut controller = OverlayController::new(Scene::new());
    block_on(controller.initialize(&FakeSource { result: Err(MapError::Status(500)) }));
    assert_eq!(controller.phase(), Phase::Ready);
    assert_eq!(controller.state().view_box, ViewBox::new(600.0, 400.0));
    assert!(controller.state().sections.is_empty());
    assert_eq!(controller.target().passes(), 1);
}

#[test]
fn initialize_transport_and_decode_failures_are_silent() {
    for err in [MapError::Transport("offline".into()), MapError::Decode("eof".into())] {
        let mut controller = OverlayController::new(Scene::new());
        block_on(controller.initialize(&FakeSource { result: Err(err) }));
        assert!(controller.is_ready());
        assert!(controller.target().regions().is_empty());
    }
}

#[test]
fn initialize_runs_only_once() {
    let mut controller = ready_controller(library_map());
    let other = MapMetadata { view_box: Some(vec![Some(999.0), Some(999.0)]), sections: Vec::new() };
    block_on(controller.initialize(&FakeSource { result: Ok(other) }));
    assert_eq!(controller.state().view_box, ViewBox::new(200.0, 100.0));
    assert_eq!(controller.state().sections.len(), 1);
    assert_eq!(controller.target().passes(), 1);
}

#[test]
fn split_initialize_walks_the_phases() {
    let mut controller = OverlayController::new(Scene::new());
    assert!(controller.begin_initialize());
    assert_eq!(controller.phase(), Phase::MetadataLoading);
    assert!(!controller.begin_initialize());
    assert_eq!(controller.phase(), Phase::MetadataLoading);
    assert!(controller.finish_initialize(Ok(library_map())));
    assert_eq!(controller.phase(), Phase::Ready);
}

#[test]
fn finish_without_begin_is_ignored() {
    let mut controller = OverlayController::new(Scene::new());
    assert!(!controller.finish_initialize(Ok(library_map())));
    assert_eq!(controller.phase(), Phase::Uninitialized);
    assert!(controller.state().sections.is_empty());
}

#[test]
fn finish_twice_is_ignored() {
    let mut controller = ready_controller(library_map());
    assert!(!controller.finish_initialize(Err(MapError::Status(503))));
    assert_eq!(controller.state().sections.len(), 1);
}

#[test]
fn host_view_box_is_kept_on_failure_and_partially_overridden_on_success() {
    let host = ViewBox::new(1200.0, 800.0);

    let mut failed = OverlayController::with_view_box(Scene::new(), host);
    block_on(failed.initialize(&FakeSource { result: Err(MapError::Status(404)) }));
    assert_eq!(failed.state().view_box, host);

    let partial = MapMetadata { view_box: Some(vec![Some(0.0), Some(400.0)]), sections: Vec::new() };
    let mut ok = OverlayController::with_view_box(Scene::new(), host);
    block_on(ok.initialize(&FakeSource { result: Ok(partial) }));
    assert_eq!(ok.state().view_box, ViewBox::new(1200.0, 400.0));
}

// =============================================================
// update_markers
// =============================================================

#[test]
fn update_places_book_at_percentages() {
    let mut controller = OverlayController::new(Scene::new());
    controller.update_markers(vec![Book::new("1", "Rayuela").at(300.0, 200.0)]);
    assert_eq!(marker_positions(&controller), vec![("1".to_owned(), 50.0, 50.0)]);
}

#[test]
fn update_before_ready_uses_defaults() {
    let mut controller = OverlayController::new(Scene::new());
    controller.update_markers(vec![Book::new("1", "x").at(60.0, 40.0)]);
    assert_eq!(controller.phase(), Phase::Uninitialized);
    assert!(controller.target().regions().is_empty());
    assert_eq!(marker_positions(&controller), vec![("1".to_owned(), 10.0, 10.0)]);
}

#[test]
fn update_while_loading_is_redrawn_against_metadata_when_ready() {
    let mut controller = OverlayController::new(Scene::new());
    assert!(controller.begin_initialize());
    controller.update_markers(vec![Book::new("1", "x").at(100.0, 50.0)]);
    assert!(controller.finish_initialize(Ok(library_map())));
    assert_eq!(marker_positions(&controller), vec![("1".to_owned(), 50.0, 50.0)]);
    assert_eq!(controller.target().regions().len(), 1);
}

#[test]
fn update_with_empty_clears_markers_but_keeps_sections() {
    let mut controller = ready_controller(library_map());
    controller.update_markers(vec![Book::new("1", "x").at(10.0, 10.0), Book::new("2", "y").at(20.0, 20.0)]);
    assert_eq!(controller.target().markers().len(), 2);
    controller.update_markers(Vec::new());
    assert!(controller.target().markers().is_empty());
    assert_eq!(controller.target().regions().len(), 1);
}

#[test]
fn update_is_idempotent() {
    let mut controller = ready_controller(library_map());
    let books = vec![Book::new("1", "x").at(10.0, 10.0), Book::new("1", "x").at(10.0, 10.0)];
    controller.update_markers(books.clone());
    let first = controller.target().clone();
    controller.update_markers(books);
    assert_eq!(controller.target().markers(), first.markers());
    assert_eq!(controller.target().regions(), first.regions());
    assert_eq!(controller.target().passes(), first.passes() + 1);
}

#[test]
fn update_last_call_wins() {
    let mut controller = ready_controller(library_map());
    controller.update_markers(vec![Book::new("old", "x").at(10.0, 10.0)]);
    controller.update_markers(vec![Book::new("new", "y").at(20.0, 20.0)]);
    let ids: Vec<_> = controller.target().markers().iter().map(|m| m.book_id.clone()).collect();
    assert_eq!(ids, ["new"]);
    assert_eq!(controller.state().current_books.len(), 1);
}

#[test]
fn update_json_non_array_is_empty() {
    let mut controller = ready_controller(library_map());
    controller.update_markers(vec![Book::new("1", "x").at(10.0, 10.0)]);
    controller.update_markers_json(&json!({"total": 3}));
    assert!(controller.target().markers().is_empty());
    assert!(controller.state().current_books.is_empty());
}

#[test]
fn update_json_degrades_per_record() {
    let mut controller = OverlayController::new(Scene::new());
    controller.update_markers_json(&json!([
        {"id": "1", "titulo": "Con posición", "pos_x": 300, "pos_y": 200},
        {"id": "2", "titulo": "Solo x", "pos_x": 300},
        "basura",
        {"id": 42, "titulo": "Id numérico", "estante": "C-2", "pos_x": "60", "pos_y": "40"}
    ]));
    let markers = controller.target().markers();
    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0].book_id, "1");
    assert_eq!(markers[1].book_id, "42");
    assert_eq!(markers[1].label, "Id numérico — Estante C-2");
    assert_eq!(markers[1].href, "/detalle_libro.html?id=42");
    assert_eq!(controller.state().current_books.len(), 3);
}
