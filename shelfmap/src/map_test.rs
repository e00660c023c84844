#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

// =============================================================
// MapMetadata
// =============================================================

#[test]
fn metadata_decodes_full_document() {
    let meta = MapMetadata::from_json(
        r#"{
            "viewBox": [600, 400],
            "sections": [
                {"id": "A", "name": "Sección A (Novela)", "x": 30, "y": 40, "w": 160, "h": 120},
                {"id": "B", "x": 220, "y": 40, "w": 160, "h": 120}
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(meta.view_box, Some(vec![Some(600.0), Some(400.0)]));
    assert_eq!(meta.sections.len(), 2);
    assert_eq!(meta.sections[0].label(), "Sección A (Novela)");
    assert_eq!(meta.sections[1].label(), "B");
    assert_eq!(meta.sections[1].w, 160.0);
}

#[test]
fn metadata_empty_object_is_valid() {
    let meta = MapMetadata::from_json("{}").unwrap();
    assert!(meta.view_box.is_none());
    assert!(meta.sections.is_empty());
}

#[test]
fn metadata_null_sections_is_empty() {
    let meta = MapMetadata::from_json(r#"{"sections": null}"#).unwrap();
    assert!(meta.sections.is_empty());
}

#[test]
fn metadata_numeric_section_id_is_stringified() {
    let meta = MapMetadata::from_json(r#"{"sections": [{"id": 7, "x": 0, "y": 0, "w": 1, "h": 1}]}"#).unwrap();
    assert_eq!(meta.sections[0].id, "7");
}

#[test]
fn metadata_rejects_malformed_json() {
    let err = MapMetadata::from_json("<html>oops</html>").unwrap_err();
    assert!(matches!(err, MapError::Decode(_)));
}

#[test]
fn metadata_rejects_non_object_document() {
    let err = MapMetadata::from_json("[1, 2]").unwrap_err();
    assert!(matches!(err, MapError::Decode(_)));
}

#[test]
fn metadata_skips_malformed_sections_and_keeps_the_rest() {
    let meta = MapMetadata::from_json(
        r#"{
            "viewBox": [600, 400],
            "sections": [
                {"id": "A"},
                {"id": "B", "x": null, "y": 40, "w": 160, "h": 120},
                {"id": "C", "x": "30", "y": 200, "w": 160, "h": 120},
                "basura",
                {"id": "D", "x": 220, "y": 200, "w": 160, "h": 120}
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(meta.view_box, Some(vec![Some(600.0), Some(400.0)]));
    let ids: Vec<_> = meta.sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["D"]);
}

#[test]
fn metadata_non_array_sections_is_empty() {
    let meta = MapMetadata::from_json(r#"{"viewBox": [200, 100], "sections": {"A": 1}}"#).unwrap();
    assert!(meta.sections.is_empty());
    assert_eq!(meta.view_box_over(ViewBox::default()), ViewBox::new(200.0, 100.0));
}

#[test]
fn metadata_non_numeric_view_box_entries_fall_back_per_dimension() {
    let meta = MapMetadata::from_json(r#"{"viewBox": ["ancho", 300]}"#).unwrap();
    assert_eq!(meta.view_box, Some(vec![None, Some(300.0)]));
    assert_eq!(meta.view_box_over(ViewBox::default()), ViewBox::new(600.0, 300.0));

    let meta = MapMetadata::from_json(r#"{"viewBox": "600x400"}"#).unwrap();
    assert!(meta.view_box.is_none());
}

#[test]
fn view_box_over_applies_both_dimensions() {
    let meta = MapMetadata::from_json(r#"{"viewBox": [200, 100]}"#).unwrap();
    assert_eq!(meta.view_box_over(ViewBox::default()), ViewBox::new(200.0, 100.0));
}

#[test]
fn view_box_over_keeps_base_for_zero_or_missing() {
    let meta = MapMetadata::from_json(r#"{"viewBox": [0, null]}"#).unwrap();
    assert_eq!(meta.view_box_over(ViewBox::default()), ViewBox::default());

    let meta = MapMetadata::from_json(r#"{"viewBox": [900]}"#).unwrap();
    let vb = meta.view_box_over(ViewBox::default());
    assert_eq!(vb.width(), 900.0);
    assert_eq!(vb.height(), 400.0);
}

#[test]
fn view_box_over_without_view_box_is_base() {
    let base = ViewBox::new(1200.0, 800.0);
    assert_eq!(MapMetadata::default().view_box_over(base), base);
}

// =============================================================
// Section labels
// =============================================================

#[test]
fn section_blank_name_falls_back_to_id() {
    let s = Section { id: "C".into(), name: Some("   ".into()), x: 0.0, y: 0.0, w: 1.0, h: 1.0 };
    assert_eq!(s.label(), "C");
}

// =============================================================
// Book records
// =============================================================

#[test]
fn book_from_full_record() {
    let book = Book::from_record(&json!({
        "id": "42",
        "titulo": "Rayuela",
        "autor": "Julio Cortázar",
        "estante": "A-3",
        "pos_x": 120.5,
        "pos_y": 80
    }))
    .unwrap();
    assert_eq!(book.id, "42");
    assert_eq!(book.title, "Rayuela");
    assert_eq!(book.shelf.as_deref(), Some("A-3"));
    assert_eq!(book.position(), Some(Point::new(120.5, 80.0)));
}

#[test]
fn book_numeric_id_is_stringified() {
    let book = Book::from_record(&json!({"id": 42, "titulo": "x"})).unwrap();
    assert_eq!(book.id, "42");
}

#[test]
fn book_missing_fields_default() {
    let book = Book::from_record(&json!({})).unwrap();
    assert_eq!(book.id, "");
    assert_eq!(book.title, "");
    assert!(book.shelf.is_none());
    assert!(book.position().is_none());
}

#[test]
fn book_blank_shelf_is_absent() {
    let book = Book::from_record(&json!({"id": "1", "estante": ""})).unwrap();
    assert!(book.shelf.is_none());
}

#[test]
fn book_numeric_string_coordinates_parse() {
    let book = Book::from_record(&json!({"id": "1", "pos_x": " 300 ", "pos_y": "200.5"})).unwrap();
    assert_eq!(book.position(), Some(Point::new(300.0, 200.5)));
}

#[test]
fn book_null_or_garbage_coordinates_are_absent() {
    let book = Book::from_record(&json!({"id": "1", "pos_x": null, "pos_y": "n/a"})).unwrap();
    assert!(book.pos_x.is_none());
    assert!(book.pos_y.is_none());
}

#[test]
fn book_with_one_coordinate_has_no_position() {
    let book = Book::from_record(&json!({"id": "1", "pos_x": 10})).unwrap();
    assert_eq!(book.pos_x, Some(10.0));
    assert!(book.position().is_none());
}

#[test]
fn book_non_object_record_is_none() {
    assert!(Book::from_record(&json!("42")).is_none());
    assert!(Book::from_record(&json!(null)).is_none());
}

#[test]
fn batch_non_array_is_empty() {
    assert!(Book::batch_from_json(&json!({"results": []})).is_empty());
    assert!(Book::batch_from_json(&json!(null)).is_empty());
    assert!(Book::batch_from_json(&json!("books")).is_empty());
}

#[test]
fn batch_skips_non_objects_and_keeps_order() {
    let books = Book::batch_from_json(&json!([
        {"id": "1", "titulo": "Uno"},
        17,
        {"id": "2", "titulo": "Dos"}
    ]));
    let ids: Vec<_> = books.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, ["1", "2"]);
}

#[test]
fn builder_helpers_set_fields() {
    let book = Book::new("9", "Ficciones").on_shelf("B-1").at(1.0, 2.0);
    assert_eq!(book.shelf.as_deref(), Some("B-1"));
    assert_eq!(book.position(), Some(Point::new(1.0, 2.0)));
}
