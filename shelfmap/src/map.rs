//! Map metadata and the overlay's view of a book.
//!
//! `GET /api/map` must be a JSON object, otherwise the controller falls back
//! to defaults. Inside it, sections are decoded one at a time: a section
//! with missing or mistyped geometry is skipped and the rest are kept.
//! Book records from search results get the same per-record treatment, so
//! a single malformed entry never sinks the whole document.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::MapError;
use crate::viewbox::{Point, ViewBox};

/// A static labeled region of the floor plan, such as a shelving aisle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Left edge in view-box units.
    pub x: f64,
    /// Top edge in view-box units.
    pub y: f64,
    /// Width in view-box units.
    pub w: f64,
    /// Height in view-box units.
    pub h: f64,
}

impl Section {
    /// Display label: the name when present and non-blank, else the id.
    #[must_use]
    pub fn label(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.id,
        }
    }
}

/// Payload of `GET /api/map`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MapMetadata {
    /// `[width, height]`; either entry may be missing, null or non-numeric.
    #[serde(rename = "viewBox", default, deserialize_with = "deserialize_view_box")]
    pub view_box: Option<Vec<Option<f64>>>,
    #[serde(default, deserialize_with = "deserialize_sections")]
    pub sections: Vec<Section>,
}

impl MapMetadata {
    /// Decode a metadata document.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::Decode`] when the body is not valid JSON or not a
    /// JSON object.
    pub fn from_json(body: &str) -> Result<Self, MapError> {
        let value: Value = serde_json::from_str(body).map_err(|e| MapError::Decode(e.to_string()))?;
        if !value.is_object() {
            return Err(MapError::Decode("map metadata is not a JSON object".to_owned()));
        }
        Self::deserialize(value).map_err(|e| MapError::Decode(e.to_string()))
    }

    /// Apply the advertised dimensions over `base`, keeping `base` for any
    /// dimension that is absent or not positive.
    #[must_use]
    pub fn view_box_over(&self, base: ViewBox) -> ViewBox {
        let dims = self.view_box.as_deref().unwrap_or_default();
        let width = dims.first().copied().flatten();
        let height = dims.get(1).copied().flatten();
        base.with_overrides(width, height)
    }
}

/// A book as far as the overlay cares: identity, labels and shelf position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub shelf: Option<String>,
    pub pos_x: Option<f64>,
    pub pos_y: Option<f64>,
}

impl Book {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into(), ..Self::default() }
    }

    #[must_use]
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.pos_x = Some(x);
        self.pos_y = Some(y);
        self
    }

    #[must_use]
    pub fn on_shelf(mut self, shelf: impl Into<String>) -> Self {
        self.shelf = Some(shelf.into());
        self
    }

    /// Shelf position, only when both coordinates are known.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        Some(Point::new(self.pos_x?, self.pos_y?))
    }

    /// Decode one search-result record (`{ id, titulo, estante?, pos_x?, pos_y? }`).
    ///
    /// Returns `None` only when the record is not a JSON object. Missing or
    /// mistyped fields fall back to empty/absent values; numeric ids are
    /// stringified and numeric-string coordinates are parsed.
    #[must_use]
    pub fn from_record(record: &Value) -> Option<Self> {
        let fields = record.as_object()?;
        Some(Self {
            id: text_field(fields, "id").unwrap_or_default(),
            title: text_field(fields, "titulo").unwrap_or_default(),
            shelf: text_field(fields, "estante").filter(|s| !s.trim().is_empty()),
            pos_x: coordinate_field(fields, "pos_x"),
            pos_y: coordinate_field(fields, "pos_y"),
        })
    }

    /// Decode a batch of records. Anything but an array yields an empty batch;
    /// records that are not objects are skipped.
    #[must_use]
    pub fn batch_from_json(value: &Value) -> Vec<Self> {
        value
            .as_array()
            .map(|records| records.iter().filter_map(Self::from_record).collect())
            .unwrap_or_default()
    }
}

fn text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn coordinate_field(fields: &Map<String, Value>, key: &str) -> Option<f64> {
    let value = match fields.get(key)? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(parsed) => parsed,
            Err(_) => return None,
        },
        _ => return None,
    };
    value.is_finite().then_some(value)
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}

fn deserialize_view_box<'de, D>(deserializer: D) -> Result<Option<Vec<Option<f64>>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(dims) => Some(dims.iter().map(Value::as_f64).collect()),
        _ => None,
    })
}

/// Keeps every well-formed section in order; anything but an array is empty.
fn deserialize_sections<'de, D>(deserializer: D) -> Result<Vec<Section>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(entries) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    let mut sections = Vec::with_capacity(entries.len());
    for entry in entries {
        match Section::deserialize(entry) {
            Ok(section) => sections.push(section),
            Err(e) => log::warn!("skipping malformed map section: {e}"),
        }
    }
    Ok(sections)
}
