//! Wire DTOs for the catalog REST API.
//!
//! DESIGN
//! ======
//! The backend serializes spreadsheet rows, so field types drift: ids and
//! years may arrive as numbers, coordinates as numeric strings, anything may
//! be null. Every field here decodes leniently so one odd cell never fails a
//! whole search response.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One catalog record as returned by `/api/books` and `/api/books/<id>`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    #[serde(default, deserialize_with = "deserialize_text_or_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub titulo: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub autor: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub isbn: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub categoria: Option<String>,
    /// Publication year.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub anio: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub paginas: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub descripcion: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub portada_url: Option<String>,
    /// Reading room.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub sala: Option<String>,
    /// Shelf label.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub estante: Option<String>,
    /// Floor-plan x in view-box units.
    #[serde(default, deserialize_with = "deserialize_coordinate")]
    pub pos_x: Option<f64>,
    /// Floor-plan y in view-box units.
    #[serde(default, deserialize_with = "deserialize_coordinate")]
    pub pos_y: Option<f64>,
}

impl BookRecord {
    /// The overlay's view of this record.
    pub fn to_overlay_book(&self) -> shelfmap::Book {
        shelfmap::Book {
            id: self.id.clone(),
            title: self.titulo.clone().unwrap_or_default(),
            shelf: self.estante.clone(),
            pos_x: self.pos_x,
            pos_y: self.pos_y,
        }
    }
}

/// Payload of `GET /api/books`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub results: Vec<BookRecord>,
}

/// Strings pass through, numbers and booleans are stringified, blanks and
/// everything else become `None`.
fn text_from_value(value: Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    if text.trim().is_empty() { None } else { Some(text) }
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_from_value(Value::deserialize(deserializer)?))
}

fn deserialize_text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_from_value(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn deserialize_coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let coordinate = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(coordinate.filter(|c| c.is_finite()))
}
