//! Book detail page state.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use crate::net::types::BookRecord;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum DetailState {
    /// No usable `id` query parameter.
    Missing,
    #[default]
    Loading,
    Loaded(BookRecord),
    Failed,
}

impl DetailState {
    /// Status line for every state but `Loaded`.
    pub fn status_text(&self) -> Option<&'static str> {
        match self {
            Self::Missing => Some("Falta id de libro."),
            Self::Loading => Some("Cargando..."),
            Self::Failed => Some("No se pudo cargar el libro."),
            Self::Loaded(_) => None,
        }
    }
}

/// The `id` query value, when present and not blank.
pub fn requested_id(raw: Option<String>) -> Option<String> {
    raw.map(|id| id.trim().to_owned()).filter(|id| !id.is_empty())
}

/// `"Sala X · Estante Y"`, or whichever half is known.
pub fn location_label(sala: Option<&str>, estante: Option<&str>) -> Option<String> {
    match (sala, estante) {
        (Some(sala), Some(estante)) => Some(format!("Sala {sala} · Estante {estante}")),
        (None, Some(estante)) => Some(format!("Estante {estante}")),
        (Some(sala), None) => Some(format!("Sala {sala}")),
        (None, None) => None,
    }
}
