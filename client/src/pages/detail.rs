//! Book detail page (`/detalle_libro.html?id=<id>`).
//!
//! Reached from result cards and map markers. Shows the record and a map
//! panel holding only that book's marker.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::map_panel::{MapPanel, new_overlay};
use crate::config::ClientConfig;
use crate::net::types::BookRecord;
use crate::state::detail::{DetailState, location_label, requested_id};
use shelfmap::ViewBox;

#[component]
pub fn DetailPage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_else(ClientConfig::current);
    let query = use_query_map();
    let state = RwSignal::new(DetailState::Loading);
    let overlay = new_overlay(ViewBox::default());

    Effect::new(move || {
        let Some(id) = requested_id(query.get().get("id")) else {
            state.set(DetailState::Missing);
            overlay.update(|c| c.update_markers(Vec::new()));
            return;
        };
        state.set(DetailState::Loading);
        #[cfg(feature = "csr")]
        {
            let api_base = config.api_base.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_book(&api_base, &id).await {
                    Ok(book) => {
                        overlay.update(|c| c.update_markers(vec![book.to_overlay_book()]));
                        state.set(DetailState::Loaded(book));
                    }
                    Err(e) => {
                        log::warn!("book {id} unavailable: {e}");
                        overlay.update(|c| c.update_markers(Vec::new()));
                        state.set(DetailState::Failed);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&config, id);
        }
    });

    view! {
        <div class="detalle-page">
            <a class="detalle-page__back" href="/">"← Volver al catálogo"</a>
            {move || match state.get() {
                DetailState::Loaded(book) => book_details(book).into_any(),
                other => {
                    view! { <p class="detalle-page__status">{other.status_text().unwrap_or_default()}</p> }
                        .into_any()
                }
            }}
            <MapPanel overlay=overlay/>
        </div>
    }
}

fn book_details(book: BookRecord) -> impl IntoView {
    let location = location_label(book.sala.as_deref(), book.estante.as_deref());
    view! {
        <article class="detalle">
            <h1 class="detalle__titulo">{book.titulo.unwrap_or_default()}</h1>
            <p class="detalle__autor">{book.autor.unwrap_or_default()}</p>
            <p class="detalle__anio">{book.anio.unwrap_or_default()}</p>
            <p class="detalle__descripcion">{book.descripcion.unwrap_or_default()}</p>
            {location.map(|text| view! { <p class="detalle__ubicacion">{text}</p> })}
        </article>
    }
}
