//! Search-result card for one catalog record.

#[cfg(test)]
#[path = "book_card_test.rs"]
mod book_card_test;

use leptos::prelude::*;

use crate::net::types::BookRecord;

/// Cover shown when a record has no `portada_url` or the image fails.
pub const PLACEHOLDER_COVER: &str = "/assets/img/portada_libro.svg";

pub fn card_title(book: &BookRecord) -> String {
    book.titulo.clone().unwrap_or_else(|| "—".to_owned())
}

pub fn card_author(book: &BookRecord) -> String {
    book.autor.clone().unwrap_or_else(|| "Autor desconocido".to_owned())
}

pub fn card_category(book: &BookRecord) -> String {
    book.categoria.clone().unwrap_or_else(|| "Sin categoría".to_owned())
}

pub fn card_cover(book: &BookRecord) -> String {
    book.portada_url.clone().unwrap_or_else(|| PLACEHOLDER_COVER.to_owned())
}

/// A card linking to the detail page.
#[component]
pub fn BookCard(book: BookRecord) -> impl IntoView {
    let title = card_title(&book);
    let href = shelfmap::nav::detail_href(&book.id);
    let aria = format!("Abrir detalle de {title}");
    let cover = card_cover(&book);
    let hide_cover = RwSignal::new(false);

    view! {
        <article class="libro-card">
            <Show when=move || !hide_cover.get()>
                <img
                    class="libro-card__portada"
                    src=cover.clone()
                    alt=""
                    loading="lazy"
                    on:error=move |_| hide_cover.set(true)
                />
            </Show>
            <div class="libro-card__body">
                <h3 class="libro-card__titulo">{title}</h3>
                <p class="libro-card__autor">{card_author(&book)}</p>
                <p class="libro-card__categoria">{card_category(&book)}</p>
                {book.isbn.clone().map(|isbn| view! { <span class="badge">{format!("ISBN {isbn}")}</span> })}
                <a class="libro-card__link" href=href aria-label=aria>
                    "Ver detalle →"
                </a>
            </div>
        </article>
    }
}
