//! Catalog search page with the floor-plan overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. Typing is debounced, while submit and category
//! changes search immediately. Every successful result set is handed to the
//! overlay so markers always mirror the list.

use leptos::prelude::*;

use crate::components::book_card::BookCard;
use crate::components::map_panel::{MapPanel, new_overlay};
use crate::config::ClientConfig;
use crate::state::search::{SearchState, result_count_label};
use crate::util::debounce::DebounceGate;
use shelfmap::ViewBox;
#[cfg(feature = "csr")]
use crate::net::types::BookRecord;
#[cfg(feature = "csr")]
use shelfmap::Book;

/// Search form, result cards and the shelf map.
#[component]
pub fn SearchPage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_else(ClientConfig::current);
    let search = RwSignal::new(SearchState::default());
    let gate = RwSignal::new(DebounceGate::default());
    let overlay = new_overlay(ViewBox::default());

    let run_search = {
        let config = config.clone();
        move || {
            // A debounced run can fire after the page was left.
            if search.try_update(SearchState::begin).is_none() {
                return;
            }
            #[cfg(feature = "csr")]
            {
                let Some(query) = search.try_with_untracked(|s| s.to_query(config.search_limit)) else {
                    return;
                };
                let api_base = config.api_base.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::search_books(&api_base, &query).await {
                        Ok(response) => {
                            let books: Vec<Book> = response.results.iter().map(BookRecord::to_overlay_book).collect();
                            search.update(|s| s.apply_response(response));
                            overlay.update(|c| c.update_markers(books));
                        }
                        Err(e) => search.update(|s| s.apply_failure(&e)),
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = &config;
            }
        }
    };

    #[cfg(feature = "csr")]
    {
        let api_base = config.api_base.clone();
        leptos::task::spawn_local(async move {
            let categories = crate::net::api::fetch_categories(&api_base).await;
            search.update(|s| s.categories = categories);
        });
    }
    run_search();

    let on_submit = {
        let run_search = run_search.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            crate::util::debounce::arm(gate);
            run_search();
        }
    };

    let debounce_ms = config.debounce_ms;
    let on_input = {
        let run_search = run_search.clone();
        move |ev: leptos::ev::Event| {
            search.update(|s| s.query = event_target_value(&ev));
            #[cfg(feature = "csr")]
            crate::util::debounce::debounce(gate, debounce_ms, run_search.clone());
            #[cfg(not(feature = "csr"))]
            {
                let _ = (debounce_ms, &run_search);
            }
        }
    };

    let on_category = move |ev: leptos::ev::Event| {
        search.update(|s| s.category = event_target_value(&ev));
        run_search();
    };

    view! {
        <div class="buscador-page">
            <header class="buscador-page__header">
                <h1>"Catálogo de la biblioteca"</h1>
            </header>

            <form class="buscador" role="search" on:submit=on_submit>
                <input
                    type="search"
                    name="q"
                    placeholder="Buscar por título, autor o ISBN"
                    prop:value=move || search.with(|s| s.query.clone())
                    on:input=on_input
                />
                <select name="categoria" on:change=on_category>
                    <option value="">"Todas las categorías"</option>
                    {move || {
                        search.with(|s| {
                            s.categories
                                .iter()
                                .map(|c| {
                                    let label = c.clone();
                                    view! { <option value=c.clone()>{label}</option> }
                                })
                                .collect_view()
                        })
                    }}
                </select>
                <button type="submit" class="btn">"Buscar"</button>
            </form>

            <main class="buscador-page__body">
                <section class="resultados" aria-busy=move || search.with(|s| s.loading).to_string()>
                    <p class="resultados__count">{move || result_count_label(search.with(|s| s.total))}</p>
                    <Show when=move || search.with(|s| s.error.is_some())>
                        <p class="resultados__error">{move || search.with(|s| s.error.clone().unwrap_or_default())}</p>
                    </Show>
                    <div class="resultados__grid">
                        {move || {
                            search.with(|s| {
                                s.results
                                    .iter()
                                    .cloned()
                                    .map(|book| view! { <BookCard book=book/> })
                                    .collect_view()
                            })
                        }}
                    </div>
                </section>
                <aside class="buscador-page__mapa">
                    <MapPanel overlay=overlay/>
                </aside>
            </main>

            <footer class="buscador-page__footer">
                {match current_year() {
                    Some(year) => format!("© {year} Biblioteca"),
                    None => "© Biblioteca".to_owned(),
                }}
            </footer>
        </div>
    }
}

fn current_year() -> Option<u32> {
    #[cfg(feature = "csr")]
    {
        Some(js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
