//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::{detail::DetailPage, search::SearchPage};

/// Root application component.
///
/// Provides the resolved [`ClientConfig`] and sets up client-side routing.
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(config);

    view! {
        <Title text="Catálogo de la biblioteca"/>

        <Router>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=StaticSegment("") view=SearchPage/>
                <Route path=StaticSegment("detalle_libro.html") view=DetailPage/>
            </Routes>
        </Router>
    }
}
