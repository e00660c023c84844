//! Floor-plan panel: reference image plus the section and marker overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns an [`OverlaySignal`] and pushes book sets into it. This
//! component starts metadata loading once the image has loaded (the
//! container has real dimensions from then on) and renders whatever the
//! controller's [`Scene`] holds. Regions and markers are positioned in
//! percentages of the container, so resizes need no recomputation.

#[cfg(test)]
#[path = "map_panel_test.rs"]
mod map_panel_test;

use leptos::prelude::*;
use shelfmap::{Marker, OverlayController, Percent, PercentRect, Region, Scene, ViewBox};

/// Floor plan drawn in the same 600×400 units as `/api/map`.
pub const PLAN_IMAGE: &str = "/assets/img/plano_biblioteca.svg";

/// Reactive handle to a page's overlay.
pub type OverlaySignal = RwSignal<OverlayController<Scene>>;

/// Overlay starting from the host's declared view box.
pub fn new_overlay(view_box: ViewBox) -> OverlaySignal {
    RwSignal::new(OverlayController::with_view_box(Scene::new(), view_box))
}

pub fn region_style(rect: &PercentRect) -> String {
    format!(
        "position:absolute;left:{}%;top:{}%;width:{}%;height:{}%",
        rect.left, rect.top, rect.width, rect.height
    )
}

pub fn marker_style(position: Percent) -> String {
    format!("position:absolute;left:{}%;top:{}%", position.left, position.top)
}

/// Plan image with the overlay drawn on top.
#[component]
pub fn MapPanel(
    overlay: OverlaySignal,
    #[prop(into, default = PLAN_IMAGE.to_owned())] image_src: String,
    #[prop(into, default = "Plano de la biblioteca".to_owned())] image_alt: String,
) -> impl IntoView {
    #[cfg(feature = "csr")]
    let api_base = use_context::<crate::config::ClientConfig>()
        .unwrap_or_else(crate::config::ClientConfig::current)
        .api_base;

    // A plan that fails to load still gets sections and markers; the overlay
    // is positioned against the container either way.
    let start_overlay = move || {
        let mut started = false;
        overlay.update(|c| started = c.begin_initialize());
        if !started {
            return;
        }
        #[cfg(feature = "csr")]
        {
            use shelfmap::MapSource as _;
            let source = crate::net::api::HttpMapSource::new(api_base.clone());
            leptos::task::spawn_local(async move {
                let result = source.fetch_map().await;
                overlay.update(|c| {
                    c.finish_initialize(result);
                });
            });
        }
    };

    let view_box = overlay.with_untracked(|c| c.state().view_box);
    let regions = move || {
        overlay.with(|c| c.target().regions().iter().cloned().map(region_view).collect_view())
    };
    let markers = move || {
        overlay.with(|c| c.target().markers().iter().cloned().map(marker_view).collect_view())
    };

    view! {
        <div
            class="mapa"
            style="position:relative"
            data-viewbox-w=view_box.width().to_string()
            data-viewbox-h=view_box.height().to_string()
        >
            <img
                class="mapa__plano"
                src=image_src
                alt=image_alt
                on:load={
                    let start_overlay = start_overlay.clone();
                    move |_| start_overlay()
                }
                on:error=move |_| start_overlay()
            />
            <div class="mapa__overlay" style="position:absolute;inset:0">
                {regions}
                {markers}
            </div>
        </div>
    }
}

fn region_view(region: Region) -> impl IntoView {
    view! {
        <div class="seccion" data-id=region.id style=region_style(&region.rect)>
            <span class="seccion-label">{region.label}</span>
        </div>
    }
}

/// Markers are router links, so activation is a client-side navigation to
/// the book's detail route.
fn marker_view(marker: Marker) -> impl IntoView {
    let Marker { book_id, position, label, tooltip, href } = marker;
    view! {
        <a class="marker" href=href data-id=book_id style=marker_style(position) aria-label=label>
            <span class="tooltip">{tooltip}</span>
        </a>
    }
}
