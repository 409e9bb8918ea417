//! Application router component.
//!
//! Keeps the grid/detail view, the URL fragment and the navbar in step.
//! Uses native hashchange events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL fragment is a deep link**: `#project=<id>` opens the detail view on load
//! - **Grid and detail are always mounted**: the navbar toggles which article is active
//! - **History is replaced, not pushed**: opening projects adds no back-button entries
//! - **hashchange events**: fragments edited by hand are still followed

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::detail::ProjectDetail;
use crate::components::grid::ProjectGrid;
use crate::components::lightbox::Lightbox;
use crate::utils::dom;

/// Main application router.
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Restore the deep link once the tiles are in the document
    Effect::new(move |_| untrack(|| ctx.restore()));

    dom::on_hash_change(move || ctx.sync_with_hash());
    dom::bind_nav_links(move |page| ctx.navigate(&page));

    view! {
        <ProjectGrid />
        <ProjectDetail />
        <Lightbox />
    }
}
