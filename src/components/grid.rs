//! Project grid with category filters.
//!
//! Desktop shows a button list, mobile a select dropdown; both drive the
//! same filter signal. Tiles stay mounted and are toggled with `active`.

use folio_core::grid::{Category, collect_categories, filter_label};
use folio_core::{MediaKind, Tile};
use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen::JsCast;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{GRID_PAGE, GRID_TITLE};

#[component]
pub fn ProjectGrid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let tiles = ctx.tiles.get_value();
    let categories = collect_categories(&tiles);

    view! {
        <article class="portfolio" data-page=GRID_PAGE>
            <header>
                <h2 class="h2 article-title">{GRID_TITLE}</h2>
            </header>

            <section class="projects">
                <FilterList categories=categories.clone() />
                <FilterSelect categories=categories />

                <ul class="project-list" id="pf-list">
                    {tiles
                        .into_iter()
                        .map(|tile| view! { <ProjectTile tile=tile /> })
                        .collect_view()}
                </ul>
            </section>
        </article>
    }
}

/// Desktop filter buttons.
#[component]
fn FilterList(categories: Vec<Category>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <ul class="filter-list" id="pf-filter">
            {categories
                .into_iter()
                .map(|category| {
                    let value = category.value.clone();
                    let is_active = {
                        let value = value.clone();
                        move || ctx.filter.with(|f| *f == value)
                    };
                    view! {
                        <li class="filter-item">
                            <button
                                class:active=is_active
                                data-pf-filter=value.clone()
                                on:click=move |_| ctx.filter.set(value.clone())
                            >
                                {category.label}
                            </button>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

/// Mobile filter dropdown. Closes on selection or on any click outside it.
#[component]
fn FilterSelect(categories: Vec<Category>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let open = RwSignal::new(false);
    let box_ref = NodeRef::<leptos::html::Div>::new();

    let selected_label = {
        let categories = categories.clone();
        move || ctx.filter.with(|f| filter_label(&categories, f).to_string())
    };

    let handle = window_event_listener(ev::click, move |ev: ev::MouseEvent| {
        if !open.get_untracked() {
            return;
        }
        let inside = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
            .zip(box_ref.get_untracked())
            .is_some_and(|(node, select_box)| select_box.contains(Some(&node)));
        if !inside {
            open.set(false);
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="filter-select-box" node_ref=box_ref>
            <button
                class="filter-select"
                id="pf-select-toggle"
                class:active=move || open.get()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <div class="select-value" id="pf-select-value">{selected_label}</div>
                <div class="select-icon">
                    <Icon icon=ic::CHEVRON_DOWN />
                </div>
            </button>

            <ul class="select-list" id="pf-select-list" class:open=move || open.get()>
                {categories
                    .into_iter()
                    .map(|category| {
                        let value = category.value.clone();
                        view! {
                            <li class="select-item">
                                <button
                                    data-pf-filter=category.value
                                    on:click=move |_| {
                                        ctx.filter.set(value.clone());
                                        open.set(false);
                                    }
                                >
                                    {category.label}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn ProjectTile(tile: Tile) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_visible = {
        let tile = tile.clone();
        move || ctx.filter.with(|f| tile.matches(f))
    };

    let Tile {
        id,
        title,
        category_label,
        category_slug,
        thumbnail,
        thumbnail_kind,
    } = tile;

    let click_id = id.clone();
    let on_click = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        ctx.open_project(&click_id);
    };

    let media = match thumbnail_kind {
        MediaKind::Video => view! {
            <video src=thumbnail muted=true playsinline=true preload="metadata" class="thumb-video"></video>
        }
        .into_any(),
        MediaKind::Image => view! {
            <img src=thumbnail alt=title.clone() loading="lazy" />
        }
        .into_any(),
    };

    view! {
        <li
            class="project-item"
            class:active=is_visible
            data-category=category_slug
            data-project-id=id
            on:click=on_click
        >
            <a href="#">
                <figure class="project-img">
                    <div class="project-item-icon-box">
                        <Icon icon=ic::VIEW />
                    </div>
                    {media}
                </figure>
                <h3 class="project-title">{title}</h3>
                <p class="project-category">{category_label}</p>
            </a>
        </li>
    }
}
