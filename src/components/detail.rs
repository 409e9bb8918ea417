//! Project detail view.
//!
//! Re-rendered from scratch whenever the open project changes. Descriptions
//! go through the markup converter, which is the only HTML injected raw.

use folio_core::{MediaKind, Project, Section, to_html};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{
    BACK_LABEL, DETAIL_PAGE, GRID_PAGE, HERO_VIDEO_RADIUS, PLAY_BADGE, THUMB_ALT,
    THUMB_VIDEO_MAX_HEIGHT,
};

#[component]
pub fn ProjectDetail() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <article class="project-detail" data-page=DETAIL_PAGE>
            {move || ctx.detail.get().map(|project| view! { <DetailBody project=project /> })}
        </article>
    }
}

#[component]
fn DetailBody(project: Project) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let Project {
        title,
        description,
        media,
        medias,
        sections,
        ..
    } = project;

    let description = to_html(&description);
    let hero = media.map(|src| match MediaKind::from_path(&src) {
        MediaKind::Video => view! {
            <video
                src=src
                controls=true
                playsinline=true
                style:width="100%"
                style:border-radius=HERO_VIDEO_RADIUS
            ></video>
        }
        .into_any(),
        MediaKind::Image => view! { <img id="pj-hero-img" src=src alt=title.clone() /> }.into_any(),
    });

    view! {
        <header class="project-detail-header">
            <button
                class="project-back-btn"
                title=BACK_LABEL
                on:click=move |_| ctx.navigate(GRID_PAGE)
            >
                <Icon icon=ic::BACK />
            </button>
            <h2 class="h2 article-title" id="pj-title">{title}</h2>
        </header>

        {hero.map(|media| view! { <figure class="project-hero" id="pj-hero">{media}</figure> })}

        <div class="about-text" id="pj-description" inner_html=description></div>

        <div class="project-sections" id="pj-sections">
            {sections
                .into_iter()
                .map(|section| view! { <SectionBlock section=section /> })
                .collect_view()}
        </div>

        {(!medias.is_empty())
            .then(|| view! {
                <section class="project-gallery" id="pj-gallery">
                    <Thumbs medias=medias />
                </section>
            })}
    }
}

#[component]
fn SectionBlock(section: Section) -> impl IntoView {
    let Section {
        title,
        description,
        medias,
    } = section;

    view! {
        <section class="project-section">
            {title.map(|title| view! { <h3 class="h3">{title}</h3> })}
            {description
                .map(|text| view! { <div class="about-text" inner_html=to_html(&text)></div> })}
            {(!medias.is_empty()).then(|| view! { <Thumbs medias=medias /> })}
        </section>
    }
}

/// Scrollable strip of media thumbnails opening the lightbox.
#[component]
fn Thumbs(medias: Vec<String>) -> impl IntoView {
    view! {
        <div class="project-thumbs has-scrollbar">
            {medias
                .into_iter()
                .map(|src| view! { <ThumbButton src=src /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn ThumbButton(src: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let kind = MediaKind::from_path(&src);
    let open_src = src.clone();

    let content = match kind {
        MediaKind::Video => view! {
            <video
                src=src
                muted=true
                playsinline=true
                preload="metadata"
                class="thumb-media thumb-video"
                style:max-height=THUMB_VIDEO_MAX_HEIGHT
            ></video>
            <span class="thumb-play-badge">{PLAY_BADGE}</span>
        }
        .into_any(),
        MediaKind::Image => view! { <img src=src alt=THUMB_ALT class="thumb-media" /> }.into_any(),
    };

    view! {
        <button
            class="thumb-btn"
            aria-label=kind.thumb_label()
            on:click=move |_| ctx.open_media(open_src.clone())
        >
            {content}
        </button>
    }
}
