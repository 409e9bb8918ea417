//! Full-size media modal.
//!
//! Images use a plain `<img>`; videos share one `<video>` element that is
//! rewound and played on open and stopped on close. Playback failures (for
//! example autoplay rejection) are ignored.

use folio_core::MediaKind;
use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::LIGHTBOX_MAX_HEIGHT;

/// Start playback, swallowing the rejected promise if the browser refuses.
fn play_quietly(video: &web_sys::HtmlVideoElement) {
    if let Ok(promise) = video.play() {
        let ignore = Closure::<dyn FnMut(JsValue)>::new(|_| {});
        let _ = promise.catch(&ignore);
        ignore.forget();
    }
}

/// Stop playback and release the current source.
fn stop(video: &web_sys::HtmlVideoElement) {
    let _ = video.pause();
    let _ = video.remove_attribute("src");
    video.load();
}

#[component]
pub fn Lightbox() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let video_ref = NodeRef::<leptos::html::Video>::new();

    let kind = move || ctx.lightbox.with(|m| m.as_deref().map(MediaKind::from_path));
    let is_open = move || kind().is_some();
    let display_for = move |wanted: MediaKind| if kind() == Some(wanted) { "" } else { "none" };
    let image_src = move || {
        ctx.lightbox
            .get()
            .filter(|src| !MediaKind::from_path(src).is_video())
            .unwrap_or_default()
    };

    // Drive the shared video element from the lightbox signal
    Effect::new(move |_| {
        let media = ctx.lightbox.get();
        let Some(video) = video_ref.get() else {
            return;
        };
        match media.filter(|src| MediaKind::from_path(src).is_video()) {
            Some(src) => {
                video.set_src(&src);
                video.set_current_time(0.0);
                play_quietly(&video);
            }
            None => stop(&video),
        }
    });

    let handle = window_event_listener(ev::keydown, move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ctx.close_media();
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="modal-container" class:active=is_open>
            <div class="overlay" id="img-overlay" class:active=is_open on:click=move |_| ctx.close_media()></div>

            <section
                class="img-modal"
                id="img-modal"
                class:active=is_open
                aria-hidden=move || if is_open() { "false" } else { "true" }
            >
                <button class="modal-close-btn" id="img-close" on:click=move |_| ctx.close_media()>
                    <Icon icon=ic::CLOSE />
                </button>

                <div class="modal-body">
                    <img
                        id="img-full"
                        src=image_src
                        style:display=move || display_for(MediaKind::Image)
                    />
                    <video
                        id="vid-full"
                        node_ref=video_ref
                        controls=true
                        playsinline=true
                        style:max-width="100%"
                        style:max-height=LIGHTBOX_MAX_HEIGHT
                        style:display=move || display_for(MediaKind::Video)
                    ></video>
                </div>
            </section>
        </div>
    }
}
