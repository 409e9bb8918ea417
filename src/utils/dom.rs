//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Missing elements and
//! failed calls are ignored: the page degrades instead of erroring.

use folio_core::{Navigator, TileLookup, TileSnapshot};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions, Window};

use crate::config::{
    ACTIVE_CLASS, NAV_LINK_SELECTOR, PAGE_SELECTOR, PROJECTS_JSON_ID, TILE_SELECTOR,
};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// All elements matching a selector, in document order.
fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn set_active(element: &Element, active: bool) {
    let _ = element.class_list().toggle_with_force(ACTIVE_CLASS, active);
}

/// Text of the inline projects JSON element, if present.
pub fn inline_projects_json() -> Option<String> {
    document()?
        .get_element_by_id(PROJECTS_JSON_ID)?
        .text_content()
}

// =============================================================================
// Pages
// =============================================================================

/// Show the article whose `data-page` matches and highlight its nav link.
///
/// Pages without a nav link (the detail view) leave every link inactive.
pub fn show_page(page: &str) {
    for article in query_all(PAGE_SELECTOR) {
        set_active(&article, article.get_attribute("data-page").as_deref() == Some(page));
    }
    for link in query_all(NAV_LINK_SELECTOR) {
        set_active(&link, link.get_attribute("data-target").as_deref() == Some(page));
    }
}

/// Page named by the currently highlighted nav link.
pub fn active_nav_target() -> Option<String> {
    query_all(NAV_LINK_SELECTOR)
        .into_iter()
        .find(|link| link.class_list().contains(ACTIVE_CLASS))
        .and_then(|link| link.get_attribute("data-target"))
}

/// Call `on_navigate` with the target page whenever a nav link is clicked.
pub fn bind_nav_links(on_navigate: impl Fn(String) + 'static) {
    let on_navigate = std::rc::Rc::new(on_navigate);
    for link in query_all(NAV_LINK_SELECTOR) {
        let Some(target) = link.get_attribute("data-target") else {
            continue;
        };
        let on_navigate = on_navigate.clone();
        let closure = Closure::wrap(Box::new(move || on_navigate(target.clone())) as Box<dyn Fn()>);
        let _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        // Listeners live as long as the page.
        closure.forget();
    }
}

/// Smoothly scroll the window back to the top.
pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash (including the '#' prefix, empty if none).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Replace the URL hash without adding to browser history.
///
/// `None` removes the fragment entirely.
pub fn replace_hash(hash: Option<&str>) {
    let Some(window) = window() else {
        return;
    };
    let url = match hash {
        Some(hash) => hash.to_string(),
        None => {
            let location = window.location();
            format!(
                "{}{}",
                location.pathname().unwrap_or_default(),
                location.search().unwrap_or_default()
            )
        }
    };
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url));
    }
}

/// Run `callback` on every `hashchange` event.
pub fn on_hash_change(callback: impl Fn() + 'static) {
    let closure = Closure::wrap(Box::new(callback) as Box<dyn Fn()>);
    if let Some(window) = window() {
        let _ = window.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
    }
    // Keep the closure alive for the lifetime of the app
    closure.forget();
}

/// [`Navigator`] over the window's location and history.
pub struct BrowserHistory;

impl Navigator for BrowserHistory {
    fn hash(&self) -> String {
        get_hash()
    }

    fn replace_hash(&mut self, hash: Option<&str>) {
        replace_hash(hash);
    }
}

// =============================================================================
// Tiles
// =============================================================================

/// [`TileLookup`] over the project tiles currently in the document.
pub struct DomTiles;

impl TileLookup for DomTiles {
    fn tile(&self, id: &str) -> Option<TileSnapshot> {
        let tile = query_all(TILE_SELECTOR)
            .into_iter()
            .find(|el| el.get_attribute("data-project-id").as_deref() == Some(id))?;

        let title = tile
            .query_selector(".project-title")
            .ok()
            .flatten()
            .and_then(|el| el.text_content());
        let media = tile
            .query_selector("img, video")
            .ok()
            .flatten()
            .and_then(|el| el.get_attribute("src"));

        Some(TileSnapshot { title, media })
    }
}
