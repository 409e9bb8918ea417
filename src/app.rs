//! Root application module.
//!
//! Contains the App component and the AppContext shared by the grid, the
//! detail view and the lightbox.

use folio_core::{InlineJson, Project, Route, Tile, ViewController};
use leptos::prelude::*;

use crate::components::AppRouter;
use crate::config::{DETAIL_PAGE, GRID_PAGE};
use crate::utils::{BrowserHistory, DomTiles, dom};

/// View controller over the page's inline project data.
pub type Controller = ViewController<InlineJson>;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// The [`Controller`] is the source of truth for which project is open and
/// owns the URL fragment; the signals mirror it for rendering.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Catalog and grid/detail state.
    controller: StoredValue<Controller, LocalStorage>,

    /// Grid tiles, in document order.
    pub tiles: StoredValue<Vec<Tile>>,

    /// Project shown in the detail view.
    pub detail: RwSignal<Option<Project>>,

    /// Media path shown in the lightbox.
    pub lightbox: RwSignal<Option<String>>,

    /// Active category filter value.
    pub filter: RwSignal<String>,
}

impl AppContext {
    /// Creates the context from the document's inline JSON.
    pub fn new() -> Self {
        let controller = Controller::new(InlineJson::new(dom::inline_projects_json()));
        let tiles = controller
            .catalog()
            .projects()
            .iter()
            .map(Tile::from_project)
            .collect();

        Self {
            controller: StoredValue::new_local(controller),
            tiles: StoredValue::new(tiles),
            detail: RwSignal::new(None),
            lightbox: RwSignal::new(None),
            filter: RwSignal::new(folio_core::grid::ALL_FILTER.to_string()),
        }
    }

    /// Open a project's detail view and deep link to it.
    pub fn open_project(&self, id: &str) {
        let mut opened = None;
        self.controller.update_value(|ctl| {
            opened = Some(ctl.open(id, &DomTiles, &mut BrowserHistory).clone());
        });
        self.show_detail(opened);
    }

    /// Leave the detail view and strip the deep link.
    pub fn close_project(&self) {
        self.controller
            .update_value(|ctl| ctl.close(&mut BrowserHistory));
        self.lightbox.set(None);
        self.detail.set(None);
    }

    /// Navbar handler: switch to `page`, leaving any open project.
    pub fn navigate(&self, page: &str) {
        if page != DETAIL_PAGE {
            self.close_project();
        }
        dom::show_page(page);
    }

    /// Open the project referenced by the current fragment, if any.
    ///
    /// Without a deep link the page highlighted in the navbar is shown.
    pub fn restore(&self) {
        let mut opened = None;
        self.controller.update_value(|ctl| {
            opened = ctl.restore(&DomTiles, &mut BrowserHistory).cloned();
        });

        if opened.is_some() {
            self.show_detail(opened);
        } else if let Some(page) = dom::active_nav_target() {
            dom::show_page(&page);
        }
    }

    /// Follow a fragment edited by the user or changed by back/forward.
    pub fn sync_with_hash(&self) {
        let current = self.detail.with_untracked(|d| d.as_ref().map(|p| p.id.clone()));
        match Route::from_hash(&dom::get_hash()) {
            Route::Project { id } if current.as_deref() != Some(id.as_str()) => {
                self.open_project(&id);
            }
            Route::Project { .. } => {}
            Route::Grid if current.is_some() => {
                self.close_project();
                dom::show_page(GRID_PAGE);
            }
            Route::Grid => {}
        }
    }

    pub fn open_media(&self, src: String) {
        self.lightbox.set(Some(src));
    }

    pub fn close_media(&self) {
        self.lightbox.set(None);
    }

    fn show_detail(&self, project: Option<Project>) {
        if project.is_none() {
            return;
        }
        self.detail.set(project);
        dom::show_page(DETAIL_PAGE);
        dom::scroll_to_top();
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
///
/// Creates and provides the global AppContext, then renders the router.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! { <AppRouter /> }
}
