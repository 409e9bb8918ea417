//! Application configuration.
//!
//! Centralizes element ids, page names and display constants. The page's
//! HTML and stylesheet are authored separately; these must match them.

// =============================================================================
// Document Hooks
// =============================================================================

/// Element the application mounts into.
pub const APP_ROOT_ID: &str = "app";

/// `<script type="application/json">` element holding the projects document.
pub const PROJECTS_JSON_ID: &str = "projects-json";

// =============================================================================
// Pages
// =============================================================================

/// `data-page` of the grid article.
pub const GRID_PAGE: &str = "portfolio";

/// `data-page` of the detail article.
pub const DETAIL_PAGE: &str = "project-detail";

/// Selector for page articles toggled by the navbar.
pub const PAGE_SELECTOR: &str = "article[data-page]";

/// Selector for navbar buttons (`data-target` names a page).
pub const NAV_LINK_SELECTOR: &str = "[data-nav-link]";

/// Selector for rendered project tiles.
pub const TILE_SELECTOR: &str = ".project-item[data-project-id]";

/// Class marking the visible page, nav link, tile or modal.
pub const ACTIVE_CLASS: &str = "active";

// =============================================================================
// Labels
// =============================================================================

/// Grid article heading.
pub const GRID_TITLE: &str = "Portfolio";

/// Alt text for thumbnail images.
pub const THUMB_ALT: &str = "Miniature";

/// Badge drawn over video thumbnails.
pub const PLAY_BADGE: &str = "▶";

/// Tooltip of the detail view's back button.
pub const BACK_LABEL: &str = "Retour";

// =============================================================================
// Media
// =============================================================================

/// Maximum height of a video thumbnail.
pub const THUMB_VIDEO_MAX_HEIGHT: &str = "120px";

/// Corner radius of the hero video.
pub const HERO_VIDEO_RADIUS: &str = "12px";

/// Maximum height of media in the lightbox.
pub const LIGHTBOX_MAX_HEIGHT: &str = "80vh";

// =============================================================================
// Icon Theme
// =============================================================================

/// Icon set used by [`crate::components::icons`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Lucide,
    Bootstrap,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
