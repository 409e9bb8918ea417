//! Core logic for the portfolio site.
//!
//! Everything here is platform independent and testable natively:
//! - [`markup`] - description dialect (`[url=…]`, `[enum=N]`) to sanitized HTML
//! - [`Project`], [`Section`], [`MediaKind`] - project records from the inline JSON
//! - [`Catalog`] - read-through cache of projects over a [`ProjectSource`]
//! - [`ViewController`] - grid/detail switching with fragment deep links
//! - [`Route`] - `#project=<id>` parsing and formatting
//! - [`data_js`] - the `window.PROJECTS_DATA = {…};` authoring format

pub mod catalog;
pub mod controller;
pub mod data_js;
pub mod error;
pub mod grid;
pub mod log;
pub mod markup;
pub mod media;
pub mod models;
pub mod route;
pub mod slug;

pub use catalog::{Catalog, InlineJson, ProjectSource};
pub use controller::{Navigator, TileLookup, TileSnapshot, View, ViewController};
pub use error::{CatalogError, DataFileError};
pub use grid::{Category, Tile};
pub use markup::to_html;
pub use media::MediaKind;
pub use models::{Project, ProjectsDocument, Section};
pub use route::Route;
pub use slug::slugify;
