//! Browser glue.
//!
//! Provides:
//! - [`dom`] - page switching, URL fragment access, tile lookup, inline data
//! - [`BrowserHistory`], [`DomTiles`] - platform implementations for the view controller

pub mod dom;

pub use dom::{BrowserHistory, DomTiles};
