//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`grid`] - Filterable project grid
//! - [`detail`] - Single-project detail view
//! - [`lightbox`] - Full-size image/video modal
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod detail;
pub mod grid;
pub mod icons;
pub mod lightbox;
pub mod router;

pub use router::AppRouter;
