//! Error types.
//!
//! - [`CatalogError`] - loading the project list from its source
//! - [`DataFileError`] - reading or writing the authoring data file

use thiserror::Error;

/// Failure to load projects from a [`ProjectSource`](crate::ProjectSource).
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The source element or file is absent or blank.
    #[error("project data not found")]
    Missing,
    /// The data is present but is not a valid projects document.
    #[error("malformed project data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Failure to parse or serialize the `window.PROJECTS_DATA` data file.
#[derive(Debug, Error)]
pub enum DataFileError {
    /// No `window.PROJECTS_DATA = {...};` assignment and not plain JSON.
    #[error("file does not contain a window.PROJECTS_DATA = {{...}}; assignment")]
    MissingAssignment,
    /// The assigned value is not valid JSON.
    #[error("invalid JSON in data file: {0}")]
    Json(#[from] serde_json::Error),
    /// The document has no `projects` array.
    #[error("data file has no \"projects\" array")]
    NoProjectsArray,
}
