//! Offline tooling for the portfolio data file.
//!
//! - [`render`] - run the description converter on a text file
//! - [`check`] - lint projects (ids, titles, local media)
//! - [`export`] - convert between bare JSON and the `window.PROJECTS_DATA` script
//! - [`add`] - append a templated project

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use folio_core::data_js::{self, dump_json, dump_projects_js, parse_data_file, push_project};
use folio_core::{DataFileError, Project, ProjectsDocument, to_html};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path}: {source}")]
    DataFile {
        path: PathBuf,
        #[source]
        source: DataFileError,
    },
    #[error("project id '{0}' already exists")]
    DuplicateId(String),
}

/// Output flavour for [`export`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Bare JSON, for the inline `<script type="application/json">` element.
    Json,
    /// `window.PROJECTS_DATA = {...};`, as written by the editor.
    Js,
}

fn read_input(path: &Path) -> Result<String, CliError> {
    let io_err = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map_err(io_err)?;
        Ok(text)
    } else {
        fs::read_to_string(path).map_err(io_err)
    }
}

fn load_data(path: &Path) -> Result<Value, CliError> {
    let text = read_input(path)?;
    parse_data_file(&text).map_err(|source| CliError::DataFile {
        path: path.to_path_buf(),
        source,
    })
}

// =============================================================================
// render
// =============================================================================

/// Convert a description file (or `-` for stdin) to HTML.
pub fn render(path: &Path) -> Result<String, CliError> {
    Ok(to_html(&read_input(path)?))
}

// =============================================================================
// check
// =============================================================================

/// A problem found in the data file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Issue {
    EmptyId { index: usize },
    DuplicateId { id: String },
    MissingTitle { id: String },
    MissingMedia { id: String, path: String },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId { index } => write!(f, "project #{} has no id", index + 1),
            Self::DuplicateId { id } => write!(f, "duplicate id '{}'", id),
            Self::MissingTitle { id } => write!(f, "'{}' has no title", id),
            Self::MissingMedia { id, path } => write!(f, "'{}' references missing file {}", id, path),
        }
    }
}

/// Whether a media path points at a local file (as opposed to a URL).
fn is_local(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    !(path.is_empty()
        || lower.starts_with("http://")
        || lower.starts_with("https://")
        || lower.starts_with("data:"))
}

/// Lint a document. `media_exists` decides whether a local path resolves.
pub fn check_document(doc: &ProjectsDocument, media_exists: impl Fn(&str) -> bool) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for (index, project) in doc.projects.iter().enumerate() {
        if project.id.is_empty() {
            issues.push(Issue::EmptyId { index });
        } else if !seen.insert(project.id.as_str()) {
            issues.push(Issue::DuplicateId {
                id: project.id.clone(),
            });
        }

        if project.title.trim().is_empty() {
            issues.push(Issue::MissingTitle {
                id: project.id.clone(),
            });
        }

        for path in project.all_media().filter(|p| is_local(p)) {
            if !media_exists(path) {
                issues.push(Issue::MissingMedia {
                    id: project.id.clone(),
                    path: path.to_string(),
                });
            }
        }
    }

    issues
}

/// Lint a data file, resolving local media against `root`.
pub fn check(path: &Path, root: &Path) -> Result<Vec<Issue>, CliError> {
    let data = load_data(path)?;
    let doc = data_js::to_document(&data).map_err(|source| CliError::DataFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(check_document(&doc, |media| {
        let relative = media.trim_start_matches("./").trim_start_matches('/');
        root.join(relative).is_file()
    }))
}

// =============================================================================
// export / add
// =============================================================================

/// Re-serialize a data file in the requested format.
pub fn export(path: &Path, format: Format) -> Result<String, CliError> {
    let data = load_data(path)?;
    let out = match format {
        Format::Json => dump_json(&data),
        Format::Js => dump_projects_js(&data),
    };
    out.map_err(|source| CliError::DataFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Append a templated project to the data file in place (script form).
///
/// Fails with [`CliError::DuplicateId`] if `id` is already taken.
pub fn add(path: &Path, id: &str, title: &str, category: &str) -> Result<(), CliError> {
    let data_err = |source| CliError::DataFile {
        path: path.to_path_buf(),
        source,
    };

    let mut data = load_data(path)?;
    let doc = data_js::to_document(&data).map_err(data_err)?;
    if doc.projects.iter().any(|p| p.id == id) {
        return Err(CliError::DuplicateId(id.to_string()));
    }

    push_project(&mut data, &Project::template(id, title, category)).map_err(data_err)?;
    let text = dump_projects_js(&data).map_err(data_err)?;
    fs::write(path, text).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(json: &str) -> ProjectsDocument {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_clean_document_has_no_issues() {
        let d = doc(r#"{"projects":[{"id":"a","title":"A","media":"./assets/a.png"}]}"#);
        assert!(check_document(&d, |_| true).is_empty());
    }

    #[test]
    fn test_reports_ids_and_titles() {
        let d = doc(r#"{"projects":[{"id":"a","title":"A"},{"id":"a","title":" "},{"title":"x"}]}"#);
        let issues = check_document(&d, |_| true);
        assert_eq!(
            issues,
            vec![
                Issue::DuplicateId { id: "a".to_string() },
                Issue::MissingTitle { id: "a".to_string() },
                Issue::EmptyId { index: 2 },
            ]
        );
    }

    #[test]
    fn test_reports_missing_local_media_only() {
        let d = doc(
            r#"{"projects":[{"id":"a","title":"A","media":"https://cdn/x.png","images":["./assets/gone.mp4"]}]}"#,
        );
        let issues = check_document(&d, |_| false);
        assert_eq!(
            issues,
            vec![Issue::MissingMedia {
                id: "a".to_string(),
                path: "./assets/gone.mp4".to_string()
            }]
        );
    }

    #[test]
    fn test_issue_display() {
        assert_eq!(Issue::EmptyId { index: 0 }.to_string(), "project #1 has no id");
        assert_eq!(
            Issue::MissingMedia {
                id: "a".to_string(),
                path: "x.png".to_string()
            }
            .to_string(),
            "'a' references missing file x.png"
        );
    }

    #[test]
    fn test_add_appends_template_and_rejects_duplicates() {
        let path = std::env::temp_dir().join(format!("folio-cli-add-{}.js", std::process::id()));
        fs::write(&path, "window.PROJECTS_DATA = {\"projects\": []};\n").unwrap();

        add(&path, "n", "N", "autre").unwrap();
        let data = load_data(&path).unwrap();
        assert_eq!(data["projects"][0]["id"], "n");
        assert_eq!(data["projects"][0]["media"], folio_core::models::PLACEHOLDER_IMAGE);

        assert!(matches!(add(&path, "n", "Again", "autre"), Err(CliError::DuplicateId(id)) if id == "n"));
        assert_eq!(load_data(&path).unwrap()["projects"].as_array().map(Vec::len), Some(1));

        fs::remove_file(&path).unwrap();
    }
}
