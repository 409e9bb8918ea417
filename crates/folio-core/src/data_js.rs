//! The authoring data file format.
//!
//! The site's editor stores projects as a script assignment:
//!
//! ```text
//! window.PROJECTS_DATA = { "projects": [ ... ] };
//! ```
//!
//! Parsing works on [`serde_json::Value`] (with key order preserved) so
//! unknown fields survive a load/save cycle untouched.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::error::DataFileError;
use crate::models::{Project, ProjectsDocument};

const ASSIGNMENT_PREFIX: &str = "window.PROJECTS_DATA = ";

static ASSIGNMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*window\s*\.\s*PROJECTS_DATA\s*=\s*(\{.*\})\s*;?\s*$")
        .expect("assignment pattern")
});

/// Extract the JSON object from a `window.PROJECTS_DATA = {...};` script.
pub fn parse_projects_js(text: &str) -> Result<Value, DataFileError> {
    let caps = ASSIGNMENT_RE
        .captures(text)
        .ok_or(DataFileError::MissingAssignment)?;
    let json = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
    Ok(serde_json::from_str(json)?)
}

/// Parse either the script form or a bare JSON document.
pub fn parse_data_file(text: &str) -> Result<Value, DataFileError> {
    if text.trim_start().starts_with('{') {
        Ok(serde_json::from_str(text)?)
    } else {
        parse_projects_js(text)
    }
}

/// Serialize back to the script form (two-space indent, UTF-8 kept as is).
pub fn dump_projects_js(data: &Value) -> Result<String, DataFileError> {
    Ok(format!(
        "{}{};\n",
        ASSIGNMENT_PREFIX,
        serde_json::to_string_pretty(data)?
    ))
}

/// Serialize as a bare JSON document, suitable for an inline script tag.
pub fn dump_json(data: &Value) -> Result<String, DataFileError> {
    Ok(format!("{}\n", serde_json::to_string_pretty(data)?))
}

/// Typed view of a loaded data file.
pub fn to_document(data: &Value) -> Result<ProjectsDocument, DataFileError> {
    Ok(ProjectsDocument::deserialize(data)?)
}

/// Append a project to the `projects` array.
pub fn push_project(data: &mut Value, project: &Project) -> Result<(), DataFileError> {
    let projects = data
        .get_mut("projects")
        .and_then(Value::as_array_mut)
        .ok_or(DataFileError::NoProjectsArray)?;
    projects.push(serde_json::to_value(project)?);
    Ok(())
}
