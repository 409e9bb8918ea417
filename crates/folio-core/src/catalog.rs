//! Read-through project cache.
//!
//! A [`Catalog`] wraps a [`ProjectSource`] and loads it on first access. The
//! ordered list and the id index are kept for the catalog's lifetime; a
//! source that fails to load is logged and treated as an empty catalog.

use std::cell::OnceCell;
use std::collections::HashMap;

use crate::error::CatalogError;
use crate::log;
use crate::models::{Project, ProjectsDocument};

/// Somewhere projects can be loaded from.
pub trait ProjectSource {
    fn load(&self) -> Result<ProjectsDocument, CatalogError>;
}

/// Projects embedded as JSON text, e.g. an inline `<script>` element.
#[derive(Clone, Debug, Default)]
pub struct InlineJson {
    text: Option<String>,
}

impl InlineJson {
    pub fn new(text: Option<String>) -> Self {
        Self { text }
    }
}

impl ProjectSource for InlineJson {
    fn load(&self) -> Result<ProjectsDocument, CatalogError> {
        let text = self
            .text
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or(CatalogError::Missing)?;
        Ok(serde_json::from_str(text)?)
    }
}

impl ProjectSource for ProjectsDocument {
    fn load(&self) -> Result<ProjectsDocument, CatalogError> {
        Ok(self.clone())
    }
}

#[derive(Debug, Default)]
struct Entries {
    projects: Vec<Project>,
    by_id: HashMap<String, usize>,
}

impl Entries {
    fn build(projects: Vec<Project>) -> Self {
        // Later duplicates shadow earlier ones in the index.
        let by_id = projects
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();
        Self { projects, by_id }
    }
}

/// Lazily populated id → project lookup.
#[derive(Debug)]
pub struct Catalog<S> {
    source: S,
    entries: OnceCell<Entries>,
}

impl<S: ProjectSource> Catalog<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            entries: OnceCell::new(),
        }
    }

    fn entries(&self) -> &Entries {
        self.entries.get_or_init(|| match self.source.load() {
            Ok(doc) => Entries::build(doc.projects),
            Err(CatalogError::Missing) => Entries::default(),
            Err(e) => {
                log::warn(&format!("Ignoring project data: {}", e));
                Entries::default()
            }
        })
    }

    /// All projects in document order.
    pub fn projects(&self) -> &[Project] {
        &self.entries().projects
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        let entries = self.entries();
        entries.by_id.get(id).map(|&i| &entries.projects[i])
    }

    pub fn len(&self) -> usize {
        self.projects().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
