//! Project records as authored in the inline JSON.

use serde::{Deserialize, Serialize};

/// Placeholder asset used by [`Project::template`].
pub const PLACEHOLDER_IMAGE: &str = "./assets/images/placeholder.png";

// =============================================================================
// Document
// =============================================================================

/// Root of the inline JSON document: `{ "projects": [...] }`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ProjectsDocument {
    #[serde(default)]
    pub projects: Vec<Project>,
}

// =============================================================================
// Project
// =============================================================================

/// A portfolio project, with legacy field aliases resolved.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(from = "RawProject")]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Grid thumbnail override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub description: String,
    /// Hero media shown at the top of the detail view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    /// Gallery media shown at the bottom of the detail view.
    pub medias: Vec<String>,
    pub sections: Vec<Section>,
    /// First legacy `images` entry, kept when `medias` took precedence.
    #[serde(skip)]
    pub legacy_thumbnail: Option<String>,
}

/// A titled block inside a project's detail view.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(from = "RawSection")]
pub struct Section {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub medias: Vec<String>,
}

impl Project {
    /// Minimal record for an identifier with no data behind it.
    pub fn placeholder(id: &str) -> Self {
        Self {
            id: id.to_string(),
            title: id.to_string(),
            ..Default::default()
        }
    }

    /// Starting point for a newly authored project.
    pub fn template(id: &str, title: &str, category: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            category: Some(category.to_string()),
            icon: Some(PLACEHOLDER_IMAGE.to_string()),
            media: Some(PLACEHOLDER_IMAGE.to_string()),
            ..Default::default()
        }
    }

    /// Image or video used on the grid tile.
    ///
    /// Priority: `icon`, hero media, first gallery entry, first legacy
    /// `images` entry.
    pub fn thumbnail(&self) -> &str {
        self.icon
            .as_deref()
            .or(self.media.as_deref())
            .or(self.medias.first().map(String::as_str).filter(|m| !m.is_empty()))
            .or(self.legacy_thumbnail.as_deref())
            .unwrap_or("")
    }

    /// Every media path the project references, in display order.
    pub fn all_media(&self) -> impl Iterator<Item = &str> {
        self.icon
            .iter()
            .chain(self.media.iter())
            .chain(self.medias.iter())
            .chain(self.sections.iter().flat_map(|s| s.medias.iter()))
            .map(String::as_str)
    }
}

// =============================================================================
// Wire Format
// =============================================================================

/// Project as it appears on the wire, before alias resolution.
#[derive(Deserialize)]
struct RawProject {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    media: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    medias: Option<Vec<String>>,
    #[serde(default)]
    images: Option<Vec<String>>,
    #[serde(default)]
    sections: Option<Vec<Section>>,
}

#[derive(Deserialize)]
struct RawSection {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    medias: Option<Vec<String>>,
    #[serde(default)]
    images: Option<Vec<String>>,
}

/// Empty strings count as absent, matching how the page treats falsy values.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl From<RawProject> for Project {
    fn from(raw: RawProject) -> Self {
        Self {
            id: raw.id.unwrap_or_default(),
            title: raw.title.unwrap_or_default(),
            category: non_empty(raw.category),
            icon: non_empty(raw.icon),
            description: raw.description.unwrap_or_default(),
            media: non_empty(raw.media).or(non_empty(raw.image)),
            legacy_thumbnail: raw
                .images
                .as_ref()
                .and_then(|images| images.first())
                .and_then(|first| non_empty(Some(first.clone()))),
            medias: raw.medias.or(raw.images).unwrap_or_default(),
            sections: raw.sections.unwrap_or_default(),
        }
    }
}

impl From<RawSection> for Section {
    fn from(raw: RawSection) -> Self {
        Self {
            title: non_empty(raw.title),
            description: non_empty(raw.description),
            medias: raw.medias.or(raw.images).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Project {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_legacy_aliases() {
        let p = parse(r#"{"id":"a","title":"A","image":"x.png","images":["1.png","2.mp4"]}"#);
        assert_eq!(p.media.as_deref(), Some("x.png"));
        assert_eq!(p.medias, vec!["1.png", "2.mp4"]);
    }

    #[test]
    fn test_primary_name_wins_over_alias() {
        let p = parse(r#"{"id":"a","media":"m.png","image":"i.png","medias":[],"images":["i.png"]}"#);
        assert_eq!(p.media.as_deref(), Some("m.png"));
        assert!(p.medias.is_empty());
    }

    #[test]
    fn test_missing_fields_default() {
        let p = parse(r#"{"id":"a"}"#);
        assert_eq!(p.title, "");
        assert_eq!(p.description, "");
        assert!(p.sections.is_empty());
        assert_eq!(p.thumbnail(), "");
    }

    #[test]
    fn test_section_aliases() {
        let p = parse(r#"{"id":"a","sections":[{"title":"T","images":["s.png"]},{}]}"#);
        assert_eq!(p.sections[0].medias, vec!["s.png"]);
        assert_eq!(p.sections[1], Section::default());
    }

    #[test]
    fn test_thumbnail_priority() {
        let mut p = parse(r#"{"id":"a","icon":"i.png","media":"m.png","medias":["g.png"]}"#);
        assert_eq!(p.thumbnail(), "i.png");
        p.icon = None;
        assert_eq!(p.thumbnail(), "m.png");
        p.media = None;
        assert_eq!(p.thumbnail(), "g.png");
    }

    #[test]
    fn test_null_fields_default() {
        let p = parse(
            r#"{"id":null,"title":null,"category":null,"description":null,"medias":null,"sections":null}"#,
        );
        assert_eq!(p, Project::default());

        let p = parse(r#"{"id":"a","sections":[{"title":null,"medias":null,"images":null}]}"#);
        assert_eq!(p.sections, vec![Section::default()]);
    }

    #[test]
    fn test_thumbnail_falls_back_to_legacy_images() {
        let p = parse(r#"{"id":"a","medias":[],"images":["x.png"]}"#);
        assert!(p.medias.is_empty());
        assert_eq!(p.thumbnail(), "x.png");
    }

    #[test]
    fn test_template_round_trips() {
        let p = Project::template("nouveau-projet", "Nouveau Projet", "autre");
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(parse(&json), p);
    }

    #[test]
    fn test_all_media_order() {
        let p = parse(
            r#"{"id":"a","icon":"i","media":"m","medias":["g"],"sections":[{"medias":["s"]}]}"#,
        );
        assert_eq!(p.all_media().collect::<Vec<_>>(), vec!["i", "m", "g", "s"]);
    }
}
