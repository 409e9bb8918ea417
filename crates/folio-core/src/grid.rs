//! Grid tiles and category filters.

use crate::media::MediaKind;
use crate::models::Project;
use crate::slug::slugify;

/// Filter value that matches every tile.
pub const ALL_FILTER: &str = "all";
/// Label of the [`ALL_FILTER`] entry.
pub const ALL_LABEL: &str = "Tous";
/// Category label for projects without one.
pub const DEFAULT_CATEGORY: &str = "Autres";
/// Title for projects with neither a title nor an id.
pub const DEFAULT_TITLE: &str = "Projet";

/// One entry in the filter bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub value: String,
    pub label: String,
}

/// Display data for one project tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub id: String,
    pub title: String,
    pub category_label: String,
    pub category_slug: String,
    pub thumbnail: String,
    pub thumbnail_kind: MediaKind,
}

impl Tile {
    pub fn from_project(project: &Project) -> Self {
        let category_label = project
            .category
            .clone()
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
        let title = [project.title.as_str(), project.id.as_str()]
            .into_iter()
            .find(|s| !s.is_empty())
            .unwrap_or(DEFAULT_TITLE)
            .to_string();
        let thumbnail = project.thumbnail().to_string();

        Self {
            id: project.id.clone(),
            title,
            category_slug: slugify(&category_label),
            category_label,
            thumbnail_kind: MediaKind::from_path(&thumbnail),
            thumbnail,
        }
    }

    /// Whether this tile is visible under the given filter value.
    pub fn matches(&self, filter: &str) -> bool {
        filter == ALL_FILTER || self.category_slug == filter
    }
}

/// Build the filter list: [`ALL_FILTER`] first, then each distinct slug in
/// first-seen order. A later label for the same slug replaces the earlier one.
pub fn collect_categories(tiles: &[Tile]) -> Vec<Category> {
    let mut categories = vec![Category {
        value: ALL_FILTER.to_string(),
        label: ALL_LABEL.to_string(),
    }];

    for tile in tiles {
        match categories.iter_mut().find(|c| c.value == tile.category_slug) {
            Some(existing) => existing.label = tile.category_label.clone(),
            None => categories.push(Category {
                value: tile.category_slug.clone(),
                label: tile.category_label.clone(),
            }),
        }
    }

    categories
}

/// Label shown in the mobile select for a filter value.
pub fn filter_label<'a>(categories: &'a [Category], value: &str) -> &'a str {
    categories
        .iter()
        .find(|c| c.value == value)
        .map(|c| c.label.as_str())
        .unwrap_or(ALL_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, title: &str, category: Option<&str>) -> Project {
        Project {
            id: id.to_string(),
            title: title.to_string(),
            category: category.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_tile_defaults() {
        let tile = Tile::from_project(&project("", "", None));
        assert_eq!(tile.title, DEFAULT_TITLE);
        assert_eq!(tile.category_label, DEFAULT_CATEGORY);
        assert_eq!(tile.category_slug, "autres");

        let tile = Tile::from_project(&project("my-id", "", None));
        assert_eq!(tile.title, "my-id");
    }

    #[test]
    fn test_tile_video_thumbnail() {
        let mut p = project("a", "A", Some("Vidéo"));
        p.media = Some("clip.webm".to_string());
        let tile = Tile::from_project(&p);
        assert_eq!(tile.thumbnail_kind, MediaKind::Video);
        assert_eq!(tile.category_slug, "video");
    }

    #[test]
    fn test_collect_categories_order_and_relabel() {
        let tiles: Vec<_> = [
            project("a", "A", Some("Web")),
            project("b", "B", None),
            project("c", "C", Some("WEB")),
        ]
        .iter()
        .map(Tile::from_project)
        .collect();

        let cats = collect_categories(&tiles);
        let pairs: Vec<_> = cats
            .iter()
            .map(|c| (c.value.as_str(), c.label.as_str()))
            .collect();
        assert_eq!(pairs, vec![("all", "Tous"), ("web", "WEB"), ("autres", "Autres")]);
    }

    #[test]
    fn test_matches_filter() {
        let tile = Tile::from_project(&project("a", "A", Some("Web")));
        assert!(tile.matches(ALL_FILTER));
        assert!(tile.matches("web"));
        assert!(!tile.matches("print"));
    }

    #[test]
    fn test_filter_label_fallback() {
        let cats = collect_categories(&[]);
        assert_eq!(filter_label(&cats, "all"), "Tous");
        assert_eq!(filter_label(&cats, "missing"), "Tous");
    }
}
