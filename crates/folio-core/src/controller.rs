//! Grid/detail view controller.
//!
//! Owns the [`Catalog`] and the current [`View`], and mirrors the open
//! project into the URL fragment through a [`Navigator`]. Platform access
//! (history, visible tiles) is injected so the controller stays testable.

use crate::catalog::{Catalog, ProjectSource};
use crate::grid::Tile;
use crate::log;
use crate::models::Project;
use crate::route::Route;

/// Access to the URL fragment.
pub trait Navigator {
    /// Current fragment, including the leading `#` if any.
    fn hash(&self) -> String;

    /// Replace the fragment without adding a history entry; `None` removes it.
    fn replace_hash(&mut self, hash: Option<&str>);
}

/// What a rendered grid tile shows, read back from the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TileSnapshot {
    pub title: Option<String>,
    pub media: Option<String>,
}

/// Lookup of visible tiles by project id.
pub trait TileLookup {
    fn tile(&self, id: &str) -> Option<TileSnapshot>;
}

impl TileLookup for [Tile] {
    fn tile(&self, id: &str) -> Option<TileSnapshot> {
        self.iter().find(|t| t.id == id).map(|t| TileSnapshot {
            title: Some(t.title.clone()),
            media: Some(t.thumbnail.clone()),
        })
    }
}

/// Lookup that never finds a tile.
pub struct NoTiles;

impl TileLookup for NoTiles {
    fn tile(&self, _id: &str) -> Option<TileSnapshot> {
        None
    }
}

/// Which view is showing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum View<'a> {
    Grid,
    Detail(&'a Project),
}

/// Build a best-effort record for an id missing from the data.
///
/// Uses the visible tile's title and media when a tile exists, otherwise an
/// empty placeholder titled with the id.
pub fn fallback_project(id: &str, tile: Option<TileSnapshot>) -> Project {
    let Some(tile) = tile else {
        return Project::placeholder(id);
    };

    let title = tile
        .title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| id.to_string());
    let media = tile.media.filter(|m| !m.is_empty());

    Project {
        id: id.to_string(),
        title,
        medias: media.iter().cloned().collect(),
        media,
        ..Default::default()
    }
}

#[derive(Debug)]
pub struct ViewController<S> {
    catalog: Catalog<S>,
    /// Project in the detail view; `None` while the grid shows.
    detail: Option<Project>,
}

impl<S: ProjectSource> ViewController<S> {
    pub fn new(source: S) -> Self {
        Self {
            catalog: Catalog::new(source),
            detail: None,
        }
    }

    pub fn catalog(&self) -> &Catalog<S> {
        &self.catalog
    }

    pub fn view(&self) -> View<'_> {
        match &self.detail {
            Some(project) => View::Detail(project),
            None => View::Grid,
        }
    }

    /// Resolve an id to a record, falling back to the visible tile.
    pub fn resolve(&self, id: &str, tiles: &(impl TileLookup + ?Sized)) -> Project {
        match self.catalog.get(id) {
            Some(project) => project.clone(),
            None => {
                log::info(&format!("Project '{}' not in data, using fallback", id));
                fallback_project(id, tiles.tile(id))
            }
        }
    }

    /// Open the detail view for `id` and write the deep link.
    ///
    /// Re-opening simply replaces the current detail record.
    pub fn open(
        &mut self,
        id: &str,
        tiles: &(impl TileLookup + ?Sized),
        nav: &mut impl Navigator,
    ) -> &Project {
        let project = self.resolve(id, tiles);
        let route = Route::Project { id: id.to_string() };
        nav.replace_hash(route.to_hash().as_deref());
        self.detail.insert(project)
    }

    /// Leave the detail view and strip a project deep link if present.
    pub fn close(&mut self, nav: &mut impl Navigator) {
        self.detail = None;
        if Route::is_project_hash(&nav.hash()) {
            nav.replace_hash(None);
        }
    }

    /// Open whatever the current fragment points at.
    pub fn restore(
        &mut self,
        tiles: &(impl TileLookup + ?Sized),
        nav: &mut impl Navigator,
    ) -> Option<&Project> {
        match Route::from_hash(&nav.hash()) {
            Route::Project { id } => Some(self.open(&id, tiles, nav)),
            Route::Grid => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InlineJson;

    #[derive(Default)]
    struct FakeHistory {
        hash: String,
        replacements: usize,
    }

    impl Navigator for FakeHistory {
        fn hash(&self) -> String {
            self.hash.clone()
        }

        fn replace_hash(&mut self, hash: Option<&str>) {
            self.hash = hash.unwrap_or_default().to_string();
            self.replacements += 1;
        }
    }

    fn controller() -> ViewController<InlineJson> {
        ViewController::new(InlineJson::new(Some(
            r#"{"projects":[{"id":"site web","title":"Site","image":"hero.png"}]}"#.to_string(),
        )))
    }

    #[test]
    fn test_open_known_project() {
        let mut ctl = controller();
        let mut nav = FakeHistory::default();
        let project = ctl.open("site web", &NoTiles, &mut nav);
        assert_eq!(project.title, "Site");
        assert_eq!(project.media.as_deref(), Some("hero.png"));
        assert_eq!(nav.hash, "#project=site%20web");
        assert!(matches!(ctl.view(), View::Detail(p) if p.id == "site web"));
    }

    #[test]
    fn test_reopen_replaces_detail() {
        let mut ctl = controller();
        let mut nav = FakeHistory::default();
        ctl.open("site web", &NoTiles, &mut nav);
        let project = ctl.open("autre", &NoTiles, &mut nav);
        assert_eq!(project.title, "autre");
        assert_eq!(nav.hash, "#project=autre");
        assert!(matches!(ctl.view(), View::Detail(p) if p.id == "autre"));
    }

    #[test]
    fn test_open_unknown_uses_tile() {
        let mut ctl = controller();
        let mut nav = FakeHistory::default();
        let tiles = [Tile {
            id: "ghost".to_string(),
            title: "  Ghost  ".to_string(),
            category_label: "Autres".to_string(),
            category_slug: "autres".to_string(),
            thumbnail: "g.mp4".to_string(),
            thumbnail_kind: crate::MediaKind::Video,
        }];
        let project = ctl.open("ghost", &tiles[..], &mut nav);
        assert_eq!(project.title, "Ghost");
        assert_eq!(project.media.as_deref(), Some("g.mp4"));
        assert_eq!(project.medias, vec!["g.mp4"]);
        assert_eq!(project.description, "");
    }

    #[test]
    fn test_open_unknown_without_tile_is_placeholder() {
        let mut ctl = controller();
        let mut nav = FakeHistory::default();
        let project = ctl.open("nope", &NoTiles, &mut nav).clone();
        assert_eq!(project, Project::placeholder("nope"));
        assert_eq!(nav.hash, "#project=nope");
    }

    #[test]
    fn test_fallback_tile_without_title_or_media() {
        let project = fallback_project("x", Some(TileSnapshot::default()));
        assert_eq!(project.title, "x");
        assert!(project.media.is_none());
        assert!(project.medias.is_empty());
    }

    #[test]
    fn test_close_strips_project_hash_only() {
        let mut ctl = controller();
        let mut nav = FakeHistory::default();
        ctl.open("site web", &NoTiles, &mut nav);
        ctl.close(&mut nav);
        assert_eq!(ctl.view(), View::Grid);
        assert_eq!(nav.hash, "");
        assert_eq!(nav.replacements, 2);

        nav.hash = "#about".to_string();
        ctl.close(&mut nav);
        assert_eq!(nav.hash, "#about");
        assert_eq!(nav.replacements, 2);
    }

    #[test]
    fn test_restore_from_hash() {
        let mut ctl = controller();
        let mut nav = FakeHistory {
            hash: "#project=site%20web".to_string(),
            ..Default::default()
        };
        let title = ctl.restore(&NoTiles, &mut nav).map(|p| p.title.clone());
        assert_eq!(title.as_deref(), Some("Site"));

        let mut nav = FakeHistory::default();
        let mut ctl = controller();
        assert!(ctl.restore(&NoTiles, &mut nav).is_none());
        assert_eq!(ctl.view(), View::Grid);
    }
}
