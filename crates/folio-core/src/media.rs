//! Media classification.

/// File extensions rendered with a `<video>` element.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "ogg"];

/// How a media path is displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify by file extension (case-insensitive).
    pub fn from_path(path: &str) -> Self {
        let is_video = path
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .is_some_and(|ext| VIDEO_EXTENSIONS.contains(&ext.as_str()));

        if is_video { Self::Video } else { Self::Image }
    }

    pub fn is_video(self) -> bool {
        self == Self::Video
    }

    /// Label for the thumbnail button that opens this media.
    pub fn thumb_label(self) -> &'static str {
        match self {
            Self::Video => "Voir la vidéo",
            Self::Image => "Voir l’image",
        }
    }
}
