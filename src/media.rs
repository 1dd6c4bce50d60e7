//! Photos and clips shown on the site. Files live under the public directory.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, Copy)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub src: &'static str,
    /// Alt text for images, title for videos.
    pub label: &'static str,
    pub poster: Option<&'static str>,
    pub tag: Option<&'static str>,
}

impl MediaItem {
    pub const fn image(src: &'static str, alt: &'static str, tag: Option<&'static str>) -> Self {
        Self {
            kind: MediaKind::Image,
            src,
            label: alt,
            poster: None,
            tag,
        }
    }

    pub const fn video(
        src: &'static str,
        poster: &'static str,
        title: &'static str,
        tag: Option<&'static str>,
    ) -> Self {
        Self {
            kind: MediaKind::Video,
            src,
            label: title,
            poster: Some(poster),
            tag,
        }
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }

    pub fn mime_type(&self) -> String {
        mime_guess::from_path(self.src)
            .first_or_octet_stream()
            .to_string()
    }
}

/// Full gallery page, in display order.
pub const GALLERY: [MediaItem; 5] = [
    MediaItem::video(
        "/gallery/clip1.mov",
        "/gallery/clip1-poster.png",
        "Event clip 1",
        Some("Highlights"),
    ),
    MediaItem::video(
        "/gallery/clip2.mov",
        "/gallery/clip2-poster.png",
        "Event clip 2",
        Some("Highlights"),
    ),
    MediaItem::video(
        "/gallery/clip3.mp4",
        "/gallery/clip3-poster.jpg",
        "Event clip 3",
        Some("Highlights"),
    ),
    MediaItem::image(
        "/gallery/bottles.jpg",
        "Premium bottle display",
        Some("Gallery"),
    ),
    MediaItem::image(
        "/gallery/luxary-setup.png",
        "Luxury bar setup",
        Some("Gallery"),
    ),
];

/// Teaser row in the home page gallery section.
pub const HOME_PREVIEW: [MediaItem; 3] = [
    MediaItem::image("/gallery/Menu.png", "Slayyed Menu option 1", None),
    MediaItem::image("/gallery/Menu2.png", "Slayyed Menu option 2", None),
    MediaItem::video(
        "/gallery/clip3.mp4",
        "/gallery/clip3-poster.jpg",
        "Event clip 3",
        None,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_mime_types() {
        assert_eq!(GALLERY[0].mime_type(), "video/quicktime");
        assert_eq!(GALLERY[2].mime_type(), "video/mp4");
    }

    #[test]
    fn test_gallery_media_is_under_gallery_dir() {
        for item in GALLERY.iter().chain(HOME_PREVIEW.iter()) {
            assert!(item.src.starts_with("/gallery/"), "{}", item.src);
            if let Some(poster) = item.poster {
                assert!(poster.starts_with("/gallery/"));
            }
        }
    }
}
