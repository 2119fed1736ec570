// SPDX-License-Identifier: MPL-2.0
//! Media items and the adapters that present them.
//!
//! A [`MediaItem`] is the caller-supplied description of one entry in an
//! overlay session; a [`MediaAdapter`] is the live presentation unit built
//! from it, owning whatever external resource the media type requires.

pub mod adapter;
pub mod image;
pub mod video;

pub use adapter::MediaAdapter;
pub use image::{load_image, ImageData};
pub use video::{PlaceholderFactory, PlayerFactory, PlayerInstance, SharedPlayerFactory};

/// One entry in an overlay session. Immutable, supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaItem {
    /// A static image, loaded by URL or file path.
    Image { src: String },
    /// An embedded third-party video, addressed by an opaque id. The
    /// aspect ratio is optional; a configured default applies otherwise.
    Video { id: String, aspect: Option<f32> },
}

impl MediaItem {
    #[must_use]
    pub fn image(src: impl Into<String>) -> Self {
        MediaItem::Image { src: src.into() }
    }

    #[must_use]
    pub fn video(id: impl Into<String>) -> Self {
        MediaItem::Video {
            id: id.into(),
            aspect: None,
        }
    }

    #[must_use]
    pub fn video_with_aspect(id: impl Into<String>, aspect: f32) -> Self {
        MediaItem::Video {
            id: id.into(),
            aspect: Some(aspect),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_tag_the_right_variant() {
        assert!(matches!(MediaItem::image("a.png"), MediaItem::Image { .. }));
        assert!(matches!(MediaItem::video("v1"), MediaItem::Video { aspect: None, .. }));
        assert!(matches!(
            MediaItem::video_with_aspect("v2", 1.5),
            MediaItem::Video { aspect: Some(_), .. }
        ));
    }
}
