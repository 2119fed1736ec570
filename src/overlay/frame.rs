// SPDX-License-Identifier: MPL-2.0
//! The frame build pipeline.
//!
//! A [`Frame`] is one fully-built, disposable on-screen instance of a media
//! item: solved holder size, slice plan, inset content rectangle, control
//! geometry, and the live [`MediaAdapter`]. Frames are created whole and
//! disposed whole — there is no partial frame and no reuse across sessions.

use super::controls::ControlGeometry;
use crate::config::OverlayConfig;
use crate::error::Result;
use crate::geometry::{compute_holder_size, HolderSize, Viewport};
use crate::holder::SlicePlan;
use crate::media::{self, MediaAdapter, MediaItem, SharedPlayerFactory};

/// One rendered instance of a media item.
#[derive(Debug, Clone)]
pub struct Frame {
    pub item: MediaItem,
    pub index: usize,
    pub size: HolderSize,
    pub plan: SlicePlan,
    pub controls: ControlGeometry,
    pub adapter: MediaAdapter,
}

impl Frame {
    /// Tears the frame down: stops the adapter. The decorative subtree is
    /// plain data and goes with the struct.
    pub fn dispose(&mut self) {
        self.adapter.stop();
    }
}

/// Builds a frame for `item`.
///
/// Resolves the aspect ratio first (awaiting the image's natural size, or
/// taking the supplied/default aspect for video), solves the holder
/// geometry against the current viewport, assembles the slice plan and
/// control geometry, and constructs the matching adapter. With `defer_media`
/// the adapter is constructed but not activated — the caller activates it
/// at promotion. Nothing here mutates overlay state; the caller compares
/// the generation it stamped on the continuation and disposes the result
/// if it is stale.
///
/// # Errors
///
/// Propagates image fetch/decode failures; video frames cannot fail to
/// build (the player mounts later).
pub async fn build(
    item: MediaItem,
    index: usize,
    viewport: Viewport,
    config: OverlayConfig,
    factory: SharedPlayerFactory,
    defer_media: bool,
) -> Result<Frame> {
    let (aspect, mut adapter) = match &item {
        MediaItem::Image { src } => {
            let data = media::load_image(src).await?;
            (data.aspect(), MediaAdapter::image(data))
        }
        MediaItem::Video { id, aspect } => (
            aspect.unwrap_or(config.default_video_aspect),
            MediaAdapter::video(id.clone(), factory),
        ),
    };

    let size = compute_holder_size(aspect, viewport, &config);
    let plan = SlicePlan::new(size, &config);
    let controls = ControlGeometry::for_holder(size, viewport);

    if !defer_media {
        adapter.activate();
    }

    Ok(Frame {
        item,
        index,
        size,
        plan,
        controls,
        adapter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::PlaceholderFactory;
    use std::sync::Arc;

    fn factory() -> SharedPlayerFactory {
        Arc::new(PlaceholderFactory)
    }

    fn viewport() -> Viewport {
        Viewport::new(1280.0, 800.0)
    }

    #[tokio::test]
    async fn video_frame_uses_supplied_aspect() {
        let config = OverlayConfig::default();
        let frame = build(
            MediaItem::video_with_aspect("vid", 2.0),
            0,
            viewport(),
            config.clone(),
            factory(),
            true,
        )
        .await
        .unwrap();

        let ratio = frame.size.width as f32 / frame.size.height as f32;
        assert!((ratio - 2.0).abs() < 0.01);
    }

    #[tokio::test]
    async fn deferred_video_frame_is_not_active() {
        let frame = build(
            MediaItem::video("vid"),
            0,
            viewport(),
            OverlayConfig::default(),
            factory(),
            true,
        )
        .await
        .unwrap();
        assert!(!frame.adapter.is_active());
    }

    #[tokio::test]
    async fn immediate_video_frame_is_active() {
        let frame = build(
            MediaItem::video("vid"),
            0,
            viewport(),
            OverlayConfig::default(),
            factory(),
            false,
        )
        .await
        .unwrap();
        assert!(frame.adapter.is_active());
    }

    #[tokio::test]
    async fn image_frame_matches_natural_aspect() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.png");
        let img = image_rs::RgbaImage::from_pixel(
            200,
            100,
            image_rs::Rgba([10, 20, 30, 255]),
        );
        img.save(&path).unwrap();

        let frame = build(
            MediaItem::image(path.to_str().unwrap()),
            0,
            viewport(),
            OverlayConfig::default(),
            factory(),
            false,
        )
        .await
        .unwrap();

        let ratio = frame.size.width as f32 / frame.size.height as f32;
        assert!((ratio - 2.0).abs() < 0.01);
        assert!(frame.adapter.image_data().is_some());
    }

    #[tokio::test]
    async fn broken_image_fails_the_build() {
        let result = build(
            MediaItem::image("/nowhere/missing.jpg"),
            0,
            viewport(),
            OverlayConfig::default(),
            factory(),
            false,
        )
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn built_frame_carries_its_control_geometry() {
        let frame = build(
            MediaItem::video_with_aspect("vid", 16.0 / 9.0),
            0,
            viewport(),
            OverlayConfig::default(),
            factory(),
            true,
        )
        .await
        .unwrap();

        let expected = ControlGeometry::for_holder(frame.size, viewport());
        assert_eq!(frame.controls, expected);
    }

    #[test]
    fn dispose_stops_the_adapter() {
        let config = OverlayConfig::default();
        let size = HolderSize { width: 700, height: 500 };
        let mut frame = Frame {
            item: MediaItem::video("vid"),
            index: 0,
            size,
            plan: SlicePlan::new(size, &config),
            controls: ControlGeometry::for_holder(size, viewport()),
            adapter: MediaAdapter::video("vid", factory()),
        };
        frame.adapter.activate();
        assert!(frame.adapter.is_active());
        frame.dispose();
        assert!(!frame.adapter.is_active());
        frame.dispose(); // disposal is idempotent
    }
}
