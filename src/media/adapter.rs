// SPDX-License-Identifier: MPL-2.0
//! The two-variant presentation unit behind every frame.
//!
//! `activate()` begins presentation and `stop()` tears it down. Both are
//! idempotent and safe in any order: `stop()` before `activate()` is a
//! no-op, `stop()` twice releases nothing twice. The image variant holds a
//! decoded handle and both hooks are no-ops; the video variant mounts its
//! embedded player lazily on `activate()` so deferred frames (the "next"
//! frame mid-slide) never start loading before they are shown.

use super::image::ImageData;
use super::video::{PlayerInstance, SharedPlayerFactory};
use std::sync::{Arc, Mutex};

/// Shared slot for a mounted player. Adapter clones share the slot, so the
/// lifecycle stays single-owner even when the adapter travels through an
/// Iced message.
type PlayerSlot = Arc<Mutex<Option<Box<dyn PlayerInstance>>>>;

#[derive(Debug, Clone)]
pub enum MediaAdapter {
    Image {
        data: ImageData,
    },
    Video {
        id: String,
        factory: SharedPlayerFactory,
        player: PlayerSlot,
    },
}

impl MediaAdapter {
    #[must_use]
    pub fn image(data: ImageData) -> Self {
        MediaAdapter::Image { data }
    }

    #[must_use]
    pub fn video(id: impl Into<String>, factory: SharedPlayerFactory) -> Self {
        MediaAdapter::Video {
            id: id.into(),
            factory,
            player: Arc::new(Mutex::new(None)),
        }
    }

    /// Begins presentation. For videos this mounts the embedded player if
    /// none is mounted; a mount failure is logged and leaves the poster
    /// surface standing.
    pub fn activate(&mut self) {
        match self {
            MediaAdapter::Image { .. } => {}
            MediaAdapter::Video { id, factory, player } => {
                let mut slot = player.lock().expect("player slot poisoned");
                if slot.is_none() {
                    match factory.mount(id) {
                        Ok(instance) => *slot = Some(instance),
                        Err(err) => {
                            eprintln!("Failed to mount player for '{id}': {err}");
                        }
                    }
                }
            }
        }
    }

    /// Tears down presentation. Unmounts and discards any mounted player;
    /// repeated calls release nothing twice.
    pub fn stop(&mut self) {
        if let MediaAdapter::Video { player, .. } = self {
            let taken = player.lock().expect("player slot poisoned").take();
            if let Some(mut instance) = taken {
                instance.unmount();
            }
        }
    }

    /// Whether a video player is currently mounted. Always false for
    /// images.
    #[must_use]
    pub fn is_active(&self) -> bool {
        match self {
            MediaAdapter::Image { .. } => false,
            MediaAdapter::Video { player, .. } => {
                player.lock().expect("player slot poisoned").is_some()
            }
        }
    }

    /// The decoded image behind an image adapter.
    #[must_use]
    pub fn image_data(&self) -> Option<&ImageData> {
        match self {
            MediaAdapter::Image { data } => Some(data),
            MediaAdapter::Video { .. } => None,
        }
    }
}
