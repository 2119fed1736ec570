// SPDX-License-Identifier: MPL-2.0
//! The embedded-player seam.
//!
//! The overlay never talks to a concrete video backend. The host supplies a
//! [`PlayerFactory`]; the overlay mounts a player lazily when a video frame
//! becomes visible and unmounts it — fully, not merely pausing — when the
//! frame is discarded. Load failures inside the player are the player's own
//! concern.

use crate::error::Result;
use std::fmt::Debug;
use std::sync::Arc;

/// A mounted embedded player for one video id.
///
/// Dropping an instance must release its resources; `unmount` runs first so
/// backends with explicit teardown get a call site for it.
pub trait PlayerInstance: Debug + Send {
    /// Releases the embedded player. Called exactly once per instance,
    /// immediately before the instance is discarded.
    fn unmount(&mut self);
}

/// Creates player instances for opaque video ids.
pub trait PlayerFactory: Debug + Send + Sync {
    /// Mounts a player for `video_id`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Player`] when the backend cannot
    /// mount; the overlay logs the failure and shows the poster surface.
    fn mount(&self, video_id: &str) -> Result<Box<dyn PlayerInstance>>;
}

/// Shared handle to the host's player factory.
pub type SharedPlayerFactory = Arc<dyn PlayerFactory>;

/// Built-in factory for hosts without a video backend: mounts a player that
/// does nothing, leaving the poster surface visible.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderFactory;

#[derive(Debug)]
struct PlaceholderPlayer;

impl PlayerInstance for PlaceholderPlayer {
    fn unmount(&mut self) {}
}

impl PlayerFactory for PlaceholderFactory {
    fn mount(&self, _video_id: &str) -> Result<Box<dyn PlayerInstance>> {
        Ok(Box::new(PlaceholderPlayer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_factory_always_mounts() {
        let factory = PlaceholderFactory;
        let mut player = factory.mount("any-id").unwrap();
        player.unmount();
    }
}
