// SPDX-License-Identifier: MPL-2.0
//! `iced_lightbox` is a full-screen media overlay ("lightbox") for the Iced
//! GUI toolkit.
//!
//! It displays a sequence of photos or embedded videos above the host
//! application: an adaptive nine-slice decorative holder sized by a pure
//! geometry solver, an asynchronous frame build/teardown pipeline, and a
//! cancellation-safe slide transition between items. Cancellation uses
//! stale-result discarding through a generation counter rather than task
//! cancellation; see [`overlay`].

pub mod config;
pub mod error;
pub mod geometry;
pub mod holder;
pub mod media;
pub mod overlay;

#[cfg(test)]
pub mod test_utils;

pub use config::OverlayConfig;
pub use error::{Error, Result};
pub use geometry::{compute_holder_size, HolderSize, Viewport};
pub use media::{MediaItem, PlayerFactory, PlayerInstance};
pub use overlay::{Direction, Frame};
