// SPDX-License-Identifier: MPL-2.0
//! The holder geometry solver.
//!
//! Maps a media aspect ratio and the current viewport to the decorative
//! holder's bounding box. Pure and deterministic: identical inputs always
//! produce identical output, and nothing here touches Iced or I/O.

use crate::config::OverlayConfig;

/// Logical viewport dimensions, as reported by window resize events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Solved holder bounding box, in whole logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolderSize {
    pub width: u32,
    pub height: u32,
}

impl HolderSize {
    /// Width/height as floats, for layout math.
    #[must_use]
    pub fn as_f32(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }
}

/// Computes the holder bounding box for media of aspect ratio `aspect`
/// (width / height) inside `viewport`.
///
/// The box is the largest rectangle of that aspect that fits the viewport
/// minus soft padding, grown along the aspect if it would violate the hard
/// minimum holder size. The minimums win over the viewport: the holder may
/// overflow the screen rather than render media below the legibility floor.
///
/// A non-finite or non-positive aspect is treated as square.
#[must_use]
pub fn compute_holder_size(
    aspect: f32,
    viewport: Viewport,
    config: &OverlayConfig,
) -> HolderSize {
    let aspect = if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    };

    let soft_w = (viewport.width - 2.0 * config.viewport_padding_x).max(1.0);
    let soft_h = (viewport.height - 2.0 * config.viewport_padding_y).max(1.0);

    // Contain-fit: clamp on whichever axis binds.
    let (mut w, mut h) = if soft_w / soft_h > aspect {
        (soft_h * aspect, soft_h)
    } else {
        (soft_w, soft_w / aspect)
    };

    let min_w = config.min_holder_width();
    let min_h = config.min_holder_height();

    // Grow along the aspect until both hard minimums hold. Run the
    // width-driven then height-driven correction twice so the two
    // constraints settle against each other.
    for _ in 0..2 {
        if w < min_w {
            w = min_w;
            h = w / aspect;
        }
        if h < min_h {
            h = min_h;
            w = h * aspect;
        }
    }

    HolderSize {
        width: (w.round() as u32).max(min_w.ceil() as u32),
        height: (h.round() as u32).max(min_h.ceil() as u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> OverlayConfig {
        OverlayConfig::default()
    }

    fn viewport() -> Viewport {
        Viewport::new(1440.0, 900.0)
    }

    #[test]
    fn respects_minimums_for_all_aspects() {
        let config = config();
        let min_w = config.min_holder_width().ceil() as u32;
        let min_h = config.min_holder_height().ceil() as u32;

        for aspect in [0.05, 0.2, 0.5, 1.0, 4.0 / 3.0, 16.0 / 9.0, 3.0, 12.0] {
            for (vw, vh) in [(320.0, 240.0), (800.0, 600.0), (1440.0, 900.0), (3840.0, 2160.0)]
            {
                let size =
                    compute_holder_size(aspect, Viewport::new(vw, vh), &config);
                assert!(size.width >= min_w, "aspect {aspect} viewport {vw}x{vh}");
                assert!(size.height >= min_h, "aspect {aspect} viewport {vw}x{vh}");
            }
        }
    }

    #[test]
    fn unconstrained_fit_preserves_aspect() {
        let size = compute_holder_size(16.0 / 9.0, viewport(), &config());
        let ratio = size.width as f32 / size.height as f32;
        // Rounding to whole pixels allows a small tolerance.
        assert!((ratio - 16.0 / 9.0).abs() < 0.01, "got ratio {ratio}");
    }

    #[test]
    fn wide_media_binds_on_width() {
        let config = config();
        let size = compute_holder_size(3.0, viewport(), &config);
        let soft_w = viewport().width - 2.0 * config.viewport_padding_x;
        assert_eq!(size.width, soft_w.round() as u32);
    }

    #[test]
    fn tall_media_binds_on_height() {
        let config = config();
        let size = compute_holder_size(0.5, viewport(), &config);
        let soft_h = viewport().height - 2.0 * config.viewport_padding_y;
        assert_eq!(size.height, soft_h.round() as u32);
    }

    #[test]
    fn may_overflow_tiny_viewport() {
        let config = config();
        let size = compute_holder_size(1.0, Viewport::new(200.0, 150.0), &config);
        assert!(size.width as f32 > 200.0);
        assert!(size.height as f32 > 150.0);
    }

    #[test]
    fn deterministic_across_calls() {
        let config = config();
        let a = compute_holder_size(1.85, viewport(), &config);
        let b = compute_holder_size(1.85, viewport(), &config);
        assert_eq!(a, b);
    }

    #[test]
    fn degenerate_aspect_falls_back_to_square() {
        let config = config();
        let nan = compute_holder_size(f32::NAN, viewport(), &config);
        let square = compute_holder_size(1.0, viewport(), &config);
        assert_eq!(nan, square);
        let negative = compute_holder_size(-2.0, viewport(), &config);
        assert_eq!(negative, square);
    }
}
