// SPDX-License-Identifier: MPL-2.0
//! Nine-slice holder assembly.
//!
//! The decorative holder around displayed media is built from four
//! fixed-size corner pieces (placed by pure translation, never scaled) and
//! five adaptive rectangles sized from the solved bounding box. The plan
//! computed here is pure data; [`draw`] renders the identical plan three
//! times (glow, fill, outline) so all layers share one silhouette.

pub mod draw;

use crate::config::OverlayConfig;
use crate::geometry::HolderSize;

/// Axis-aligned rectangle in holder-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerKind {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// One fixed-size corner piece, positioned by translation only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerPlacement {
    pub kind: CornerKind,
    pub rect: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    TopEdge,
    BottomEdge,
    LeftEdge,
    RightEdge,
    Center,
}

/// One adaptive fill piece, already expanded by interior bleed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptivePiece {
    pub kind: PieceKind,
    pub rect: Rect,
}

/// Complete layout of one holder: corners, adaptive pieces, and the inset
/// content rectangle. Reused unchanged by the glow, fill, and outline
/// drawing passes.
#[derive(Debug, Clone, PartialEq)]
pub struct SlicePlan {
    pub size: HolderSize,
    pub corners: [CornerPlacement; 4],
    pub pieces: [AdaptivePiece; 5],
    pub content: Rect,
}

impl SlicePlan {
    /// Builds the slice plan for a solved holder size.
    ///
    /// Adaptive pieces receive `config.bleed` overlap only on edges that
    /// face a corner or another adaptive piece; outward-facing edges stay
    /// exactly on the bounding box, so the silhouette never grows beyond
    /// the solved size.
    #[must_use]
    pub fn new(size: HolderSize, config: &OverlayConfig) -> Self {
        let (w, h) = size.as_f32();
        let cl = config.corner.left_width.min(w / 2.0);
        let cr = config.corner.right_width.min(w / 2.0);
        let ch = config.corner.height.min(h / 2.0);
        let b = config.bleed.max(0.0);

        let corners = [
            CornerPlacement {
                kind: CornerKind::TopLeft,
                rect: Rect { x: 0.0, y: 0.0, width: cl, height: ch },
            },
            CornerPlacement {
                kind: CornerKind::TopRight,
                rect: Rect { x: w - cr, y: 0.0, width: cr, height: ch },
            },
            CornerPlacement {
                kind: CornerKind::BottomLeft,
                rect: Rect { x: 0.0, y: h - ch, width: cl, height: ch },
            },
            CornerPlacement {
                kind: CornerKind::BottomRight,
                rect: Rect { x: w - cr, y: h - ch, width: cr, height: ch },
            },
        ];

        let span_w = (w - cl - cr).max(0.0);
        let span_h = (h - 2.0 * ch).max(0.0);

        let pieces = [
            // Top edge: outer edge at y = 0, bleed left/right/bottom.
            AdaptivePiece {
                kind: PieceKind::TopEdge,
                rect: Rect {
                    x: cl - b,
                    y: 0.0,
                    width: span_w + 2.0 * b,
                    height: ch + b,
                },
            },
            // Bottom edge: outer edge at y = h, bleed left/right/top.
            AdaptivePiece {
                kind: PieceKind::BottomEdge,
                rect: Rect {
                    x: cl - b,
                    y: h - ch - b,
                    width: span_w + 2.0 * b,
                    height: ch + b,
                },
            },
            // Left edge: outer edge at x = 0, bleed top/bottom/right.
            AdaptivePiece {
                kind: PieceKind::LeftEdge,
                rect: Rect {
                    x: 0.0,
                    y: ch - b,
                    width: cl + b,
                    height: span_h + 2.0 * b,
                },
            },
            // Right edge: outer edge at x = w, bleed top/bottom/left.
            AdaptivePiece {
                kind: PieceKind::RightEdge,
                rect: Rect {
                    x: w - cr - b,
                    y: ch - b,
                    width: cr + b,
                    height: span_h + 2.0 * b,
                },
            },
            // Center: every edge faces another piece, bleed all around.
            AdaptivePiece {
                kind: PieceKind::Center,
                rect: Rect {
                    x: cl - b,
                    y: ch - b,
                    width: span_w + 2.0 * b,
                    height: span_h + 2.0 * b,
                },
            },
        ];

        let content = Rect {
            x: config.content_inset.left,
            y: config.content_inset.top,
            width: (w - config.content_inset.horizontal()).max(0.0),
            height: (h - config.content_inset.vertical()).max(0.0),
        };

        Self { size, corners, pieces, content }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::HolderSize;

    fn plan(width: u32, height: u32) -> SlicePlan {
        SlicePlan::new(
            HolderSize { width, height },
            &OverlayConfig::default(),
        )
    }

    #[test]
    fn corners_sit_on_the_bounding_box() {
        let plan = plan(600, 420);
        let (w, h) = plan.size.as_f32();

        for corner in &plan.corners {
            match corner.kind {
                CornerKind::TopLeft => {
                    assert_eq!((corner.rect.x, corner.rect.y), (0.0, 0.0));
                }
                CornerKind::TopRight => {
                    assert_eq!(corner.rect.right(), w);
                    assert_eq!(corner.rect.y, 0.0);
                }
                CornerKind::BottomLeft => {
                    assert_eq!(corner.rect.x, 0.0);
                    assert_eq!(corner.rect.bottom(), h);
                }
                CornerKind::BottomRight => {
                    assert_eq!(corner.rect.right(), w);
                    assert_eq!(corner.rect.bottom(), h);
                }
            }
        }
    }

    #[test]
    fn right_corners_use_their_own_width() {
        let mut config = OverlayConfig::default();
        config.corner.left_width = 40.0;
        config.corner.right_width = 56.0;
        let plan = SlicePlan::new(HolderSize { width: 600, height: 420 }, &config);

        assert_eq!(plan.corners[0].rect.width, 40.0);
        assert_eq!(plan.corners[1].rect.width, 56.0);
        assert_eq!(plan.corners[3].rect.width, 56.0);
    }

    #[test]
    fn bleed_never_grows_the_silhouette() {
        let plan = plan(600, 420);
        let (w, h) = plan.size.as_f32();

        for piece in &plan.pieces {
            assert!(piece.rect.x >= 0.0, "{:?}", piece.kind);
            assert!(piece.rect.y >= 0.0, "{:?}", piece.kind);
            assert!(piece.rect.right() <= w, "{:?}", piece.kind);
            assert!(piece.rect.bottom() <= h, "{:?}", piece.kind);
        }
    }

    #[test]
    fn outer_edges_carry_no_bleed() {
        let plan = plan(600, 420);
        let (w, h) = plan.size.as_f32();

        let top = &plan.pieces[0].rect;
        let bottom = &plan.pieces[1].rect;
        let left = &plan.pieces[2].rect;
        let right = &plan.pieces[3].rect;

        assert_eq!(top.y, 0.0);
        assert_eq!(bottom.bottom(), h);
        assert_eq!(left.x, 0.0);
        assert_eq!(right.right(), w);
    }

    #[test]
    fn interior_edges_overlap_neighbors() {
        let config = OverlayConfig::default();
        let plan = SlicePlan::new(HolderSize { width: 600, height: 420 }, &config);
        let center = &plan.pieces[4].rect;
        let top = &plan.pieces[0].rect;

        // The center piece reaches under the top edge piece.
        assert!(center.y < top.bottom());
        // And under the left corner column.
        assert!(center.x < config.corner.left_width);
    }

    #[test]
    fn content_rect_respects_insets() {
        let config = OverlayConfig::default();
        let plan = SlicePlan::new(HolderSize { width: 600, height: 420 }, &config);

        assert_eq!(plan.content.x, config.content_inset.left);
        assert_eq!(plan.content.y, config.content_inset.top);
        assert_eq!(
            plan.content.width,
            600.0 - config.content_inset.horizontal()
        );
        assert_eq!(
            plan.content.height,
            420.0 - config.content_inset.vertical()
        );
    }

    #[test]
    fn tiny_holder_clamps_instead_of_inverting() {
        let plan = plan(40, 30);
        for piece in &plan.pieces {
            assert!(piece.rect.width >= 0.0);
            assert!(piece.rect.height >= 0.0);
        }
    }
}
