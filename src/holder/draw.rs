// SPDX-License-Identifier: MPL-2.0
//! Canvas rendering of a slice plan.
//!
//! The same plan is rendered three times — glow, fill, outline — so the
//! compositing layers share one silhouette. The glow is a blur
//! approximation: a few expanding, increasingly translucent accent rings
//! behind the fill.

use super::{CornerKind, Rect, SlicePlan};
use iced::widget::canvas::{self, path, Stroke};
use iced::{Color, Point, Size, Vector};

/// Base fill of the holder body.
const FILL_COLOR: Color = Color::from_rgb(0.078, 0.071, 0.063);

/// Outer corner rounding of the silhouette.
const SILHOUETTE_RADIUS: f32 = 14.0;

/// Number of glow rings and how far each one spreads.
const GLOW_RINGS: u32 = 3;
const GLOW_SPREAD: f32 = 7.0;
const GLOW_ALPHA: f32 = 0.16;

const OUTLINE_WIDTH: f32 = 2.0;

/// Draws the three holder layers at `origin`, in holder-local coordinates.
pub fn draw_holder(
    frame: &mut canvas::Frame,
    plan: &SlicePlan,
    origin: Point,
    accent: Color,
) {
    frame.with_save(|frame| {
        frame.translate(Vector::new(origin.x, origin.y));
        draw_glow(frame, plan, accent);
        draw_fill(frame, plan);
        draw_outline(frame, plan, accent);
    });
}

/// Dark poster surface with a play glyph, shown in the content rectangle of
/// video frames (the embedded player owns the real surface once mounted).
pub fn draw_video_poster(frame: &mut canvas::Frame, content: Rect, origin: Point) {
    let top_left = Point::new(origin.x + content.x, origin.y + content.y);
    frame.fill_rectangle(
        top_left,
        Size::new(content.width, content.height),
        Color::from_rgb(0.02, 0.02, 0.03),
    );

    let cx = top_left.x + content.width / 2.0;
    let cy = top_left.y + content.height / 2.0;
    let r = (content.width.min(content.height) * 0.12).max(12.0);

    let triangle = canvas::Path::new(|b| {
        b.move_to(Point::new(cx - r * 0.5, cy - r * 0.8));
        b.line_to(Point::new(cx + r, cy));
        b.line_to(Point::new(cx - r * 0.5, cy + r * 0.8));
        b.close();
    });
    frame.fill(&triangle, Color::from_rgba(1.0, 1.0, 1.0, 0.85));
}

fn silhouette(plan: &SlicePlan, expand: f32) -> canvas::Path {
    let (w, h) = plan.size.as_f32();
    canvas::Path::rounded_rectangle(
        Point::new(-expand, -expand),
        Size::new(w + 2.0 * expand, h + 2.0 * expand),
        (SILHOUETTE_RADIUS + expand).into(),
    )
}

fn draw_glow(frame: &mut canvas::Frame, plan: &SlicePlan, accent: Color) {
    // Largest, faintest ring first so the rings composite into a falloff.
    for ring in (1..=GLOW_RINGS).rev() {
        let expand = ring as f32 * GLOW_SPREAD;
        let alpha = GLOW_ALPHA * (GLOW_RINGS + 1 - ring) as f32 / GLOW_RINGS as f32;
        frame.fill(&silhouette(plan, expand), Color { a: alpha, ..accent });
    }
}

fn draw_fill(frame: &mut canvas::Frame, plan: &SlicePlan) {
    for piece in &plan.pieces {
        frame.fill_rectangle(
            Point::new(piece.rect.x, piece.rect.y),
            Size::new(piece.rect.width, piece.rect.height),
            FILL_COLOR,
        );
    }
    for corner in &plan.corners {
        frame.fill(&corner_path(corner.kind, corner.rect), FILL_COLOR);
    }
}

fn draw_outline(frame: &mut canvas::Frame, plan: &SlicePlan, accent: Color) {
    frame.stroke(
        &silhouette(plan, 0.0),
        Stroke::default()
            .with_width(OUTLINE_WIDTH)
            .with_color(accent),
    );
}

/// Corner piece path with its outward-facing corner rounded. Corners are
/// positioned by translation only; the shape itself is fixed-size.
fn corner_path(kind: CornerKind, rect: Rect) -> canvas::Path {
    let r = SILHOUETTE_RADIUS.min(rect.width).min(rect.height);
    let mut b = path::Builder::new();
    match kind {
        CornerKind::TopLeft => {
            b.move_to(Point::new(rect.x, rect.bottom()));
            b.line_to(Point::new(rect.x, rect.y + r));
            b.quadratic_curve_to(
                Point::new(rect.x, rect.y),
                Point::new(rect.x + r, rect.y),
            );
            b.line_to(Point::new(rect.right(), rect.y));
            b.line_to(Point::new(rect.right(), rect.bottom()));
        }
        CornerKind::TopRight => {
            b.move_to(Point::new(rect.x, rect.y));
            b.line_to(Point::new(rect.right() - r, rect.y));
            b.quadratic_curve_to(
                Point::new(rect.right(), rect.y),
                Point::new(rect.right(), rect.y + r),
            );
            b.line_to(Point::new(rect.right(), rect.bottom()));
            b.line_to(Point::new(rect.x, rect.bottom()));
        }
        CornerKind::BottomLeft => {
            b.move_to(Point::new(rect.x, rect.y));
            b.line_to(Point::new(rect.x, rect.bottom() - r));
            b.quadratic_curve_to(
                Point::new(rect.x, rect.bottom()),
                Point::new(rect.x + r, rect.bottom()),
            );
            b.line_to(Point::new(rect.right(), rect.bottom()));
            b.line_to(Point::new(rect.right(), rect.y));
        }
        CornerKind::BottomRight => {
            b.move_to(Point::new(rect.x, rect.y));
            b.line_to(Point::new(rect.right(), rect.y));
            b.line_to(Point::new(rect.right(), rect.bottom() - r));
            b.quadratic_curve_to(
                Point::new(rect.right(), rect.bottom()),
                Point::new(rect.right() - r, rect.bottom()),
            );
            b.line_to(Point::new(rect.x, rect.bottom()));
        }
    }
    b.close();
    b.build()
}
