// SPDX-License-Identifier: MPL-2.0
//! The lightbox overlay runtime.
//!
//! Owns the overlay state (items, current index, open/sliding flags, accent
//! color) and the operation-generation counter that totally orders every
//! open/close/slide. All mutation happens in [`State::update`]; every
//! asynchronous continuation arrives as a [`Message`] stamped with the
//! generation it was spawned under, and a stale stamp means the result is
//! disposed instead of applied. That stale-result discarding is the only
//! cancellation mechanism in the system, and it is sufficient because this
//! update loop is the single writer.
//!
//! At rest one frame exists; during a slide exactly two (current and
//! incoming) until the incoming frame is promoted. Closed, none.

pub mod controls;
pub mod frame;
pub mod transition;

pub use frame::Frame;
pub use transition::Direction;

use crate::config::OverlayConfig;
use crate::error::Error;
use crate::geometry::Viewport;
use crate::holder::draw::{draw_holder, draw_video_poster};
use crate::media::{MediaItem, PlaceholderFactory, SharedPlayerFactory};
use controls::ControlGeometry;
use iced::widget::canvas;
use iced::widget::{Space, Stack};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Size, Subscription, Task};
use std::sync::Arc;
use std::time::{Duration, Instant};
use transition::{Phase, Slide};

const BACKDROP_COLOR: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.78);
const REDRAW_INTERVAL_MS: u64 = 16;

#[derive(Debug, Clone)]
pub enum Message {
    /// The current frame finished building (open/layout path).
    FrameBuilt {
        generation: u64,
        result: Result<Frame, Error>,
    },
    /// The deferred next frame finished building (slide path).
    NextFrameBuilt {
        generation: u64,
        result: Result<Frame, Error>,
    },
    /// The slide's fixed-duration timer fired.
    SlideFinished { generation: u64 },
    Controls(controls::Message),
    BackdropPressed,
    /// Animation repaint tick; carries no state.
    Redraw(Instant),
}

/// The overlay runtime. One instance lives for the host's lifetime; every
/// `open` starts a fresh session and rebuilds everything from scratch.
pub struct State {
    items: Vec<MediaItem>,
    current_index: usize,
    is_open: bool,
    phase: Phase,
    accent: Color,
    generation: u64,
    current: Option<Frame>,
    incoming: Option<Frame>,
    viewport: Viewport,
    config: OverlayConfig,
    factory: SharedPlayerFactory,
}

impl State {
    #[must_use]
    pub fn new(config: OverlayConfig, viewport: Viewport) -> Self {
        Self::with_player_factory(config, viewport, Arc::new(PlaceholderFactory))
    }

    /// Creates a runtime with the host's embedded-player backend.
    #[must_use]
    pub fn with_player_factory(
        config: OverlayConfig,
        viewport: Viewport,
        factory: SharedPlayerFactory,
    ) -> Self {
        let accent = crate::config::parse_accent(&config.default_accent);
        Self {
            items: Vec::new(),
            current_index: 0,
            is_open: false,
            phase: Phase::Idle,
            accent,
            generation: 0,
            current: None,
            incoming: None,
            viewport,
            config,
            factory,
        }
    }

    // ---- public surface -------------------------------------------------

    /// Opens a session over `items`, starting at `index`, with the given
    /// accent. Cancels anything in flight and rebuilds from scratch; a
    /// frame from a prior session is never reused.
    pub fn open(
        &mut self,
        items: Vec<MediaItem>,
        index: usize,
        accent: Color,
    ) -> Task<Message> {
        self.generation += 1;
        self.phase = Phase::Idle;
        self.dispose_frames();
        self.items = items;
        self.accent = accent;
        self.is_open = true;

        if self.items.is_empty() {
            eprintln!("Lightbox opened with an empty item list; showing backdrop only");
            self.current_index = 0;
            return Task::none();
        }

        self.current_index = index.min(self.items.len() - 1);
        self.spawn_current_build()
    }

    /// Single-image shorthand: equivalent to a one-item list.
    pub fn open_single(&mut self, src: impl Into<String>) -> Task<Message> {
        let accent = self.accent;
        self.open(vec![MediaItem::image(src)], 0, accent)
    }

    /// Closes the overlay and stops the current media. Idempotent.
    pub fn close(&mut self) -> Task<Message> {
        if !self.is_open {
            return Task::none();
        }
        self.generation += 1;
        // Force the controller out of `sliding` so a cancelled transition
        // can never leave it wedged.
        self.phase = Phase::Idle;
        self.dispose_frames();
        self.is_open = false;
        Task::none()
    }

    /// Starts a slide. No-op while closed, while already sliding, or when
    /// the list has fewer than two entries.
    pub fn slide(&mut self, direction: Direction) -> Task<Message> {
        if !self.is_open
            || self.phase.is_sliding()
            || self.items.len() < 2
            || self.current.is_none()
        {
            return Task::none();
        }

        self.generation += 1;
        let target_index =
            transition::next_index(self.current_index, direction, self.items.len());
        self.phase = Phase::Sliding(Slide {
            direction,
            target_index,
            travel: 0.0,
            started_at: None,
        });

        let generation = self.generation;
        let item = self.items[target_index].clone();
        let task = frame::build(
            item,
            target_index,
            self.viewport,
            self.config.clone(),
            Arc::clone(&self.factory),
            true, // defer media: the next frame must not start loading yet
        );
        Task::perform(task, move |result| Message::NextFrameBuilt {
            generation,
            result,
        })
    }

    /// Re-solves geometry for a new viewport and rebuilds the current
    /// frame in place. No-op while sliding, to avoid corrupting an
    /// in-flight transition.
    pub fn layout(&mut self, viewport: Viewport) -> Task<Message> {
        self.viewport = viewport;
        if !self.is_open || self.phase.is_sliding() || self.items.is_empty() {
            return Task::none();
        }
        // The rebuild replaces the current frame, so any build still in
        // flight is now stale and must miss the generation check.
        self.generation += 1;
        self.spawn_current_build()
    }

    /// Updates the accent used by the glow/outline layers. Geometry and
    /// session state are untouched.
    pub fn set_accent(&mut self, accent: Color) {
        self.accent = accent;
    }

    /// Releases everything the runtime holds.
    pub fn destroy(&mut self) {
        self.generation += 1;
        self.phase = Phase::Idle;
        self.dispose_frames();
        self.is_open = false;
        self.items.clear();
        self.current_index = 0;
    }

    // ---- accessors ------------------------------------------------------

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn is_sliding(&self) -> bool {
        self.phase.is_sliding()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live (non-disposed) frames: 0 closed, 1 at rest, 2 only
    /// mid-slide.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        usize::from(self.current.is_some()) + usize::from(self.incoming.is_some())
    }

    #[must_use]
    pub fn current_frame(&self) -> Option<&Frame> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn accent(&self) -> Color {
        self.accent
    }

    // ---- update loop ----------------------------------------------------

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FrameBuilt { generation, result } => {
                if generation != self.generation {
                    Self::discard_stale(result);
                    return Task::none();
                }
                match result {
                    Ok(frame) => {
                        if let Some(mut old) = self.current.replace(frame) {
                            old.dispose();
                        }
                    }
                    Err(err) => {
                        // Leave the previous visual state standing.
                        eprintln!("Failed to build frame: {err}");
                    }
                }
                Task::none()
            }

            Message::NextFrameBuilt { generation, result } => {
                if generation != self.generation {
                    Self::discard_stale(result);
                    return Task::none();
                }
                let Phase::Sliding(slide) = &mut self.phase else {
                    Self::discard_stale(result);
                    return Task::none();
                };
                match result {
                    Ok(next) => {
                        let current_width =
                            self.current.as_ref().map_or(0, |f| f.size.width);
                        slide.travel = transition::travel_distance(
                            current_width,
                            next.size.width,
                            self.config.slide_margin,
                        );
                        slide.started_at = Some(Instant::now());
                        self.incoming = Some(next);

                        let duration =
                            Duration::from_millis(self.config.slide_duration_ms);
                        Task::perform(
                            async move { tokio::time::sleep(duration).await },
                            move |()| Message::SlideFinished { generation },
                        )
                    }
                    Err(err) => {
                        eprintln!("Failed to build next frame: {err}");
                        self.phase = Phase::Idle;
                        Task::none()
                    }
                }
            }

            Message::SlideFinished { generation } => {
                if generation != self.generation {
                    return Task::none();
                }
                let Phase::Sliding(slide) = std::mem::take(&mut self.phase) else {
                    return Task::none();
                };
                if let Some(mut old) = self.current.take() {
                    old.dispose();
                }
                if let Some(mut next) = self.incoming.take() {
                    // Built deferred; presentation starts at promotion.
                    next.adapter.activate();
                    self.current_index = slide.target_index;
                    self.current = Some(next);
                }
                Task::none()
            }

            Message::Controls(control) => match control {
                controls::Message::CloseRequested => self.close(),
                controls::Message::PrevRequested => self.slide(Direction::Backward),
                controls::Message::NextRequested => self.slide(Direction::Forward),
            },

            Message::BackdropPressed => self.close(),

            Message::Redraw(_) => Task::none(),
        }
    }

    /// Repaint ticks while a slide animates. Completion does not depend on
    /// these; the fixed-duration timer owns that.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.phase.is_sliding() {
            iced::time::every(Duration::from_millis(REDRAW_INTERVAL_MS))
                .map(Message::Redraw)
        } else {
            Subscription::none()
        }
    }

    // ---- view -----------------------------------------------------------

    pub fn view(&self) -> Element<'_, Message> {
        if !self.is_open {
            return Space::new().width(Length::Shrink).height(Length::Shrink).into();
        }

        let scene = canvas::Canvas::new(Scene { state: self })
            .width(Length::Fill)
            .height(Length::Fill);

        let geometry = self.control_geometry();
        Stack::new()
            .push(scene)
            .push(
                controls::view(
                    geometry,
                    self.items.len(),
                    self.current_index,
                    self.accent,
                )
                .map(Message::Controls),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    // ---- internals ------------------------------------------------------

    fn spawn_current_build(&self) -> Task<Message> {
        let generation = self.generation;
        let task = frame::build(
            self.items[self.current_index].clone(),
            self.current_index,
            self.viewport,
            self.config.clone(),
            Arc::clone(&self.factory),
            false,
        );
        Task::perform(task, move |result| Message::FrameBuilt {
            generation,
            result,
        })
    }

    fn dispose_frames(&mut self) {
        if let Some(mut frame) = self.current.take() {
            frame.dispose();
        }
        if let Some(mut frame) = self.incoming.take() {
            frame.dispose();
        }
    }

    fn discard_stale(result: Result<Frame, Error>) {
        if let Ok(mut frame) = result {
            frame.dispose();
        }
    }

    fn control_geometry(&self) -> ControlGeometry {
        match &self.current {
            // The geometry attached at build time, so the controls always
            // match the holder they were solved with.
            Some(frame) => frame.controls,
            None => ControlGeometry {
                holder_left: self.config.viewport_padding_x,
                holder_right: self.config.viewport_padding_x,
                holder_top: self.config.viewport_padding_y,
            },
        }
    }

    /// Horizontal displacement of the current frame and, when present, the
    /// incoming frame, at this instant of the slide animation.
    fn slide_displacements(&self) -> (f32, f32) {
        let Phase::Sliding(slide) = &self.phase else {
            return (0.0, 0.0);
        };
        let Some(started_at) = slide.started_at else {
            return (0.0, 0.0);
        };
        let duration = Duration::from_millis(self.config.slide_duration_ms);
        let offset =
            transition::offset_at(started_at.elapsed(), duration, slide.travel);
        let sign = match slide.direction {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        };
        (-sign * offset, sign * (slide.travel - offset))
    }

    fn holder_origin(size: crate::geometry::HolderSize, bounds: Size) -> Point {
        let (w, h) = size.as_f32();
        Point::new((bounds.width - w) / 2.0, (bounds.height - h) / 2.0)
    }

    fn cursor_over_holder(&self, position: Point, bounds: Size) -> bool {
        let Some(frame) = &self.current else {
            return false;
        };
        let origin = Self::holder_origin(frame.size, bounds);
        let (w, h) = frame.size.as_f32();
        Rectangle::new(origin, Size::new(w, h)).contains(position)
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("is_open", &self.is_open)
            .field("is_sliding", &self.phase.is_sliding())
            .field("current_index", &self.current_index)
            .field("generation", &self.generation)
            .field("frame_count", &self.frame_count())
            .finish()
    }
}

/// The scene canvas: backdrop, both holders offset by the eased travel,
/// and the media inside their content rectangles.
struct Scene<'a> {
    state: &'a State,
}

impl Scene<'_> {
    fn draw_frame(
        &self,
        canvas_frame: &mut canvas::Frame,
        frame: &Frame,
        origin: Point,
    ) {
        draw_holder(canvas_frame, &frame.plan, origin, self.state.accent);

        let content = frame.plan.content;
        match frame.adapter.image_data() {
            Some(data) => {
                let bounds = Rectangle::new(
                    Point::new(origin.x + content.x, origin.y + content.y),
                    Size::new(content.width, content.height),
                );
                canvas_frame.draw_image(bounds, &data.handle);
            }
            None => draw_video_poster(canvas_frame, content, origin),
        }
    }
}

impl canvas::Program<Message> for Scene<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        if let iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) =
            event
        {
            if let Some(position) = cursor.position_in(bounds) {
                let over_holder = self
                    .state
                    .cursor_over_holder(position, bounds.size());
                if !over_holder && !self.state.is_sliding() {
                    return Some(
                        iced::widget::Action::publish(Message::BackdropPressed)
                            .and_capture(),
                    );
                }
            }
        }
        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut canvas_frame = canvas::Frame::new(renderer, bounds.size());

        canvas_frame.fill_rectangle(Point::ORIGIN, bounds.size(), BACKDROP_COLOR);

        let (current_dx, incoming_dx) = self.state.slide_displacements();

        if let Some(frame) = &self.state.current {
            let mut origin = State::holder_origin(frame.size, bounds.size());
            origin.x += current_dx;
            self.draw_frame(&mut canvas_frame, frame, origin);
        }

        if let Some(frame) = &self.state.incoming {
            let mut origin = State::holder_origin(frame.size, bounds.size());
            origin.x += incoming_dx;
            self.draw_frame(&mut canvas_frame, frame, origin);
        }

        vec![canvas_frame.into_geometry()]
    }
}
