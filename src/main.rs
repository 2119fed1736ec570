// SPDX-License-Identifier: MPL-2.0
//! Gallery host application.
//!
//! Plays the role of the "host page": shows a thumbnail grid, opens the
//! lightbox on click, and routes keyboard and window-resize events to it.
//! Pass a directory on the command line to browse its images; without one a
//! small demo list of embedded-video items is shown.

use iced::alignment::Horizontal;
use iced::widget::{button, container, image as image_widget, text, Column, Row, Scrollable, Stack};
use iced::{keyboard, Color, Element, Length, Subscription, Task, Theme};
use iced_lightbox::media::{self, MediaItem};
use iced_lightbox::{config, overlay, Error, Viewport};
use std::path::Path;

const WINDOW_WIDTH: f32 = 1200.0;
const WINDOW_HEIGHT: f32 = 800.0;
const THUMB_SIZE: f32 = 160.0;
const THUMBS_PER_ROW: usize = 5;

const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "bmp"];

#[derive(Debug, Clone, Default)]
struct Flags {
    directory: Option<String>,
}

#[derive(Debug, Clone)]
enum Message {
    Overlay(overlay::Message),
    ThumbLoaded {
        index: usize,
        result: Result<media::ImageData, Error>,
    },
    ThumbPressed(usize),
    EventOccurred(iced::Event),
}

struct Gallery {
    items: Vec<MediaItem>,
    thumbs: Vec<Option<media::ImageData>>,
    overlay: overlay::State,
    accent: Color,
}

/// Scans a directory for image files, sorted by file name.
fn scan_directory(dir: &Path) -> Vec<MediaItem> {
    let mut paths: Vec<_> = match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| {
                        IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str())
                    })
            })
            .collect(),
        Err(err) => {
            eprintln!("Failed to scan directory {}: {err}", dir.display());
            Vec::new()
        }
    };
    paths.sort();
    paths
        .into_iter()
        .filter_map(|path| path.to_str().map(MediaItem::image))
        .collect()
}

fn demo_items() -> Vec<MediaItem> {
    vec![
        MediaItem::video("demo-clip-1"),
        MediaItem::video_with_aspect("demo-clip-2", 4.0 / 3.0),
        MediaItem::video("demo-clip-3"),
    ]
}

impl Gallery {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            eprintln!("Failed to load overlay config: {err}");
            config::OverlayConfig::default()
        });
        let accent = config::parse_accent(&config.default_accent);

        let items = match &flags.directory {
            Some(dir) => scan_directory(Path::new(dir)),
            None => demo_items(),
        };

        let overlay = overlay::State::new(
            config,
            Viewport::new(WINDOW_WIDTH, WINDOW_HEIGHT),
        );

        let thumbs = vec![None; items.len()];
        let loads: Vec<Task<Message>> = items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| match item {
                MediaItem::Image { src } => {
                    let src = src.clone();
                    Some(Task::perform(
                        async move { media::load_image(&src).await },
                        move |result| Message::ThumbLoaded { index, result },
                    ))
                }
                MediaItem::Video { .. } => None,
            })
            .collect();

        (
            Self {
                items,
                thumbs,
                overlay,
                accent,
            },
            Task::batch(loads),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Overlay(msg) => self.overlay.update(msg).map(Message::Overlay),

            Message::ThumbLoaded { index, result } => {
                match result {
                    Ok(data) => {
                        if let Some(slot) = self.thumbs.get_mut(index) {
                            *slot = Some(data);
                        }
                    }
                    Err(err) => eprintln!("Failed to load thumbnail: {err}"),
                }
                Task::none()
            }

            Message::ThumbPressed(index) => {
                let items = self.items.clone();
                let accent = self.accent;
                self.overlay.open(items, index, accent).map(Message::Overlay)
            }

            Message::EventOccurred(event) => self.handle_event(&event),
        }
    }

    fn handle_event(&mut self, event: &iced::Event) -> Task<Message> {
        match event {
            iced::Event::Window(iced::window::Event::Resized(size)) => self
                .overlay
                .layout(Viewport::new(size.width, size.height))
                .map(Message::Overlay),

            iced::Event::Keyboard(keyboard::Event::KeyPressed { key, .. })
                if self.overlay.is_open() =>
            {
                match key {
                    keyboard::Key::Named(keyboard::key::Named::Escape) => {
                        self.overlay.close().map(Message::Overlay)
                    }
                    keyboard::Key::Named(keyboard::key::Named::ArrowRight) => self
                        .overlay
                        .slide(overlay::Direction::Forward)
                        .map(Message::Overlay),
                    keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => self
                        .overlay
                        .slide(overlay::Direction::Backward)
                        .map(Message::Overlay),
                    _ => Task::none(),
                }
            }

            _ => Task::none(),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            iced::event::listen().map(Message::EventOccurred),
            self.overlay.subscription().map(Message::Overlay),
        ])
    }

    fn thumb_cell(&self, index: usize) -> Element<'_, Message> {
        let content: Element<'_, Message> = match &self.thumbs[index] {
            Some(data) => image_widget(data.handle.clone())
                .width(Length::Fixed(THUMB_SIZE))
                .height(Length::Fixed(THUMB_SIZE))
                .into(),
            None => {
                let label = match &self.items[index] {
                    MediaItem::Video { .. } => "\u{25b6}",
                    MediaItem::Image { .. } => "\u{2026}",
                };
                container(text(label).size(32))
                    .width(Length::Fixed(THUMB_SIZE))
                    .height(Length::Fixed(THUMB_SIZE))
                    .center_x(Length::Fixed(THUMB_SIZE))
                    .center_y(Length::Fixed(THUMB_SIZE))
                    .into()
            }
        };

        button(content)
            .on_press(Message::ThumbPressed(index))
            .padding(4)
            .into()
    }

    fn view(&self) -> Element<'_, Message> {
        let mut grid = Column::new().spacing(12).padding(24);
        for chunk in (0..self.items.len()).collect::<Vec<_>>().chunks(THUMBS_PER_ROW)
        {
            let mut row = Row::new().spacing(12);
            for &index in chunk {
                row = row.push(self.thumb_cell(index));
            }
            grid = grid.push(row);
        }

        let gallery: Element<'_, Message> = if self.items.is_empty() {
            container(
                text("No media found. Pass a directory of images on the command line.")
                    .size(18),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
        } else {
            Scrollable::new(
                container(grid).width(Length::Fill).align_x(Horizontal::Center),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
        };

        Stack::new()
            .push(gallery)
            .push(self.overlay.view().map(Message::Overlay))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn title(&self) -> String {
        "Iced Lightbox".to_string()
    }
}

fn main() -> iced::Result {
    use std::cell::RefCell;

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        directory: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    // The boot closure has to be `Fn`, but building the gallery consumes
    // the flags, so they go through a take-once slot.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        Gallery::new(flags)
    };

    iced::application(boot, Gallery::update, Gallery::view)
        .title(Gallery::title)
        .theme(Gallery::theme)
        .subscription(Gallery::subscription)
        .window(iced::window::Settings {
            size: iced::Size::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            ..iced::window::Settings::default()
        })
        .run()
}
