// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page components.
//!
//! The `App` struct wires together the behavior state machines (carousels,
//! typewriter, scrollspy, counters, particles) and translates messages into
//! side effects like config persistence or scroll jumps. This file
//! intentionally keeps policy decisions (window sizing, which preference is
//! persisted when) close to the main update loop so it is easy to audit
//! user-facing behavior.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::content::Content;
use crate::showcase::scroll::Section;
use crate::showcase::{
    Carousel, ParticleField, ProgressFill, ScrollTracker, StatCounter, Typewriter,
};
use crate::ui::contact;
use crate::ui::design_tokens::sizing;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::widget::Id;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 760;

/// Root Iced application state bridging page components and persisted
/// preferences.
pub struct App {
    pub(crate) content: Content,
    pub(crate) theme_mode: ThemeMode,
    pub(crate) reduced_motion: bool,
    pub(crate) typewriter: Typewriter,
    /// One carousel per project gallery, plus the certificate gallery last.
    pub(crate) carousels: Vec<Carousel>,
    /// Gallery currently under the pointer; arrow keys act on it.
    pub(crate) hovered_carousel: Option<usize>,
    /// Last known cursor x over a gallery, for swipe displacement.
    pub(crate) cursor_x: f32,
    pub(crate) scroll: ScrollTracker,
    pub(crate) counters: Vec<StatCounter>,
    /// Skill fills, flattened in category-then-skill order.
    pub(crate) progress: Vec<ProgressFill>,
    pub(crate) particles: ParticleField,
    pub(crate) contact: contact::State,
    pub(crate) notifications: notifications::Manager,
    /// When the splash overlay went up.
    pub(crate) loader_started: Instant,
    pub(crate) loading: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("galleries", &self.carousels.len())
            .field("active_section", &self.scroll.active_section().title())
            .finish()
    }
}

/// Id of the single page scrollable, shared by the view and scroll-jump
/// tasks.
pub(crate) fn page_scroll_id() -> Id {
    Id::new("page")
}

/// Section boundaries derived from the fixed section heights, so the
/// scrollspy and the layout cannot drift apart.
fn section_bounds() -> Vec<(Section, f32)> {
    let heights = [
        (Section::Home, sizing::SECTION_HERO_HEIGHT),
        (Section::Skills, sizing::SECTION_SKILLS_HEIGHT),
        (Section::Projects, sizing::SECTION_PROJECTS_HEIGHT),
        (Section::Certificates, sizing::SECTION_CERTIFICATES_HEIGHT),
        (Section::Contact, sizing::SECTION_CONTACT_HEIGHT),
    ];

    let mut bounds = Vec::with_capacity(heights.len());
    let mut y = 0.0;
    for (section, height) in heights {
        bounds.push((section, y));
        y += height;
    }
    bounds
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the saved config, CLI flags, and
    /// the portfolio content.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|error| {
            eprintln!("Failed to load config: {:?}", error);
            config::Config::default()
        });

        let content = match flags.content.as_deref() {
            Some(path) => match Content::load_from_path(std::path::Path::new(path)) {
                Ok(content) => content,
                Err(error) => {
                    eprintln!("Failed to load content from {}: {}", path, error);
                    Content::default()
                }
            },
            None => Content::default(),
        };

        let theme_mode = match flags.theme.as_deref() {
            Some("light") => ThemeMode::Light,
            Some("dark") => ThemeMode::Dark,
            Some("system") => ThemeMode::System,
            Some(other) => {
                eprintln!("Unknown theme {:?}, using saved preference", other);
                config.theme.unwrap_or_default()
            }
            None => config.theme.unwrap_or_default(),
        };

        let reduced_motion =
            flags.reduced_motion || config.reduced_motion.unwrap_or(false);

        let typewriter = Typewriter::new(content.headline_phrases.clone());

        let mut carousels: Vec<Carousel> = content
            .projects
            .iter()
            .map(|project| Carousel::new(project.slides.len()))
            .collect();
        carousels.push(Carousel::new(content.certificates.len()));
        if !reduced_motion {
            for carousel in &mut carousels {
                carousel.start();
            }
        }

        let counters = content
            .stats
            .iter()
            .map(|stat| StatCounter::new(stat.value, stat.plus))
            .collect();

        let progress = content
            .skills
            .iter()
            .flat_map(|category| category.skills.iter())
            .map(|skill| ProgressFill::new(skill.level))
            .collect();

        let viewport_height =
            WINDOW_DEFAULT_HEIGHT as f32 - sizing::NAVBAR_HEIGHT;
        let scroll = ScrollTracker::new(section_bounds(), viewport_height);

        let mut app = App {
            content,
            theme_mode,
            reduced_motion,
            typewriter,
            carousels,
            hovered_carousel: None,
            cursor_x: 0.0,
            scroll,
            counters,
            progress,
            particles: ParticleField::new(!reduced_motion),
            contact: contact::State::new(),
            notifications: notifications::Manager::new(),
            loader_started: Instant::now(),
            loading: true,
        };

        // The hero is visible before any scrolling happens
        let initially_revealed: Vec<Section> =
            Section::ALL.into_iter().filter(|s| app.scroll.is_revealed(*s)).collect();
        for section in initially_revealed {
            update::on_section_revealed(&mut app, section);
        }

        (app, Task::none())
    }

    /// Window title shown by the OS.
    fn title(&self) -> String {
        format!("{} - Portfolio", self.content.name)
    }

    /// Resolves the Iced theme from the configured mode.
    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }
}
