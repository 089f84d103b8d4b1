// SPDX-License-Identifier: MPL-2.0
//! Application root state: a deck of images judged one swipe at a time.
//!
//! The `App` struct wires the swipe card to the deck, localization and
//! settings. The card reports each swipe as an effect; the app records the
//! verdict and moves on to the next image while the card's feedback plays out.

mod deck;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use deck::{Deck, Tally, Verdict};
pub use message::{Flags, Message};

use crate::config;
use crate::domain::swipe::{ImageSource, SwipeDirection};
use crate::i18n::I18n;
use crate::ui::swipe_card::{self, Effect};
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::time::Instant;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    card: swipe_card::State,
    deck: Deck,
    theme_mode: ThemeMode,
    colors: ColorScheme,
    /// i18n key of a warning raised while loading settings.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("phase", &self.card.phase())
            .field("remaining", &self.deck.remaining())
            .field("tally", &self.deck.tally())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot; flags are consumed by the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            card: swipe_card::State::default(),
            deck: Deck::default(),
            theme_mode: ThemeMode::System,
            colors: ColorScheme::for_mode(ThemeMode::System),
            config_warning: None,
        }
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let theme_mode = config.general.theme_mode;

        let images: Vec<ImageSource> = flags.images.into_iter().map(ImageSource::from).collect();
        tracing::info!(
            images = images.len(),
            locale = %i18n.current_locale(),
            "starting swipe session"
        );

        let app = App {
            i18n,
            card: swipe_card::State::from_config(&config.swipe),
            deck: Deck::new(images),
            theme_mode,
            colors: ColorScheme::for_mode(theme_mode),
            config_warning,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.deck.current() {
            Some(image) if !self.deck.is_exhausted() => {
                format!("{} - {app_name}", image.display_name())
            }
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.card.is_animating(Instant::now()));

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let card_message = match message {
            Message::SwipeCard(card_message) => card_message,
            Message::Tick(instant) => swipe_card::Message::Tick(instant),
        };

        let (effect, task) = self.card.handle(card_message);
        if let Effect::Swiped(direction) = effect {
            self.record_swipe(direction);
        }

        task.map(Message::SwipeCard)
    }

    fn record_swipe(&mut self, direction: SwipeDirection) {
        match self.deck.record(direction).cloned() {
            Some(verdict) => tracing::info!(
                image = %verdict.source,
                %direction,
                remaining = self.deck.remaining(),
                "verdict recorded"
            ),
            None => tracing::debug!(%direction, "swipe on exhausted deck"),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            card: &self.card,
            deck: &self.deck,
            colors: &self.colors,
            warning: self.config_warning.as_deref(),
            now: Instant::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::swipe::{Phase, SwipeEvent};

    fn app_with(images: &[&str]) -> App {
        App {
            deck: Deck::new(images.iter().copied().map(ImageSource::from).collect()),
            ..App::default()
        }
    }

    fn notify_current(app: &mut App) {
        let cycle = app.card.machine().current_cycle().expect("card in feedback");
        let direction = app.card.direction().expect("card in feedback");
        let _ = app.update(Message::SwipeCard(swipe_card::Message::Scheduled(
            SwipeEvent::NotifyDue { cycle, direction },
        )));
    }

    #[test]
    fn swipe_is_recorded_after_notification() {
        let mut app = app_with(&["a.png", "b.png"]);
        let _ = app.update(Message::SwipeCard(swipe_card::Message::GestureCompleted(
            SwipeDirection::Right,
        )));
        assert!(app.deck.verdicts().is_empty(), "nothing recorded before notify");

        notify_current(&mut app);

        assert_eq!(app.deck.tally().liked, 1);
        assert_eq!(app.deck.current(), Some(&ImageSource::new("b.png")));
        assert_eq!(app.card.phase(), Phase::Feedback, "badge persists across the image change");
    }

    #[test]
    fn title_shows_current_image_name() {
        let app = app_with(&["photos/cat.png"]);
        assert!(app.title().starts_with("cat.png - "));
    }

    #[test]
    fn title_falls_back_to_app_name_when_exhausted() {
        let mut app = app_with(&["photos/cat.png"]);
        app.record_swipe(SwipeDirection::Left);
        assert_eq!(app.title(), app.i18n.tr("window-title"));
    }

    #[test]
    fn tick_leaves_deck_untouched() {
        let mut app = app_with(&["a.png"]);
        let _ = app.update(Message::Tick(Instant::now()));
        assert_eq!(app.deck.remaining(), 1);
    }
}
