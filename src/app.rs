// SPDX-License-Identifier: MPL-2.0
//! Application root state and the tab/selection/auto-play state machine.
//!
//! The `App` struct owns the only mutable state in the program: the active
//! tab, the highlighted node, the two toggles, and the auto-play cursor.
//! User clicks and timer ticks both funnel through [`App::update`], which the
//! Iced runtime dispatches one at a time, so writes never interleave and the
//! last one simply wins.
//!
//! The auto-play timer is a subscription keyed by the active tab: toggling
//! auto-play off or switching tabs changes the subscription identity, which
//! makes the runtime drop the old interval stream before anything else runs.
//! A cancelled timer therefore can never deliver a stale tick.

use crate::config;
use crate::i18n::fluent::I18n;
use crate::scene::{Playback, Selection, Tab};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::scenes;
use crate::ui::theming::ThemeMode;
use crate::ui::{navbar, toolbar};
use iced::futures::SinkExt;
use iced::widget::{Column, Container, Row, Space, Text};
use iced::{stream, time, window, Element, Length, Subscription, Task, Theme};
use std::time::{Duration, Instant};

/// Frame period for the connector pulse animation.
const PULSE_FRAME: Duration = Duration::from_millis(66);
/// Full pulse travel time for one sweep along a connector.
const PULSE_CYCLE_MS: f32 = 1200.0;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    selection: Selection,
    playback: Playback,
    animate: bool,
    auto_play: bool,
    theme_mode: ThemeMode,
    highlight_interval: Duration,
    pulse_phase: f32,
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Navbar(navbar::Message),
    Toolbar(toolbar::Message),
    Scene(scenes::Message),
    /// One auto-play step: advance the highlight along the tab's sequence.
    HighlightTick(Instant),
    /// One animation frame for the connector pulse.
    PulseTick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional scene to open on (`ipo`, `elements`, `hardware`, `software`).
    pub start_tab: Option<Tab>,
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
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(|state: &App| state.title())
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            selection: Selection::default(),
            playback: Playback::default(),
            animate: true,
            auto_play: false,
            theme_mode: ThemeMode::System,
            highlight_interval: Duration::from_millis(config::DEFAULT_HIGHLIGHT_INTERVAL_MS),
            pulse_phase: 0.0,
        }
    }
}

impl App {
    /// Initializes application state from persisted preferences and CLI
    /// flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.theme_mode;
        app.animate = config.animate_flow.unwrap_or(true);

        let interval_ms = config
            .highlight_interval_ms
            .unwrap_or(config::DEFAULT_HIGHLIGHT_INTERVAL_MS)
            .max(1);
        app.highlight_interval = Duration::from_millis(interval_ms);

        if let Some(tab) = flags.start_tab {
            app.selection.set_tab(tab);
        }

        (app, Task::none())
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_animate(&self) -> bool {
        self.animate
    }

    pub fn is_auto_play(&self) -> bool {
        self.auto_play
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let highlight = if self.auto_play {
            highlight_cycle(self.selection.tab(), self.highlight_interval)
                .map(Message::HighlightTick)
        } else {
            Subscription::none()
        };

        // The pulse only needs frames while something is animating.
        let pulse = if self.animate || self.auto_play {
            time::every(PULSE_FRAME).map(Message::PulseTick)
        } else {
            Subscription::none()
        };

        Subscription::batch([highlight, pulse])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(navbar_message) => match navbar::update(navbar_message) {
                navbar::Event::TabSelected(tab) => {
                    self.select_tab(tab);
                    Task::none()
                }
            },
            Message::Toolbar(toolbar_message) => match toolbar::update(toolbar_message) {
                toolbar::Event::AnimateChanged(enabled) => {
                    self.animate = enabled;
                    self.persist_preferences()
                }
                toolbar::Event::AutoPlayChanged(enabled) => {
                    self.set_auto_play(enabled);
                    Task::none()
                }
                toolbar::Event::ClearSelection => {
                    self.selection.clear();
                    Task::none()
                }
            },
            Message::Scene(scenes::Message::NodePressed(node)) => {
                self.selection.set_node(Some(node));
                Task::none()
            }
            Message::HighlightTick(_instant) => {
                // A tick can only arrive while the auto-play subscription is
                // alive, but dispatch order still makes the guard cheap to
                // keep explicit.
                if self.auto_play {
                    let sequence = self.selection.tab().sequence();
                    let node = self.playback.advance(sequence);
                    self.selection.set_node(node);
                }
                Task::none()
            }
            Message::PulseTick(_instant) => {
                let step = PULSE_FRAME.as_millis() as f32 / PULSE_CYCLE_MS;
                self.pulse_phase = (self.pulse_phase + step) % 1.0;
                Task::none()
            }
        }
    }

    /// Switches tab: the highlight resets to the tab default, and a running
    /// auto-play cycle restarts from the new tab's sequence start.
    fn select_tab(&mut self, tab: Tab) {
        self.selection.set_tab(tab);
        if self.auto_play {
            let node = self.playback.restart(tab.sequence());
            self.selection.set_node(node);
        }
    }

    /// Enables or disables auto-play. Enabling jumps the highlight to the
    /// sequence start; disabling leaves the last highlight in place.
    /// Requesting the current state is a no-op, so a second "enable" cannot
    /// rewind the cycle or double its pace.
    fn set_auto_play(&mut self, enabled: bool) {
        if enabled == self.auto_play {
            return;
        }
        self.auto_play = enabled;
        if enabled {
            let node = self.playback.restart(self.selection.tab().sequence());
            self.selection.set_node(node);
        }
    }

    /// Persists the current presentation preferences to disk.
    ///
    /// Guarded during tests to keep isolation: unit tests exercise the logic
    /// by calling `update` directly.
    fn persist_preferences(&self) -> Task<Message> {
        if cfg!(test) {
            return Task::none();
        }

        let mut cfg = config::load().unwrap_or_default();
        cfg.theme_mode = self.theme_mode;
        cfg.animate_flow = Some(self.animate);
        cfg.highlight_interval_ms = Some(self.highlight_interval.as_millis() as u64);

        if let Err(error) = config::save(&cfg) {
            eprintln!("Failed to save config: {:?}", error);
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let header = Row::new()
            .spacing(spacing::SM)
            .align_y(iced::alignment::Vertical::Center)
            .push(Text::new(self.i18n.tr("app-title")).size(typography::TITLE_LG))
            .push(Space::new().width(Length::Fill))
            .push(
                toolbar::view(toolbar::ViewContext {
                    i18n: &self.i18n,
                    animate: self.animate,
                    auto_play: self.auto_play,
                    has_selection: self.selection.node().is_some(),
                })
                .map(Message::Toolbar),
            );

        let tabs = navbar::view(navbar::ViewContext {
            i18n: &self.i18n,
            active_tab: self.selection.tab(),
        })
        .map(Message::Navbar);

        let pulse = if self.animate || self.auto_play {
            Some(self.pulse_phase)
        } else {
            None
        };

        let scene = scenes::view(scenes::ViewContext {
            i18n: &self.i18n,
            selection: &self.selection,
            pulse,
        })
        .map(Message::Scene);

        let column = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .max_width(sizing::SCENE_MAX_WIDTH)
            .push(header)
            .push(tabs)
            .push(scene);

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center)
            .into()
    }
}

/// Subscription ID for the auto-play interval.
///
/// Keying on the tab means a tab switch produces a fresh stream (and thus a
/// fresh interval phase) while the old one is dropped, which is exactly the
/// tear-down-and-restart contract of the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct HighlightCycleId(Tab);

/// Emits one `Instant` per highlight step while auto-play is on. The first
/// step fires one full period after the stream starts; the jump to the
/// sequence start already happened synchronously in `update`.
fn highlight_cycle(tab: Tab, period: Duration) -> Subscription<Instant> {
    Subscription::run_with(
        (HighlightCycleId(tab), period),
        |&(_, period): &(HighlightCycleId, Duration)| {
            stream::channel(
                8,
                move |mut output: iced::futures::channel::mpsc::Sender<Instant>| async move {
                let mut interval = tokio::time::interval(period);
                interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
                // The first `tick` completes immediately; skip it.
                interval.tick().await;
                    loop {
                        interval.tick().await;
                        if output.send(Instant::now()).await.is_err() {
                            break;
                        }
                    }
                },
            )
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::NodeId;

    fn tick(app: &mut App) {
        let _ = app.update(Message::HighlightTick(Instant::now()));
    }

    fn set_auto_play(app: &mut App, enabled: bool) {
        let _ = app.update(Message::Toolbar(toolbar::Message::SetAutoPlay(enabled)));
    }

    fn select_tab(app: &mut App, tab: Tab) {
        let _ = app.update(Message::Navbar(navbar::Message::TabPressed(tab)));
    }

    #[test]
    fn starts_on_ipo_with_process_and_auto_play_off() {
        let app = App::default();
        assert_eq!(app.selection().tab(), Tab::Ipo);
        assert_eq!(app.selection().node(), Some(NodeId::Process));
        assert!(!app.is_auto_play());
    }

    #[test]
    fn selecting_a_tab_resets_the_highlight_to_its_default() {
        for tab in Tab::ALL {
            let mut app = App::default();
            let _ = app.update(Message::Scene(scenes::Message::NodePressed(NodeId::Output)));

            select_tab(&mut app, tab);
            assert_eq!(app.selection().tab(), tab);
            assert_eq!(app.selection().node(), Some(tab.default_node()));
        }
    }

    #[test]
    fn node_press_updates_only_the_highlight() {
        let mut app = App::default();
        let _ = app.update(Message::Scene(scenes::Message::NodePressed(NodeId::Storage)));

        assert_eq!(app.selection().tab(), Tab::Ipo);
        assert_eq!(app.selection().node(), Some(NodeId::Storage));
        assert!(!app.is_auto_play());
    }

    #[test]
    fn enabling_auto_play_jumps_to_the_sequence_start() {
        let mut app = App::default();
        set_auto_play(&mut app, true);

        assert!(app.is_auto_play());
        assert_eq!(app.selection().node(), Some(NodeId::Input));
    }

    #[test]
    fn ticks_visit_the_sequence_in_order_and_wrap() {
        let mut app = App::default();
        set_auto_play(&mut app, true);

        let seq = Tab::Ipo.sequence();
        for expected in seq.iter().skip(1) {
            tick(&mut app);
            assert_eq!(app.selection().node(), Some(*expected));
        }
        // Wraps back to the start.
        tick(&mut app);
        assert_eq!(app.selection().node(), Some(seq[0]));
    }

    #[test]
    fn disabling_auto_play_freezes_the_highlight() {
        let mut app = App::default();
        set_auto_play(&mut app, true);
        tick(&mut app);
        let frozen = app.selection().node();

        set_auto_play(&mut app, false);
        assert!(!app.is_auto_play());
        assert_eq!(app.selection().node(), frozen);

        // A tick after disabling must not advance (the subscription is gone
        // in production; the update guard covers the same contract).
        tick(&mut app);
        assert_eq!(app.selection().node(), frozen);
    }

    #[test]
    fn enabling_twice_is_idempotent() {
        let mut app = App::default();
        set_auto_play(&mut app, true);
        tick(&mut app);
        let after_one_tick = app.selection().node();

        // Re-enabling must not rewind the cycle...
        set_auto_play(&mut app, true);
        assert_eq!(app.selection().node(), after_one_tick);

        // ...and the next tick advances exactly one position.
        tick(&mut app);
        assert_eq!(app.selection().node(), Some(Tab::Ipo.sequence()[2]));
    }

    #[test]
    fn tab_switch_while_playing_restarts_from_the_new_sequence() {
        let mut app = App::default();
        set_auto_play(&mut app, true);
        tick(&mut app);
        tick(&mut app);

        select_tab(&mut app, Tab::Elements);
        assert_eq!(app.selection().node(), Some(NodeId::Data));

        tick(&mut app);
        assert_eq!(app.selection().node(), Some(NodeId::SoftwareElement));
    }

    #[test]
    fn clear_keeps_tab_and_auto_play_flag() {
        let mut app = App::default();
        select_tab(&mut app, Tab::Software);
        set_auto_play(&mut app, true);

        let _ = app.update(Message::Toolbar(toolbar::Message::ClearPressed));
        assert_eq!(app.selection().node(), None);
        assert_eq!(app.selection().tab(), Tab::Software);
        assert!(app.is_auto_play());
    }

    #[test]
    fn hardware_auto_play_cycles_the_data_path() {
        // Start state: (ipo, process, off).
        let mut app = App::default();
        assert_eq!(app.selection().node(), Some(NodeId::Process));

        // Click the hardware tab.
        select_tab(&mut app, Tab::Hardware);
        assert_eq!(app.selection().node(), Some(NodeId::Cpu));

        // Enable auto-play: highlight jumps to the sequence start...
        set_auto_play(&mut app, true);
        assert_eq!(app.selection().node(), Some(NodeId::InputDevices));

        // ...and one interval later sits on the second element.
        tick(&mut app);
        assert_eq!(app.selection().node(), Some(NodeId::Cpu));

        // Wrapping through every entry returns to the start.
        let seq = Tab::Hardware.sequence();
        for _ in 2..=seq.len() {
            tick(&mut app);
        }
        assert_eq!(app.selection().node(), Some(seq[0]));
    }

    #[test]
    fn animate_toggle_flips_the_flag() {
        let mut app = App::default();
        assert!(app.is_animate());

        let _ = app.update(Message::Toolbar(toolbar::Message::SetAnimate(false)));
        assert!(!app.is_animate());
    }

    #[test]
    fn pulse_phase_wraps_around() {
        let mut app = App::default();
        for _ in 0..100 {
            let _ = app.update(Message::PulseTick(Instant::now()));
            assert!(app.pulse_phase >= 0.0 && app.pulse_phase < 1.0);
        }
    }

    #[test]
    fn view_renders_in_every_tab_and_toggle_state() {
        for tab in Tab::ALL {
            for auto_play in [false, true] {
                let mut app = App::default();
                select_tab(&mut app, tab);
                set_auto_play(&mut app, auto_play);
                let _element = app.view();
            }
        }
    }
}
