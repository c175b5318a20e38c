//! Screen flow and the runtime lifecycle.
//!
//! A [`Runtime`] owns the current screen and the input aggregator. The host calls
//! [`Runtime::start`] once its surface exists, feeds events through
//! [`Runtime::handle_event`], calls [`Runtime::tick`] every frame, and finally
//! [`Runtime::stop`].

use std::time::Duration;

use macroquad::prelude::Vec2;

use crate::command::{AssetSource, Surface};
use crate::config::GameConfig;
use crate::error::GameResult;
use crate::input::{InputAggregator, InputEvent};

pub mod level;
pub mod title;

pub use level::{LevelAssets, LevelScreen};
pub use title::TitleScreen;

#[derive(Debug)]
pub enum Screen {
    Title(TitleScreen),
    Level(Box<LevelScreen>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Title,
    Level,
}

/// A screen change the host has to await.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    EnterLevel,
}

#[derive(Debug)]
pub struct Runtime {
    config: GameConfig,
    input: InputAggregator,
    screen: Option<Screen>,
}

impl Runtime {
    pub fn new(config: GameConfig) -> Self {
        let input = InputAggregator::new(
            config.input.swipe_threshold,
            config.input.double_tap_window(),
        );
        Self {
            config,
            input,
            screen: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.screen.is_some()
    }

    pub fn screen_kind(&self) -> Option<ScreenKind> {
        self.screen.as_ref().map(|s| match s {
            Screen::Title(_) => ScreenKind::Title,
            Screen::Level(_) => ScreenKind::Level,
        })
    }

    pub fn title(&self) -> Option<&TitleScreen> {
        match &self.screen {
            Some(Screen::Title(t)) => Some(t),
            _ => None,
        }
    }

    pub fn level(&self) -> Option<&LevelScreen> {
        match &self.screen {
            Some(Screen::Level(l)) => Some(l),
            _ => None,
        }
    }

    pub fn input(&self) -> &InputAggregator {
        &self.input
    }

    /// Loads the font and title art and shows the title screen, ready for input.
    ///
    /// Calling this while already running does nothing.
    pub async fn start<H: AssetSource + Surface>(&mut self, host: &mut H) -> GameResult<()> {
        if self.is_running() {
            tracing::debug!("start called while running, ignoring");
            return Ok(());
        }

        host.load_font(&self.config.assets.font).await?;
        let title = TitleScreen::load(host, &self.config).await?;

        self.screen = Some(Screen::Title(title));
        tracing::info!("title screen ready");
        Ok(())
    }

    /// Tears everything down. Safe to call at any time, including twice.
    pub fn stop(&mut self) {
        if self.screen.take().is_some() {
            tracing::info!("runtime stopped");
        }
        self.input.unsubscribe();
    }

    /// Loads the level and switches to it.
    ///
    /// On failure the current screen stays up and the error is returned.
    pub async fn enter_level<A: AssetSource>(&mut self, assets: &mut A) -> GameResult<()> {
        if !self.is_running() {
            return Ok(());
        }

        let level = LevelAssets::load(assets, &self.config)
            .await
            .and_then(|loaded| LevelScreen::new(loaded, &self.config))
            .inspect_err(|err| tracing::warn!(%err, "level failed to load"))?;

        self.input.reset();
        self.input.subscribe();
        self.screen = Some(Screen::Level(Box::new(level)));
        tracing::info!("entered level");
        Ok(())
    }

    pub fn handle_event(&mut self, event: InputEvent, now: Duration) {
        match &mut self.screen {
            Some(Screen::Title(title)) => match event {
                InputEvent::PointerMove(pos) => title.pointer_moved(pos),
                InputEvent::PointerTap(pos) => title.pointer_tapped(pos),
                _ => {}
            },
            Some(Screen::Level(_)) => self.input.handle(&event, now),
            None => {}
        }
    }

    /// Runs one frame and draws it. `dt` is in 60 Hz frames.
    pub fn tick<S: Surface>(&mut self, surface: &mut S, dt: f32) -> Option<Transition> {
        let screen_size: Vec2 = surface.screen_size();

        match &mut self.screen {
            Some(Screen::Title(title)) => {
                title.layout(&*surface);
                title.render(surface);
                title.take_start_request().then_some(Transition::EnterLevel)
            }
            Some(Screen::Level(level)) => {
                for action in self.input.drain_actions() {
                    level.handle_action(action);
                }
                level.update(self.input.state(), screen_size, dt);
                level.render(surface);
                None
            }
            None => None,
        }
    }
}
