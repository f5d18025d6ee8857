use std::time::Instant;

use ratatui::Frame;

use crate::{
    app::{App, AppState},
    generator::RandomSource,
    ui::info_panel::InfoPanel,
};

/// A UI Screen boundary: responsible for rendering one view of the app
pub trait Screen<S: RandomSource> {
    fn render(&self, app: &App<S>, f: &mut Frame);
}

/// Game screen - renders the grid, order and score using the App widget
pub struct GameScreen;

impl<S: RandomSource> Screen<S> for GameScreen {
    fn render(&self, app: &App<S>, f: &mut Frame) {
        f.render_widget(app, f.area());
    }
}

/// 3PL explainer screen, replaying its entrance animation from when it was opened
pub struct InfoScreen;

impl<S: RandomSource> Screen<S> for InfoScreen {
    fn render(&self, app: &App<S>, f: &mut Frame) {
        let panel = InfoPanel {
            elapsed: app.info_elapsed(Instant::now()),
            ascii: app.settings.ascii_icons,
        };
        f.render_widget(panel, f.area());
    }
}

/// Helper to construct the appropriate screen for the current state
pub fn current_screen<S: RandomSource + 'static>(state: &AppState) -> Box<dyn Screen<S>> {
    match state {
        AppState::Game => Box::new(GameScreen),
        AppState::Info => Box::new(InfoScreen),
    }
}
