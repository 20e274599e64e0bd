use ratatui::Frame;

use crate::{
    app::{App, AppState},
    ui::{palette::Palette, render_rules},
};

/// A UI Screen boundary: responsible for rendering one app state
pub trait Screen {
    fn render(&self, app: &App, f: &mut Frame);
}

/// Main game screen - renders the board, field, timer and hint toggle
pub struct GameScreen;

impl Screen for GameScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        f.render_widget(app, f.area());
    }
}

pub struct RulesScreen;

impl Screen for RulesScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        let palette = Palette::for_theme(app.settings.theme);
        let area = f.area();
        render_rules(&palette, area, f.buffer_mut());
    }
}

/// Helper to construct the appropriate screen for the current state
pub fn current_screen(state: &AppState) -> Box<dyn Screen> {
    match state {
        AppState::Game => Box::new(GameScreen),
        AppState::Rules => Box::new(RulesScreen),
    }
}
