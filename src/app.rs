use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{info, warn};

use crate::board::{Board, Direction};
use crate::config::{ConfigStore, RuntimeSettings};
use crate::game::Game;
use crate::notice::{FollowUp, Notices};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Game,
    Rules,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct App {
    pub settings: RuntimeSettings,
    pub game: Game,
    pub board: Board,
    pub notices: Notices,
    pub state: AppState,
    config_store: Box<dyn ConfigStore>,
}

impl App {
    pub fn new(settings: RuntimeSettings, config_store: Box<dyn ConfigStore>) -> Self {
        Self {
            game: Game::new(settings.round_secs, settings.hints),
            board: Board::default(),
            notices: Notices::default(),
            state: AppState::Game,
            settings,
            config_store,
        }
    }

    /// Drops all game state and starts over from the current settings
    pub fn reload(&mut self) {
        self.game = Game::new(self.settings.round_secs, self.settings.hints);
        self.board = Board::default();
        self.notices = Notices::default();
        self.state = AppState::Game;
        info!("game reloaded");
    }

    /// Wall-clock time passing. The round clock is frozen while a notice is up.
    pub fn on_elapsed(&mut self, elapsed: Duration) {
        if self.notices.is_open() {
            return;
        }
        if let Some(notice) = self.game.advance(elapsed) {
            self.notices.push(notice);
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Control {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Control::Quit;
        }

        if self.notices.is_open() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.dismiss_notice();
            }
            return Control::Continue;
        }

        match self.state {
            AppState::Rules => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::F(1)) {
                    self.state = AppState::Game;
                }
                Control::Continue
            }
            AppState::Game => self.on_game_key(key),
        }
    }

    fn on_game_key(&mut self, key: KeyEvent) -> Control {
        match key.code {
            KeyCode::Esc => return Control::Quit,
            KeyCode::Backspace => self.game.delete_letter(),
            KeyCode::Up => self.board.move_cursor(Direction::Up),
            KeyCode::Down => self.board.move_cursor(Direction::Down),
            KeyCode::Left => self.board.move_cursor(Direction::Left),
            KeyCode::Right => self.board.move_cursor(Direction::Right),
            KeyCode::Enter => {
                let letter = self.board.selected().to_string();
                self.game.add_letter(&letter);
            }
            KeyCode::F(1) => self.state = AppState::Rules,
            KeyCode::F(2) => {
                let notice = self.game.check_word();
                self.notices.push(notice);
            }
            KeyCode::F(3) => self.game.toggle_hints(),
            KeyCode::F(4) => self.switch_theme(),
            KeyCode::F(5) => {
                self.game.start_game().ok();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.game.type_into_field(c)
            }
            _ => {}
        }
        Control::Continue
    }

    fn dismiss_notice(&mut self) {
        if let Some(FollowUp::Reload) = self.notices.dismiss() {
            self.reload();
        }
    }

    fn switch_theme(&mut self) {
        self.settings.theme = self.settings.theme.toggled();
        info!(theme = %self.settings.theme, "theme switched");

        let mut cfg = self.config_store.load();
        cfg.theme = self.settings.theme;
        if let Err(err) = self.config_store.save(&cfg) {
            warn!(%err, "could not save config");
        }
    }
}
