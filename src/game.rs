use std::time::Duration;

use tracing::{debug, info, warn};

use crate::countdown::{Countdown, TickOutcome, TimerState};
use crate::elements::Elements;
use crate::error::GameError;
use crate::hints;
use crate::notice::{FollowUp, Notice};

pub const CHECK_PREFIX: &str = "Проверка слова: ";
pub const TIME_UP: &str = "Время вышло!";

/// Game UI controller: owns the current word, the round clock and the
/// screen elements they are reflected into.
#[derive(Debug, Clone)]
pub struct Game {
    current_word: String,
    countdown: Countdown,
    elements: Elements,
}

impl Game {
    pub fn new(round_secs: u32, hints_enabled: bool) -> Self {
        let countdown = Countdown::new(round_secs);
        let mut game = Self {
            current_word: String::new(),
            elements: Elements::new(countdown.round_secs()),
            countdown,
        };
        if hints_enabled {
            game.set_hints(true);
        }
        game
    }

    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    pub fn elements(&self) -> &Elements {
        &self.elements
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn add_letter(&mut self, letter: &str) {
        self.current_word.push_str(letter);
        self.elements.input_field.set_value(&self.current_word);
        debug!(word = %self.current_word, "letter added");
    }

    /// Direct edit of the input field, followed by a resync of the word
    pub fn type_into_field(&mut self, c: char) {
        self.elements.input_field.type_char(c);
        self.update_word();
    }

    pub fn update_word(&mut self) {
        self.current_word.clear();
        self.current_word
            .push_str(self.elements.input_field.value());
        debug!(word = %self.current_word, "word synced from field");
    }

    pub fn delete_letter(&mut self) {
        self.current_word.pop();
        self.elements.input_field.set_value(&self.current_word);
        debug!(word = %self.current_word, "letter deleted");
    }

    pub fn check_word(&self) -> Notice {
        Notice::new(format!("{}{}", CHECK_PREFIX, self.current_word))
    }

    pub fn start_game(&mut self) -> Result<(), GameError> {
        match self.countdown.start() {
            Ok(time_left) => {
                self.elements.start_btn_visible = false;
                info!(time_left, "round started");
                Ok(())
            }
            Err(err) => {
                warn!(state = ?self.countdown.state(), "start ignored: {}", err);
                Err(err)
            }
        }
    }

    /// Feeds elapsed wall-clock time into the round clock. Returns the expiry
    /// notice on the tick that ends the round.
    pub fn advance(&mut self, elapsed: Duration) -> Option<Notice> {
        let mut expired = None;
        for outcome in self.countdown.advance(elapsed) {
            self.elements.timer = self.countdown.time_left().to_string();
            if outcome == TickOutcome::Expired {
                info!("round expired");
                expired = Some(Notice::new(TIME_UP).then(FollowUp::Reload));
            }
        }
        expired
    }

    pub fn set_hints(&mut self, checked: bool) {
        self.elements.tips_toggle = checked;
        self.elements.tips_status = hints::status_text(checked).to_string();
    }

    pub fn toggle_hints(&mut self) {
        let checked = !self.elements.tips_toggle;
        self.set_hints(checked);
    }

    pub fn timer_state(&self) -> TimerState {
        self.countdown.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn assert_synced(game: &Game) {
        assert_eq!(game.current_word(), game.elements().input_field.value());
    }

    #[test]
    fn test_add_letter_concatenates_in_order() {
        let mut game = Game::new(60, false);
        for letter in ["к", "о", "т"] {
            game.add_letter(letter);
            assert_synced(&game);
        }
        assert_eq!(game.current_word(), "кот");
    }

    #[test]
    fn test_add_letter_accepts_any_string() {
        let mut game = Game::new(60, false);
        game.add_letter("");
        assert_eq!(game.current_word(), "");
        game.add_letter("ab");
        game.add_letter("c");
        assert_eq!(game.current_word(), "abc");
        assert_synced(&game);
    }

    #[test]
    fn test_delete_on_empty_word() {
        let mut game = Game::new(60, false);
        game.delete_letter();
        assert_eq!(game.current_word(), "");
        assert_synced(&game);
    }

    #[test]
    fn test_delete_after_two_letters() {
        let mut game = Game::new(60, false);
        game.add_letter("a");
        game.add_letter("b");
        game.delete_letter();
        assert_eq!(game.current_word(), "a");
        assert_synced(&game);
    }

    #[test]
    fn test_delete_removes_whole_cyrillic_char() {
        let mut game = Game::new(60, false);
        game.add_letter("ЖЁ");
        game.delete_letter();
        assert_eq!(game.current_word(), "Ж");
    }

    #[test]
    fn test_update_word_reads_field() {
        let mut game = Game::new(60, false);
        game.add_letter("д");
        game.type_into_field('о');
        game.type_into_field('м');
        assert_eq!(game.current_word(), "дом");
        assert_synced(&game);
    }

    #[test]
    fn test_check_word_does_not_mutate() {
        let mut game = Game::new(60, false);
        game.add_letter("слово");
        let before = game.current_word().to_string();

        let notice = game.check_word();
        assert_eq!(notice.message, "Проверка слова: слово");
        assert_eq!(notice.follow_up, None);
        assert_eq!(game.current_word(), before);
        assert_synced(&game);
    }

    #[test]
    fn test_check_empty_word() {
        let game = Game::new(60, false);
        assert_eq!(game.check_word().message, "Проверка слова: ");
    }

    #[test]
    fn test_start_hides_button() {
        let mut game = Game::new(60, false);
        assert!(game.elements().start_btn_visible);
        game.start_game().unwrap();
        assert!(!game.elements().start_btn_visible);
        assert_eq!(game.timer_state(), TimerState::Running);
    }

    #[test]
    fn test_double_start_rejected() {
        let mut game = Game::new(60, false);
        game.start_game().unwrap();
        game.advance(Duration::from_secs(1));
        assert_matches!(game.start_game(), Err(GameError::AlreadyStarted));
        assert_eq!(game.elements().timer, "59");
    }

    #[test]
    fn test_timer_display_after_ticks() {
        let mut game = Game::new(60, false);
        game.start_game().unwrap();

        assert!(game.advance(Duration::from_secs(1)).is_none());
        assert_eq!(game.elements().timer, "59");

        let mut expiries = 0;
        for _ in 1..60 {
            if game.advance(Duration::from_secs(1)).is_some() {
                expiries += 1;
            }
        }
        assert_eq!(game.elements().timer, "0");
        assert_eq!(expiries, 1);
        assert_eq!(game.timer_state(), TimerState::Expired);

        assert!(game.advance(Duration::from_secs(5)).is_none());
    }

    #[test]
    fn test_expiry_notice_reloads() {
        let mut game = Game::new(1, false);
        game.start_game().unwrap();
        let notice = game.advance(Duration::from_secs(1)).unwrap();
        assert_eq!(notice.message, "Время вышло!");
        assert_eq!(notice.follow_up, Some(FollowUp::Reload));
    }

    #[test]
    fn test_ticks_before_start_do_nothing() {
        let mut game = Game::new(60, false);
        assert!(game.advance(Duration::from_secs(90)).is_none());
        assert_eq!(game.elements().timer, "60");
    }

    #[test]
    fn test_hint_toggle_sequence() {
        let mut game = Game::new(60, false);
        assert_eq!(game.elements().tips_status, "");

        let mut seen = Vec::new();
        game.toggle_hints();
        seen.push(game.elements().tips_status.clone());
        game.toggle_hints();
        seen.push(game.elements().tips_status.clone());

        assert_eq!(seen, vec!["Подсказки включены.", "Подсказки выключены."]);
        assert!(!game.elements().tips_toggle);
    }

    #[test]
    fn test_hints_enabled_at_start() {
        let game = Game::new(60, true);
        assert!(game.elements().tips_toggle);
        assert_eq!(game.elements().tips_status, "Подсказки включены.");
    }

    #[test]
    fn test_word_ops_unaffected_by_timer() {
        let mut game = Game::new(2, false);
        game.add_letter("я");
        game.start_game().unwrap();
        game.advance(Duration::from_secs(2));
        game.add_letter("к");
        assert_eq!(game.current_word(), "як");
    }
}
