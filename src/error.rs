use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// `start_game` was called while a round is running or has already run out
    AlreadyStarted,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::AlreadyStarted => write!(f, "game already started"),
        }
    }
}

impl Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(GameError::AlreadyStarted.to_string(), "game already started");
    }

    #[test]
    fn test_boxes_as_std_error() {
        let boxed: Box<dyn Error> = Box::new(GameError::AlreadyStarted);
        assert!(boxed.source().is_none());
    }
}
