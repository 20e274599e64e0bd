use ratatui::style::{Color, Modifier, Style};

use crate::config::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub button_bg: Color,
    pub muted: Color,
    pub highlight: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                bg: Color::Rgb(0x2e, 0x2e, 0x2e),
                fg: Color::White,
                button_bg: Color::Rgb(0x3e, 0x3e, 0x3e),
                muted: Color::Gray,
                highlight: Color::Rgb(0x4a, 0x9d, 0xff),
            },
            Theme::Light => Self {
                bg: Color::Rgb(0xf0, 0xf0, 0xf0),
                fg: Color::Black,
                button_bg: Color::Rgb(0xe0, 0xe0, 0xe0),
                muted: Color::DarkGray,
                highlight: Color::Rgb(0x00, 0x78, 0xd7),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().bg(self.bg).fg(self.fg)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.fg)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn button(&self) -> Style {
        Style::default().bg(self.button_bg).fg(self.fg)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .bg(self.highlight)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::for_theme(Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_differ() {
        assert_ne!(
            Palette::for_theme(Theme::Dark),
            Palette::for_theme(Theme::Light)
        );
        assert_eq!(Palette::default(), Palette::for_theme(Theme::Dark));
    }
}
