pub mod palette;
pub mod screen;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{app::App, board::COLS, notice::Notice};
use palette::Palette;

const HORIZONTAL_MARGIN: u16 = 2;
const VERTICAL_MARGIN: u16 = 1;
const CELL_WIDTH: u16 = 4;

pub const RULES: &str = "1. Выберите буквы из сетки.
2. Составьте слова, используя выбранные буквы.
3. Если слово правильно, оно засчитывается.
4. Для получения подсказок, включите переключатель.
5. Попробуйте составить как можно больше слов за ограниченное время.";

const LEGEND: &str =
    "←↑↓→ letter / (enter) add / (bksp) delete / (F2) check / (F3) hints / (F4) theme / (F5) start / (F1) rules / (esc)ape";

/// Entry point used by the terminal loop
pub fn draw(app: &App, f: &mut Frame) {
    screen::current_screen(&app.state).render(app, f);

    if let Some(notice) = app.notices.current() {
        let palette = Palette::for_theme(app.settings.theme);
        render_notice(notice, &palette, f.area(), f.buffer_mut());
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = Palette::for_theme(self.settings.theme);
        let elements = self.game.elements();
        let bold_style = Style::default().add_modifier(Modifier::BOLD);

        Block::default().style(palette.base()).render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(3), // input-field
                Constraint::Min(board_height()),
                Constraint::Length(1), // timer + start-btn
                Constraint::Length(1), // tips-toggle + tips-status
                Constraint::Length(1), // padding
                Constraint::Length(2), // legend
            ])
            .split(area);

        // input-field, scrolled so the newest letters stay in view
        let inner_width = usize::from(chunks[0].width.saturating_sub(2));
        let shown = visible_tail(elements.input_field.value(), inner_width.saturating_sub(1));
        let field = Paragraph::new(Span::styled(
            shown.to_string(),
            palette.text().patch(bold_style),
        ))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border())
                .title(" Текущее слово "),
        );
        field.render(chunks[0], buf);

        let typed = u16::try_from(shown.width()).unwrap_or(u16::MAX);
        let cursor_x = chunks[0].x.saturating_add(1).saturating_add(typed);
        if cursor_x < chunks[0].right().saturating_sub(1) {
            if let Some(cell) = buf.cell_mut((cursor_x, chunks[0].y + 1)) {
                cell.set_symbol("▏");
                cell.set_style(palette.text());
            }
        }

        render_board(self, &palette, chunks[1], buf);

        // timer + start-btn
        let mut status = vec![Span::styled(
            format!("Время: {}", elements.timer),
            palette.text().patch(bold_style),
        )];
        if elements.start_btn_visible {
            status.push(Span::raw("   "));
            status.push(Span::styled("[ Начать игру (F5) ]", palette.button()));
        }
        Paragraph::new(Line::from(status))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);

        // tips-toggle + tips-status
        let checkbox = if elements.tips_toggle { "[x]" } else { "[ ]" };
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{} Включить подсказки", checkbox), palette.text()),
            Span::raw("  "),
            Span::styled(
                elements.tips_status.clone(),
                palette.muted().add_modifier(Modifier::ITALIC),
            ),
        ]))
        .alignment(Alignment::Center)
        .render(chunks[3], buf);

        Paragraph::new(Span::styled(
            LEGEND,
            palette.muted().add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(chunks[5], buf);
    }
}

/// Longest suffix of `text` that fits in `max_width` columns
fn visible_tail(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        width += c.width().unwrap_or(0);
        if width > max_width {
            break;
        }
        start = idx;
    }
    &text[start..]
}

fn board_height() -> u16 {
    crate::board::ROWS as u16 + 2
}

fn render_board(app: &App, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let (cursor_row, cursor_col) = app.board.cursor();

    let lines: Vec<Line> = app
        .board
        .rows()
        .enumerate()
        .map(|(r, row)| {
            Line::from(
                row.iter()
                    .enumerate()
                    .map(|(c, letter)| {
                        let style = if (r, c) == (cursor_row, cursor_col) {
                            palette.highlight()
                        } else {
                            palette.button()
                        };
                        Span::styled(format!(" {} ", letter), style)
                    })
                    .flat_map(|cell| [cell, Span::raw(" ")])
                    .collect::<Vec<Span>>(),
            )
        })
        .collect();

    let width = (CELL_WIDTH * COLS as u16 + 2).min(area.width);
    let x = area.x + (area.width - width) / 2;
    let boxed = Rect::new(x, area.y, width, board_height().min(area.height));

    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border()),
        )
        .render(boxed, buf);
}

pub fn render_rules(palette: &Palette, area: Rect, buf: &mut Buffer) {
    Block::default().style(palette.base()).render(area, buf);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    Paragraph::new(RULES)
        .style(palette.text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border())
                .title(" Правила игры "),
        )
        .wrap(Wrap { trim: false })
        .render(chunks[0], buf);

    Paragraph::new(Span::styled(
        "(esc) back",
        palette.muted().add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center)
    .render(chunks[1], buf);
}

fn render_notice(notice: &Notice, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let width = u16::try_from(notice.message.width())
        .unwrap_or(u16::MAX)
        .saturating_add(6)
        .max(24)
        .min(area.width);
    let popup = centered(area, width, 5);

    Clear.render(popup, buf);
    Paragraph::new(vec![
        Line::from(Span::styled(
            notice.message.clone(),
            palette.text().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("(enter) OK", palette.muted())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.highlight())
            .style(palette.base()),
    )
    .render(popup, buf);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
