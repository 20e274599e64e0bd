pub const ROWS: usize = 5;
pub const COLS: usize = 6;

pub static LETTERS: [[char; COLS]; ROWS] = [
    ['А', 'Б', 'В', 'Г', 'Д', 'Е'],
    ['Ж', 'З', 'И', 'Й', 'К', 'Л'],
    ['М', 'Н', 'О', 'П', 'Р', 'С'],
    ['Т', 'У', 'Ф', 'Х', 'Ц', 'Ч'],
    ['Ш', 'Щ', 'Ы', 'Э', 'Ю', 'Я'],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Letter grid with a selection cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    row: usize,
    col: usize,
}

impl Board {
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.row = self.row.saturating_sub(1),
            Direction::Down => self.row = (self.row + 1).min(ROWS - 1),
            Direction::Left => self.col = self.col.saturating_sub(1),
            Direction::Right => self.col = (self.col + 1).min(COLS - 1),
        }
    }

    pub fn selected(&self) -> char {
        LETTERS[self.row][self.col]
    }

    pub fn rows(&self) -> impl Iterator<Item = &'static [char; COLS]> {
        LETTERS.iter()
    }
}
