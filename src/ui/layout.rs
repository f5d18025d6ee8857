use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use crate::generator::{GRID_COLUMNS, GRID_SIZE};

pub const HORIZONTAL_MARGIN: u16 = 2;
pub const VERTICAL_MARGIN: u16 = 1;
pub const CELL_GAP: u16 = 1;

/// Regions of the game screen, shared by rendering and mouse hit testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLayout {
    pub title: Rect,
    pub header: Rect,
    pub order: Rect,
    pub grid: Rect,
    pub summary: Rect,
    pub help: Rect,
}

pub fn game_layout(area: Rect) -> GameLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(3), // score / timer
            Constraint::Length(3), // order or start prompt
            Constraint::Min(4),    // grid
            Constraint::Length(4), // game over
            Constraint::Length(1), // help
        ])
        .split(area);

    GameLayout {
        title: chunks[0],
        header: chunks[1],
        order: chunks[2],
        grid: chunks[3],
        summary: chunks[4],
        help: chunks[5],
    }
}

/// Screen rectangles of the 16 grid cells, row by row
pub fn cell_rects(area: Rect) -> Vec<Rect> {
    let grid = game_layout(area).grid;
    let rows = GRID_SIZE / GRID_COLUMNS;

    Layout::default()
        .direction(Direction::Vertical)
        .spacing(CELL_GAP)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(grid)
        .iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .spacing(CELL_GAP)
                .constraints(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
                .split(*row)
                .to_vec()
        })
        .collect()
}

/// Grid cell under a terminal position, if any
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<usize> {
    let point = Position::new(column, row);
    cell_rects(area)
        .iter()
        .position(|rect| !rect.is_empty() && rect.contains(point))
}
