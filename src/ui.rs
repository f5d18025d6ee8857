pub mod info_panel;
pub mod layout;
pub mod screen;

use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

pub use layout::{cell_at, cell_rects, game_layout};

use crate::{
    app::App,
    catalog::ItemType,
    feedback::FlashKind,
    generator::{GridCell, RandomSource},
    session::{Phase, SessionState, Verdict, TARGET_SCORE},
};

const LOW_TIME_SECS: u32 = 10;
const TITLE: &str = "3PL Warehouse Pick & Pack Game";
const HINTS: [&str; 5] = [
    "arrows/hjkl move",
    "enter pick",
    "click a shelf",
    "(i) 3PL info",
    "(esc) quit",
];

pub fn item_color(item: ItemType) -> Color {
    match item {
        ItemType::Electronics => Color::Blue,
        ItemType::Clothing => Color::Magenta,
        ItemType::Food => Color::Yellow,
        ItemType::Books => Color::Rgb(147, 51, 234),
        ItemType::Toys => Color::Green,
    }
}

fn item_icon(item: ItemType, ascii: bool) -> &'static str {
    if ascii {
        item.ascii_icon()
    } else {
        item.icon()
    }
}

impl<S: RandomSource> Widget for &App<S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.session();
        let ascii = self.settings.ascii_icons;
        let layout = game_layout(area);

        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);
        let accent_style = Style::default().patch(bold_style).fg(Color::Indexed(62));

        Paragraph::new(Span::styled(TITLE, accent_style))
            .alignment(Alignment::Center)
            .render(layout.title, buf);

        render_header(state, ascii, layout.header, buf);

        if state.is_active() {
            render_order(self, layout.order, buf);
        } else {
            Paragraph::new(Span::styled(
                "Start Game  (s / enter)",
                Style::default()
                    .patch(bold_style)
                    .fg(Color::White)
                    .bg(Color::Indexed(62)),
            ))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded))
            .render(layout.order, buf);
        }

        for (cell, rect) in state.grid.iter().zip(cell_rects(area)) {
            render_cell(self, cell, rect, buf);
        }

        if let Some(verdict) = state.verdict() {
            render_summary(state.score, verdict, ascii, layout.summary, buf);
        }

        Paragraph::new(Span::styled(HINTS.iter().join(" / "), italic_style))
            .alignment(Alignment::Center)
            .render(layout.help, buf);
    }
}

fn render_header(state: &SessionState, ascii: bool, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    block.render(area, buf);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .horizontal_margin(1)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let (trophy, clock) = if ascii { ("Score:", "Time:") } else { ("🏆", "⏱") };

    Paragraph::new(Line::from(vec![
        Span::styled(format!("{trophy} "), Style::default().fg(Color::Yellow)),
        Span::styled(
            state.score.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]))
    .render(halves[0], buf);

    let time_style = if state.seconds_remaining < LOW_TIME_SECS {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    Paragraph::new(Line::from(vec![
        Span::raw(format!("{clock} ")),
        Span::styled(format!("{}s", state.seconds_remaining), time_style),
    ]))
    .alignment(Alignment::Right)
    .render(halves[1], buf);
}

fn render_order<S: RandomSource>(app: &App<S>, area: Rect, buf: &mut Buffer) {
    let Some(order) = app.session().order else {
        return;
    };
    let ascii = app.settings.ascii_icons;

    let mut spans = vec![
        Span::styled("Current Order: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!("{} ", item_icon(order.item, ascii))),
        Span::styled(
            format!("Pick {} {}", order.remaining(), order.item),
            Style::default().fg(item_color(order.item)),
        ),
    ];
    if app.feedback().showing_order_filled() {
        spans.push(Span::styled(
            "   Order filled!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ));
    }

    Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .render(area, buf);
}

fn render_cell<S: RandomSource>(app: &App<S>, cell: &GridCell, area: Rect, buf: &mut Buffer) {
    let state = app.session();
    let active = state.phase == Phase::Active;
    let ascii = app.settings.ascii_icons;

    let fg = if cell.item == ItemType::Food {
        Color::Black
    } else {
        Color::White
    };
    let mut style = Style::default().fg(fg).bg(item_color(cell.item));
    if !active {
        style = style.add_modifier(Modifier::DIM);
    }

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(style);
    if active && app.cursor == cell.index {
        block = block
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    }

    let flash = app
        .feedback()
        .current_flash()
        .filter(|f| f.cell == cell.index && state.last_picked == Some(cell.index));

    let marker = match flash.map(|f| f.kind) {
        Some(FlashKind::Success) => Some(Span::styled(
            if ascii { "OK" } else { "✔" },
            Style::default().fg(Color::LightGreen).add_modifier(Modifier::BOLD),
        )),
        Some(FlashKind::Failure) => Some(Span::styled(
            if ascii { "XX" } else { "✘" },
            Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
        )),
        None => None,
    };

    let icon_line = match marker {
        Some(span) => Line::from(span),
        None => Line::from(item_icon(cell.item, ascii)),
    };

    Paragraph::new(vec![
        icon_line,
        Line::from(Span::styled(
            cell.item.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(block)
    .render(area, buf);
}

fn render_summary(score: u32, verdict: Verdict, ascii: bool, area: Rect, buf: &mut Buffer) {
    let verdict_line = match verdict {
        Verdict::ChallengeBeaten if ascii => Line::styled(
            "Congratulations! You beat the challenge!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Verdict::ChallengeBeaten => Line::styled(
            "🎉 Congratulations! You beat the challenge! 🏆",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Verdict::TryAgain => Line::styled(
            format!("Try again to beat {TARGET_SCORE} points!"),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
    };

    Paragraph::new(vec![
        Line::styled("Game Over!", Style::default().add_modifier(Modifier::BOLD)),
        Line::from(format!("Final Score: {score}")),
        verdict_line,
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .render(area, buf);
}

/// Flattens a buffer into newline separated rows
#[cfg(test)]
pub(crate) fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .join("\n")
}
