use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use unicode_width::UnicodeWidthStr;

use crate::info::{self, ProcessStep, FOOTER, HEADING, STEPS};

const ACCENT: Color = Color::Rgb(0, 167, 225);
const BACKGROUND: Color = Color::Rgb(0, 21, 36);

/// The 3PL explainer, drawn as it looks `elapsed` after coming into view
pub struct InfoPanel {
    pub elapsed: Duration,
    pub ascii: bool,
}

/// Faded-in style for a given reveal progress
fn fade(style: Style, progress: f64) -> Style {
    if progress < 0.5 {
        style.fg(Color::DarkGray).add_modifier(Modifier::DIM)
    } else if progress < 1.0 {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    }
}

impl InfoPanel {
    fn step_lines(&self, step: &ProcessStep, progress: f64) -> Vec<Line<'static>> {
        let indent = " ".repeat(info::slide_offset(progress) as usize);
        let icon = if self.ascii {
            step.icon.ascii_glyph()
        } else {
            step.icon.glyph()
        };

        vec![
            Line::from(vec![
                Span::raw(indent.clone()),
                Span::styled(
                    format!("{icon}  {}", step.title),
                    fade(
                        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                        progress,
                    ),
                ),
            ]),
            Line::from(vec![
                Span::raw(indent),
                Span::styled(
                    format!("{}  {}", " ".repeat(icon.width()), step.description),
                    fade(Style::default().fg(Color::Gray), progress),
                ),
            ]),
        ]
    }
}

impl Widget for InfoPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" 3PL ")
            .style(Style::default().bg(BACKGROUND).fg(Color::White));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut constraints = vec![Constraint::Length(2)];
        constraints.extend(std::iter::repeat(Constraint::Length(3)).take(STEPS.len()));
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Min(0));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(2)
            .vertical_margin(1)
            .constraints(constraints)
            .split(inner);

        Paragraph::new(Span::styled(
            HEADING,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .render(chunks[0], buf);

        for (i, step) in STEPS.iter().enumerate() {
            let progress = info::step_progress(i, self.elapsed);
            if progress <= 0.0 {
                continue;
            }
            Paragraph::new(self.step_lines(step, progress)).render(chunks[i + 1], buf);
        }

        let footer_progress = info::footer_progress(self.elapsed);
        if footer_progress > 0.0 {
            Paragraph::new(Span::styled(
                FOOTER,
                fade(Style::default().fg(Color::Gray), footer_progress),
            ))
            .alignment(Alignment::Center)
            .render(chunks[STEPS.len() + 1], buf);
        }
    }
}
