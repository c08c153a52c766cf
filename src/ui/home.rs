//! Landing page

use super::components::{
    render_button, render_card, ButtonProps, ButtonSize, ButtonVariant, CardProps, BUTTON_HEIGHT,
};
use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

const HELPERS: &[&str] = &[
    "FormEngine",
    "Toggle",
    "Debounced",
    "Stored",
    "MediaQuery",
    "WindowSize",
    "ClipboardCopier",
    "ClickOutside",
];

const COMPONENTS: &[&str] = &[
    "Button (4 variants)",
    "Input (label, error)",
    "Card (header, content, footer)",
];

const STACK: &[&str] = &["ratatui", "tokio", "reqwest", "serde", "tracing"];

fn bullets(items: &[&'static str]) -> Vec<Line<'static>> {
    items.iter().map(|item| Line::from(format!("• {item}"))).collect()
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new("Starter Kit")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(title, chunks[1]);

    let subtitle = Paragraph::new("Ratatui + Tokio + Reqwest + Serde")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(subtitle, chunks[2]);

    let primary = ButtonProps::new("2 View examples").size(ButtonSize::Lg);
    let secondary = ButtonProps::new("3 Sign up")
        .size(ButtonSize::Lg)
        .variant(ButtonVariant::Outline);
    let total = primary.width(area.width) + 2 + secondary.width(area.width);
    let start = area.x + area.width.saturating_sub(total) / 2;
    let row = chunks[3];
    let first = render_button(frame, Rect { x: start, ..row }, &primary);
    let second_x = (first.right() + 2).min(row.right());
    render_button(
        frame,
        Rect {
            x: second_x,
            width: row.right() - second_x,
            ..row
        },
        &secondary,
    );

    let direction = if app.is_wide() {
        Direction::Horizontal
    } else {
        Direction::Vertical
    };
    let cards = Layout::default()
        .direction(direction)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(chunks[5]);

    render_card(
        frame,
        cards[0],
        &CardProps::new("Helpers").description("State helpers for the UI loop"),
        bullets(HELPERS),
    );
    render_card(
        frame,
        cards[1],
        &CardProps::new("UI components").description("Reusable building blocks"),
        bullets(COMPONENTS),
    );
    render_card(
        frame,
        cards[2],
        &CardProps::new("Stack").description("Crates underneath"),
        bullets(STACK),
    );
}
