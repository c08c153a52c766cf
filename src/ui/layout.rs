//! Layout components (header navigation, footer)

use crate::state::{View, FOOTER_HEIGHT, HEADER_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const BRAND: &str = "starter-tui";

/// Gap between navigation items
const NAV_GAP: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub header: Rect,
    pub content: Rect,
    pub footer: Rect,
}

/// Split the screen into header, content and footer
pub fn page_layout(area: Rect) -> PageLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    PageLayout {
        header: chunks[0],
        content: chunks[1],
        footer: chunks[2],
    }
}

fn nav_label(view: View) -> String {
    format!(" {} {} ", view.shortcut(), view.label())
}

/// Clickable cell ranges of the navigation items inside `header`
pub fn nav_items(header: Rect) -> Vec<(View, Rect)> {
    // border + space + brand + separator
    let mut x = header.x + 1 + 1 + BRAND.len() as u16 + 3;
    let y = header.y + 1;
    let right = header.x + header.width.saturating_sub(1);

    let mut items = Vec::with_capacity(View::ALL.len());
    for view in View::ALL {
        let width = nav_label(view).chars().count() as u16;
        if x + width > right {
            break;
        }
        items.push((view, Rect::new(x, y, width, 1)));
        x += width + NAV_GAP;
    }
    items
}

/// Navigation item under a clicked cell
pub fn nav_item_at(header: Rect, column: u16, row: u16) -> Option<View> {
    nav_items(header)
        .into_iter()
        .find(|(_, rect)| crate::state::rect_contains(*rect, column, row))
        .map(|(view, _)| view)
}

/// Draw the header with the active page marked
pub fn draw_header(frame: &mut Frame, area: Rect, current: View) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(block, area);
    if area.height < HEADER_HEIGHT {
        return;
    }

    let brand = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(
            BRAND,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(
        brand,
        Rect::new(
            area.x + 1,
            area.y + 1,
            area.width.saturating_sub(2).min(BRAND.len() as u16 + 4),
            1,
        ),
    );

    for (view, rect) in nav_items(area) {
        let style = if view == current {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        frame.render_widget(Paragraph::new(Span::styled(nav_label(view), style)), rect);
    }
}

/// Draw the footer: copyright on the left, key hints on the right
pub fn draw_footer(frame: &mut Frame, area: Rect, year: i32, hints: &str) {
    let copyright = format!(" © {year} {BRAND}. All rights reserved. ");
    let footer = Paragraph::new(Line::from(Span::styled(
        copyright,
        Style::default().fg(Color::Gray),
    )))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(footer, area);

    let hint_width = (hints.chars().count() as u16 + 1).min(area.width);
    let hint_area = Rect {
        x: area.x + area.width.saturating_sub(hint_width),
        width: hint_width,
        ..area
    };
    frame.render_widget(
        Paragraph::new(format!("{hints} "))
            .style(Style::default().bg(Color::DarkGray).fg(Color::White)),
        hint_area,
    );
}
