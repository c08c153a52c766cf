//! Card component: bordered panel with header, content and footer

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, Default)]
pub struct CardProps<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    /// Label shown at the right of the header
    pub action: Option<&'a str>,
    pub footer: Option<Line<'a>>,
    pub hoverable: bool,
    pub hovered: bool,
}

impl<'a> CardProps<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            ..Default::default()
        }
    }

    pub fn description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn action(mut self, action: &'a str) -> Self {
        self.action = Some(action);
        self
    }

    pub fn footer(mut self, footer: Line<'a>) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn hoverable(mut self, hovered: bool) -> Self {
        self.hoverable = true;
        self.hovered = hovered;
        self
    }

    /// Hover only highlights cards that opt in
    pub fn is_highlighted(&self) -> bool {
        self.hoverable && self.hovered
    }
}

/// Render a card; content lines wrap inside the border
pub fn render_card(frame: &mut Frame, area: Rect, props: &CardProps, content: Vec<Line>) {
    let border_style = if props.is_highlighted() {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", props.title),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    if let Some(action) = props.action {
        block = block.title(
            Line::from(Span::styled(
                format!("[ {action} ]"),
                Style::default().fg(Color::Cyan),
            ))
            .right_aligned(),
        );
    }
    if let Some(footer) = &props.footer {
        block = block.title_bottom(footer.clone().right_aligned());
    }

    let mut lines = Vec::with_capacity(content.len() + 2);
    if let Some(description) = props.description {
        lines.push(Line::from(Span::styled(
            description,
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }
    lines.extend(content);

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::{buffer_text, render};

    #[test]
    fn test_hover_requires_hoverable() {
        let mut plain = CardProps::new("Plain");
        plain.hovered = true;
        assert!(!plain.is_highlighted());
        assert!(CardProps::new("Hover").hoverable(true).is_highlighted());
        assert!(!CardProps::new("Hover").hoverable(false).is_highlighted());
    }

    #[test]
    fn test_renders_all_parts() {
        let props = CardProps::new("Action card")
            .description("Has a header action")
            .action("Open")
            .footer(Line::from("Cancel  Save"));
        let buffer = render(40, 7, |frame| {
            render_card(frame, frame.area(), &props, vec![Line::from("Body text")]);
        });
        let text = buffer_text(&buffer);
        assert!(text.contains("Action card"));
        assert!(text.contains("[ Open ]"));
        assert!(text.contains("Has a header action"));
        assert!(text.contains("Body text"));
        assert!(text.contains("Cancel  Save"));
    }
}
