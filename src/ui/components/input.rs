//! Text input and checkbox components

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by an input: bordered box plus one message line
pub const INPUT_HEIGHT: u16 = 4;

/// Rows taken by a checkbox: the box line plus one message line
pub const CHECKBOX_HEIGHT: u16 = 2;

const MASK_CHAR: char = '•';

#[derive(Debug, Clone, Default)]
pub struct InputProps<'a> {
    pub label: Option<&'a str>,
    pub value: &'a str,
    pub placeholder: Option<&'a str>,
    pub helper_text: Option<&'a str>,
    pub error: Option<&'a str>,
    pub disabled: bool,
    pub masked: bool,
    pub focused: bool,
}

impl<'a> InputProps<'a> {
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            ..Default::default()
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn placeholder(mut self, placeholder: Option<&'a str>) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn helper_text(mut self, helper_text: Option<&'a str>) -> Self {
        self.helper_text = helper_text;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Value as shown on screen
    pub fn display_value(&self) -> String {
        if self.masked {
            self.value.chars().map(|_| MASK_CHAR).collect()
        } else {
            self.value.to_string()
        }
    }

    /// Error takes the message line over helper text
    fn message(&self) -> Option<(&'a str, Style)> {
        match (self.error, self.helper_text) {
            (Some(error), _) => Some((error, Style::default().fg(Color::Red))),
            (None, Some(helper)) => Some((helper, Style::default().fg(Color::DarkGray))),
            (None, None) => None,
        }
    }

    fn border_style(&self) -> Style {
        if self.disabled {
            Style::default().fg(Color::DarkGray)
        } else if self.error.is_some() {
            Style::default().fg(Color::Red)
        } else if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        }
    }
}

/// Draw an input with its label in the border and a message line beneath
pub fn render_input(frame: &mut Frame, area: Rect, props: &InputProps) {
    let box_area = Rect {
        height: area.height.min(INPUT_HEIGHT - 1),
        ..area
    };

    let value_style = if props.disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let mut spans = Vec::new();
    let display_value = props.display_value();
    match props.placeholder {
        Some(placeholder) if display_value.is_empty() => spans.push(Span::styled(
            placeholder,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
        _ => spans.push(Span::styled(display_value, value_style)),
    }
    if props.focused && !props.disabled {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(props.border_style());
    if let Some(label) = props.label {
        block = block.title(format!(" {label} "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), box_area);

    if let Some((message, style)) = props.message() {
        if area.height >= INPUT_HEIGHT {
            let message_area = Rect {
                y: area.y + INPUT_HEIGHT - 1,
                height: 1,
                ..area
            };
            frame.render_widget(
                Paragraph::new(Span::styled(format!(" {message}"), style)),
                message_area,
            );
        }
    }
}

/// Draw a `[x] label` checkbox with an optional error beneath
pub fn render_checkbox(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    checked: bool,
    focused: bool,
    error: Option<&str>,
) {
    let mark = if checked { "[x]" } else { "[ ]" };
    let style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let line = Line::from(vec![Span::styled(format!("{mark} {label}"), style)]);
    let box_line = Rect {
        height: area.height.min(1),
        ..area
    };
    frame.render_widget(Paragraph::new(line), box_line);

    if let Some(error) = error {
        if area.height >= CHECKBOX_HEIGHT {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!(" {error}"),
                    Style::default().fg(Color::Red),
                )),
                Rect {
                    y: area.y + 1,
                    height: 1,
                    ..area
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::{buffer_text, render};

    #[test]
    fn test_masked_display() {
        let props = InputProps::new("hunter22").masked(true);
        assert_eq!(props.display_value(), "••••••••");
    }

    #[test]
    fn test_placeholder_when_empty() {
        let buffer = render(30, INPUT_HEIGHT, |frame| {
            render_input(
                frame,
                frame.area(),
                &InputProps::new("")
                    .label("Email")
                    .placeholder(Some("example@email.com")),
            );
        });
        let text = buffer_text(&buffer);
        assert!(text.contains(" Email "));
        assert!(text.contains("example@email.com"));
    }

    #[test]
    fn test_error_replaces_helper() {
        let buffer = render(40, INPUT_HEIGHT, |frame| {
            render_input(
                frame,
                frame.area(),
                &InputProps::new("x")
                    .helper_text(Some("At least 8 characters"))
                    .error(Some("Too short")),
            );
        });
        let text = buffer_text(&buffer);
        assert!(text.contains("Too short"));
        assert!(!text.contains("At least 8 characters"));
    }

    #[test]
    fn test_checkbox_renders_state() {
        let buffer = render(30, CHECKBOX_HEIGHT, |frame| {
            render_checkbox(frame, frame.area(), "Accept", true, false, Some("Required"));
        });
        let text = buffer_text(&buffer);
        assert!(text.contains("[x] Accept"));
        assert!(text.contains("Required"));
    }
}
