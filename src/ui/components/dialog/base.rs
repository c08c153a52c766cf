//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

/// Blank columns inside the border on each side
const SIDE_PADDING: u16 = 2;

/// Horizontal cells taken by borders and padding
const CHROME: u16 = 2 + 2 * SIDE_PADDING;

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    pub accent: Color,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Hint text shown at the bottom
    pub hint: Option<Vec<Span<'a>>>,
    pub max_width: u16,
}

impl DialogConfig<'_> {
    fn wrapped(&self) -> Vec<String> {
        wrap_text(self.message, self.max_width.saturating_sub(CHROME) as usize)
    }

    fn hint_width(&self) -> usize {
        self.hint
            .as_ref()
            .map_or(0, |hint| hint.iter().map(Span::width).sum())
    }

    /// Centered rectangle the dialog occupies within `area`
    pub fn area(&self, area: Rect) -> Rect {
        let lines = self.wrapped();
        let content_width = lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
            .max(self.title.chars().count())
            .max(self.hint_width()) as u16;
        let width = (content_width + CHROME)
            .min(self.max_width)
            .min(area.width);

        // title + blank + message lines + (blank + hint) + borders
        let hint_lines = if self.hint.is_some() { 2 } else { 0 };
        let height = (2 + lines.len() as u16 + hint_lines + 2)
            .max(5)
            .min(area.height);

        Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        }
    }
}

/// Render a centered dialog overlay; returns the area it covers
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) -> Rect {
    let dialog_area = config.area(frame.area());
    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(config.wrapped().into_iter().map(Line::from));
    if let Some(hint) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(hint));
    }

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.accent))
                .padding(Padding::horizontal(SIDE_PADDING)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
    dialog_area
}

/// Greedy word wrap; words longer than `max_width` get a line of their own
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = current.chars().count() + word.chars().count() + 1;
            if !current.is_empty() && needed > max_width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::{buffer_text, render};

    fn config(message: &str) -> DialogConfig<'_> {
        DialogConfig {
            title: "Error",
            accent: Color::Red,
            message,
            hint: None,
            max_width: 20,
        }
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_area_is_centered_and_bounded() {
        let screen = Rect::new(0, 0, 80, 24);
        let area = config("short").area(screen);
        assert_eq!(area.width, 11);
        assert_eq!(area.height, 5);
        assert_eq!(area.x, (80 - 11) / 2);
        assert_eq!(area.y, (24 - 5) / 2);

        let long = config("a long message that needs several lines to fit").area(screen);
        assert_eq!(long.width, 20);
        assert!(long.height > 5);
    }

    #[test]
    fn test_hint_widens_dialog() {
        let screen = Rect::new(0, 0, 80, 24);
        let mut with_hint = config("ok");
        with_hint.max_width = 60;
        with_hint.hint = Some(vec![Span::raw("Press Enter to dismiss")]);
        assert_eq!(with_hint.area(screen).width, 22 + CHROME);
    }

    #[test]
    fn test_text_is_padded_from_border() {
        let mut dialog = config("short");
        dialog.hint = Some(vec![Span::raw("Esc closes")]);
        let buffer = render(40, 12, |frame| {
            render_dialog(frame, dialog);
        });
        let text = buffer_text(&buffer);
        assert!(text.contains("│  short"));
        assert!(text.contains("│  Esc closes  │"));
    }
}
