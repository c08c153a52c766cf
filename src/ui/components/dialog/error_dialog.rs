//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

fn key_hint(key: &str) -> Span<'_> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

fn error_config(message: &str) -> DialogConfig<'_> {
    DialogConfig {
        title: "Error",
        accent: Color::Red,
        message,
        hint: Some(vec![
            Span::raw("Press "),
            key_hint("Enter"),
            Span::raw(" or "),
            key_hint("Esc"),
            Span::raw(" to dismiss"),
        ]),
        max_width: 60,
    }
}

/// Area the error dialog covers on a screen of `screen` size
pub fn error_dialog_area(screen: Rect, message: &str) -> Rect {
    error_config(message).area(screen)
}

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, message: &str) -> Rect {
    render_dialog(frame, error_config(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::{buffer_text, render};

    #[test]
    fn test_render_matches_computed_area() {
        let message = "The request timed out.";
        let mut drawn = Rect::default();
        let buffer = render(80, 24, |frame| {
            drawn = render_error_dialog(frame, message);
        });
        assert_eq!(drawn, error_dialog_area(Rect::new(0, 0, 80, 24), message));
        let text = buffer_text(&buffer);
        assert!(text.contains("The request timed out."));
        assert!(text.contains("to dismiss"));
    }
}
