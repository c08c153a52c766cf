//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Bordered button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Spinner glyph shown while a button is loading
const LOADING_GLYPH: &str = "◌";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
    Ghost,
    Destructive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    /// Horizontal padding on each side of the label
    fn padding(self) -> u16 {
        match self {
            ButtonSize::Sm => 1,
            ButtonSize::Md => 2,
            ButtonSize::Lg => 4,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ButtonProps<'a> {
    pub label: &'a str,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub full_width: bool,
    pub loading: bool,
    pub disabled: bool,
    pub focused: bool,
}

impl<'a> ButtonProps<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            ..Default::default()
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Loading buttons are disabled too
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.loading
    }

    fn bordered(&self) -> bool {
        self.size != ButtonSize::Sm && self.variant != ButtonVariant::Ghost
    }

    pub fn content(&self) -> String {
        if self.loading {
            format!("{LOADING_GLYPH} {}", self.label)
        } else {
            self.label.to_string()
        }
    }

    pub fn height(&self) -> u16 {
        match self.size {
            ButtonSize::Sm => 1,
            _ => BUTTON_HEIGHT,
        }
    }

    /// Natural width, or all of `available` when full width
    pub fn width(&self, available: u16) -> u16 {
        if self.full_width {
            return available;
        }
        let border = if self.bordered() { 2 } else { 0 };
        let natural = Span::raw(self.content()).width() as u16 + self.size.padding() * 2 + border;
        natural.min(available)
    }

    fn styles(&self) -> (Style, Style) {
        if !self.is_interactive() {
            let muted = Style::default().fg(Color::DarkGray);
            return (muted, muted);
        }
        let (text, border) = match self.variant {
            ButtonVariant::Default => (
                Style::default().fg(Color::Black).bg(Color::Cyan),
                Style::default().fg(Color::Cyan).bg(Color::Cyan),
            ),
            ButtonVariant::Outline => (
                Style::default().fg(Color::Cyan),
                Style::default().fg(Color::Cyan),
            ),
            ButtonVariant::Ghost => (Style::default().fg(Color::Gray), Style::default()),
            ButtonVariant::Destructive => (
                Style::default().fg(Color::White).bg(Color::Red),
                Style::default().fg(Color::Red).bg(Color::Red),
            ),
        };
        if self.focused {
            (
                text.add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                border.fg(Color::White),
            )
        } else {
            (text, border)
        }
    }
}

/// Render a button at the top-left of `area`; returns the cells it occupies
pub fn render_button(frame: &mut Frame, area: Rect, props: &ButtonProps) -> Rect {
    let button_area = Rect {
        x: area.x,
        y: area.y,
        width: props.width(area.width),
        height: props.height().min(area.height),
    };
    let (text_style, border_style) = props.styles();

    let paragraph = Paragraph::new(props.content())
        .style(text_style)
        .alignment(Alignment::Center);
    let paragraph = if props.bordered() {
        paragraph.block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        )
    } else {
        paragraph
    };

    frame.render_widget(paragraph, button_area);
    button_area
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::{buffer_text, render};

    #[test]
    fn test_widths_follow_size() {
        assert_eq!(ButtonProps::new("Go").size(ButtonSize::Sm).width(80), 4);
        assert_eq!(ButtonProps::new("Go").width(80), 8);
        assert_eq!(ButtonProps::new("Go").size(ButtonSize::Lg).width(80), 12);
        assert_eq!(ButtonProps::new("Go").full_width(true).width(30), 30);
    }

    #[test]
    fn test_ghost_has_no_border() {
        let ghost = ButtonProps::new("Go").variant(ButtonVariant::Ghost);
        assert_eq!(ghost.width(80), 6);
    }

    #[test]
    fn test_loading_is_not_interactive() {
        let props = ButtonProps::new("Save").loading(true);
        assert!(!props.is_interactive());
        assert_eq!(props.content(), "◌ Save");
        assert!(!ButtonProps::new("Save").disabled(true).is_interactive());
    }

    #[test]
    fn test_render_returns_occupied_area() {
        let mut drawn = Rect::default();
        let buffer = render(20, 3, |frame| {
            drawn = render_button(frame, frame.area(), &ButtonProps::new("Save"));
        });
        assert_eq!(drawn, Rect::new(0, 0, 10, 3));
        assert!(buffer_text(&buffer).contains("Save"));
    }
}
