//! Sign-up page driven by the form engine

use super::components::{
    render_button, render_checkbox, render_input, ButtonProps, ButtonVariant, InputProps,
    BUTTON_HEIGHT, CHECKBOX_HEIGHT, INPUT_HEIGHT,
};
use crate::app::App;
use crate::state::{AsyncStatus, FieldKind, FormField, SignUpButton, SignUpForm};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const FORM_WIDTH: u16 = 60;

/// Screen regions of the sign-up form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpAreas {
    pub title: Rect,
    pub fields: Vec<Rect>,
    pub reset: Rect,
    pub submit: Rect,
    pub status: Rect,
}

impl SignUpAreas {
    /// Field index or button under a clicked cell
    pub fn hit(&self, column: u16, row: u16) -> Option<SignUpTarget> {
        use crate::state::rect_contains;
        if rect_contains(self.reset, column, row) {
            return Some(SignUpTarget::Button(SignUpButton::Reset));
        }
        if rect_contains(self.submit, column, row) {
            return Some(SignUpTarget::Button(SignUpButton::Submit));
        }
        self.fields
            .iter()
            .position(|area| rect_contains(*area, column, row))
            .map(SignUpTarget::Field)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpTarget {
    Field(usize),
    Button(SignUpButton),
}

fn field_height(field: &FormField) -> u16 {
    match field.kind {
        FieldKind::Checkbox => CHECKBOX_HEIGHT,
        FieldKind::Text | FieldKind::Secret => INPUT_HEIGHT,
    }
}

fn reset_props(focused: bool, loading: bool) -> ButtonProps<'static> {
    ButtonProps::new("Reset")
        .variant(ButtonVariant::Outline)
        .disabled(loading)
        .focused(focused)
}

fn submit_props(focused: bool, loading: bool) -> ButtonProps<'static> {
    let label = if loading { "Creating..." } else { "Create account" };
    ButtonProps::new(label).loading(loading).focused(focused)
}

/// Compute where each part of the form goes inside `content`
pub fn form_areas(content: Rect, form: &SignUpForm, loading: bool) -> SignUpAreas {
    let width = content.width.min(FORM_WIDTH);
    let column = Rect {
        x: content.x + (content.width - width) / 2,
        width,
        ..content
    };

    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(
        form.fields()
            .iter()
            .map(|field| Constraint::Length(field_height(field))),
    );
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(column);

    let field_count = form.fields().len();
    let buttons = chunks[field_count + 1];
    let reset_width = reset_props(false, loading).width(buttons.width);
    let reset = Rect {
        width: reset_width,
        height: BUTTON_HEIGHT.min(buttons.height),
        ..buttons
    };
    let submit_x = (reset.right() + 2).min(buttons.right());
    let submit = Rect {
        x: submit_x,
        width: submit_props(false, loading).width(buttons.right() - submit_x),
        ..reset
    };

    SignUpAreas {
        title: chunks[0],
        fields: chunks[1..=field_count].to_vec(),
        reset,
        submit,
        status: chunks[field_count + 2],
    }
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.sign_up;
    let engine = &form.engine;
    let loading = app.sign_up_status.is_loading();
    let areas = form_areas(area, form, loading);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                "Create an account",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Tab/Shift+Tab: move  Space: tick  Enter: submit",
                Style::default().fg(Color::DarkGray),
            )),
        ]),
        areas.title,
    );

    for (index, (field, slot)) in form.fields().iter().zip(areas.fields.iter()).enumerate() {
        let focused = form.active_field_index == index;
        let error = engine.error(field.name);
        match field.kind {
            FieldKind::Checkbox => render_checkbox(
                frame,
                *slot,
                field.label,
                engine.values().is_checked(field.name),
                focused,
                error,
            ),
            FieldKind::Text | FieldKind::Secret => render_input(
                frame,
                *slot,
                &InputProps::new(engine.values().text(field.name))
                    .label(field.label)
                    .placeholder(field.placeholder)
                    .helper_text(field.helper_text)
                    .error(error)
                    .masked(field.kind == FieldKind::Secret)
                    .disabled(loading)
                    .focused(focused),
            ),
        }
    }

    let buttons_active = form.is_buttons_row_active();
    render_button(
        frame,
        areas.reset,
        &reset_props(
            buttons_active && form.selected_button == SignUpButton::Reset,
            loading,
        ),
    );
    render_button(
        frame,
        areas.submit,
        &submit_props(
            buttons_active && form.selected_button == SignUpButton::Submit,
            loading,
        ),
    );

    if let Some(line) = status_line(app) {
        frame.render_widget(Paragraph::new(line), areas.status);
    }
}

fn status_line(app: &App) -> Option<Line<'static>> {
    let status = &app.sign_up_status;
    match status.status {
        AsyncStatus::Idle => None,
        AsyncStatus::Loading => Some(Line::from(Span::styled(
            "Submitting...",
            Style::default().fg(Color::Yellow),
        ))),
        AsyncStatus::Success => status.data.as_ref().map(|user| {
            Line::from(Span::styled(
                format!("Welcome, {}! Your account is ready.", user.name),
                Style::default().fg(Color::Green),
            ))
        }),
        AsyncStatus::Error => Some(Line::from(Span::styled(
            format!(
                "Sign-up failed: {}",
                status.error.as_deref().unwrap_or("unknown error")
            ),
            Style::default().fg(Color::Red),
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn areas() -> SignUpAreas {
        form_areas(Rect::new(0, 3, 100, 40), &SignUpForm::new(), false)
    }

    #[test]
    fn test_form_is_centered() {
        let areas = areas();
        assert_eq!(areas.title.x, 20);
        assert_eq!(areas.title.width, FORM_WIDTH);
    }

    #[test]
    fn test_field_heights() {
        let areas = areas();
        assert_eq!(areas.fields.len(), 5);
        assert_eq!(areas.fields[0].height, INPUT_HEIGHT);
        assert_eq!(areas.fields[4].height, CHECKBOX_HEIGHT);
        assert!(areas.fields.windows(2).all(|pair| pair[0].bottom() == pair[1].y));
    }

    #[test]
    fn test_hit_testing() {
        let areas = areas();
        let field = areas.fields[2];
        assert_eq!(areas.hit(field.x + 1, field.y + 1), Some(SignUpTarget::Field(2)));
        assert_eq!(
            areas.hit(areas.submit.x, areas.submit.y),
            Some(SignUpTarget::Button(SignUpButton::Submit))
        );
        assert_eq!(
            areas.hit(areas.reset.x, areas.reset.y),
            Some(SignUpTarget::Button(SignUpButton::Reset))
        );
        assert_eq!(areas.hit(0, 3), None);
    }

    #[test]
    fn test_buttons_do_not_overlap() {
        let areas = areas();
        assert!(areas.reset.right() < areas.submit.x);
        assert_eq!(areas.reset.y, areas.submit.y);
    }
}
