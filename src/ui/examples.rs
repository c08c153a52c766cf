//! Component gallery and helper demos

use super::components::{
    render_button, render_card, render_input, ButtonProps, ButtonSize, ButtonVariant, CardProps,
    InputProps, BUTTON_HEIGHT, INPUT_HEIGHT,
};
use crate::app::App;
use crate::state::{ExamplesSection, ExamplesState, WindowSize};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::rc::Rc;

/// Text copied by the clipboard demo
pub const COPY_DEMO_TEXT: &str = "Hello, World!";

const POPOVER_WIDTH: u16 = 34;
const POPOVER_HEIGHT: u16 = 5;

const EMPTY: &str = "(none)";

/// Content area below the section tabs
fn body_area(area: Rect) -> Rect {
    Rect {
        y: area.y + 2,
        height: area.height.saturating_sub(2),
        ..area
    }
}

fn grid(area: Rect, count: usize, wide: bool) -> Rc<[Rect]> {
    let columns = if wide { 2 } else { 1 };
    let rows = count.div_ceil(columns);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(area);
    row_areas
        .iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(*row)
                .to_vec()
        })
        .take(count)
        .collect()
}

/// Card areas of the Card section, used for hover tracking
pub fn card_areas(content: Rect, wide: bool) -> Rc<[Rect]> {
    grid(body_area(content), 4, wide)
}

/// Where the popover demo opens within the content area
pub fn popover_area(content: Rect) -> Rect {
    let width = POPOVER_WIDTH.min(content.width);
    let height = POPOVER_HEIGHT.min(content.height);
    Rect {
        x: content.x + content.width.saturating_sub(width) / 2,
        y: content.y + content.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

fn or_empty(text: &str) -> &str {
    if text.is_empty() {
        EMPTY
    } else {
        text
    }
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let examples = &app.examples;
    draw_tabs(frame, area, examples.section);

    let body = body_area(area);
    match examples.section {
        ExamplesSection::Buttons => draw_buttons(frame, body, examples),
        ExamplesSection::Inputs => draw_inputs(frame, body, app.is_wide()),
        ExamplesSection::Cards => draw_cards(frame, area, examples, app.is_wide()),
        ExamplesSection::Hooks => draw_helpers(frame, body, app),
    }

    if examples.popover.value() {
        draw_popover(frame, popover_area(area));
    }
}

fn draw_tabs(frame: &mut Frame, area: Rect, active: ExamplesSection) {
    let mut spans = vec![Span::raw(" ")];
    for section in ExamplesSection::ALL {
        let style = if section == active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(section.label(), style));
        spans.push(Span::raw("   "));
    }
    let tabs = Rect {
        height: area.height.min(1),
        ..area
    };
    frame.render_widget(Paragraph::new(Line::from(spans)), tabs);
}

fn heading(frame: &mut Frame, area: Rect, text: &str) {
    frame.render_widget(
        Paragraph::new(Span::styled(
            text,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        area,
    );
}

/// Lay buttons left to right with one cell between them
fn button_row(frame: &mut Frame, area: Rect, buttons: &[ButtonProps]) {
    let mut x = area.x;
    for props in buttons {
        if x >= area.right() {
            break;
        }
        let drawn = render_button(
            frame,
            Rect {
                x,
                width: area.right() - x,
                ..area
            },
            props,
        );
        x = drawn.right() + 1;
    }
}

fn draw_buttons(frame: &mut Frame, area: Rect, examples: &ExamplesState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

    heading(frame, rows[0], "Variants");
    button_row(
        frame,
        rows[1],
        &[
            ButtonProps::new("Default"),
            ButtonProps::new("Outline").variant(ButtonVariant::Outline),
            ButtonProps::new("Ghost").variant(ButtonVariant::Ghost),
            ButtonProps::new("Destructive").variant(ButtonVariant::Destructive),
        ],
    );

    heading(frame, rows[2], "Sizes");
    button_row(
        frame,
        rows[3],
        &[
            ButtonProps::new("Small").size(ButtonSize::Sm),
            ButtonProps::new("Medium").size(ButtonSize::Md),
            ButtonProps::new("Large").size(ButtonSize::Lg),
        ],
    );

    let loading = examples.loading.is_set();
    let loading_label = if loading {
        "Processing..."
    } else {
        "l: try loading"
    };
    heading(frame, rows[4], "States");
    button_row(
        frame,
        rows[5],
        &[
            ButtonProps::new("Disabled").disabled(true),
            ButtonProps::new(loading_label).loading(loading),
        ],
    );

    heading(frame, rows[6], "Full width");
    let full_width = Rect {
        width: rows[7].width.min(48),
        ..rows[7]
    };
    render_button(
        frame,
        full_width,
        &ButtonProps::new("Full width button").full_width(true),
    );
}

fn draw_inputs(frame: &mut Frame, area: Rect, wide: bool) {
    let inputs = [
        InputProps::new("")
            .label("Name")
            .placeholder(Some("Enter your name"))
            .helper_text(Some("Use your real name")),
        InputProps::new("")
            .label("Email")
            .placeholder(Some("example@email.com")),
        InputProps::new("secret")
            .label("Password")
            .masked(true)
            .focused(true),
        InputProps::new("wrong value")
            .label("Error state")
            .error(Some("This field is required")),
        InputProps::new("read only").label("Disabled").disabled(true),
    ];

    let columns = if wide { 2 } else { 1 };
    let width = (area.width.saturating_sub(2) / columns).min(48);
    for (index, props) in inputs.iter().enumerate() {
        let column = (index as u16) % columns;
        let row = (index as u16) / columns;
        let y = area.y + row * INPUT_HEIGHT;
        if y + INPUT_HEIGHT > area.bottom() {
            break;
        }
        let slot = Rect::new(area.x + column * (width + 2), y, width, INPUT_HEIGHT);
        render_input(frame, slot, props);
    }
}

fn draw_cards(frame: &mut Frame, content: Rect, examples: &ExamplesState, wide: bool) {
    let areas = card_areas(content, wide);
    let hovered = |index: usize| examples.hovered_card == Some(index);
    let text = |s: &'static str| {
        vec![Line::from(Span::styled(
            s,
            Style::default().fg(Color::Gray),
        ))]
    };

    let cards: [(CardProps, Vec<Line>); 4] = [
        (
            CardProps::new("Basic card").description("A card with a title and description"),
            text("Card content goes here. It can hold any widget."),
        ),
        (
            CardProps::new("Action card")
                .description("Has an action on the right")
                .action("Action"),
            text("Headers can carry an action."),
        ),
        (
            CardProps::new("Footer card")
                .description("Has a footer")
                .footer(Line::from(vec![
                    Span::styled(" Cancel ", Style::default().fg(Color::Gray)),
                    Span::raw(" "),
                    Span::styled(" Save ", Style::default().fg(Color::Black).bg(Color::Cyan)),
                ])),
            text("Footers usually hold buttons."),
        ),
        (
            CardProps::new("Hover effect")
                .description("Move the mouse over this card")
                .hoverable(hovered(3)),
            text("Hoverable cards highlight their border."),
        ),
    ];

    for ((props, lines), area) in cards.into_iter().zip(areas.iter()) {
        render_card(frame, *area, &props, lines);
    }
}

fn draw_helpers(frame: &mut Frame, area: Rect, app: &App) {
    let examples = &app.examples;
    let areas = grid(area, 6, app.is_wide());
    let value = |text: String| Span::styled(text, Style::default().add_modifier(Modifier::BOLD));

    render_card(
        frame,
        areas[0],
        &CardProps::new("Toggle").description("Boolean toggle"),
        vec![
            Line::from(vec![
                Span::raw("State: "),
                value(examples.toggle.value().to_string()),
            ]),
            Line::from(Span::styled("t: toggle", Style::default().fg(Color::DarkGray))),
        ],
    );

    render_card(
        frame,
        areas[1],
        &CardProps::new("Clipboard").description("Copy text"),
        vec![
            Line::from(vec![
                Span::raw("Copied: "),
                value(or_empty(app.clipboard.copied_text().unwrap_or("")).to_string()),
            ]),
            Line::from(Span::styled(
                format!("c: copy \"{COPY_DEMO_TEXT}\""),
                Style::default().fg(Color::DarkGray),
            )),
        ],
    );

    let search_card = areas[2];
    render_card(
        frame,
        search_card,
        &CardProps::new("Debounce").description("Input debounce (500ms)"),
        Vec::new(),
    );
    let inner = Rect {
        x: search_card.x + 1,
        y: search_card.y + 3,
        width: search_card.width.saturating_sub(2),
        height: search_card.height.saturating_sub(4),
    };
    let input_area = Rect {
        height: inner.height.min(3),
        ..inner
    };
    render_input(
        frame,
        input_area,
        &InputProps::new(examples.search.latest())
            .placeholder(Some("/ to search..."))
            .focused(examples.search_focused),
    );
    if inner.height > 3 {
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(vec![
                    Span::raw("Input: "),
                    Span::raw(or_empty(examples.search.latest()).to_string()),
                ]),
                Line::from(vec![
                    Span::raw("Debounced: "),
                    value(or_empty(examples.search.value()).to_string()),
                ]),
            ])
            .wrap(Wrap { trim: true }),
            Rect {
                y: inner.y + 3,
                height: inner.height - 3,
                ..inner
            },
        );
    }

    render_card(
        frame,
        areas[3],
        &CardProps::new("Stored").description("Survives restarts"),
        vec![
            Line::from(vec![
                Span::raw("Remembered: "),
                value(examples.remembered.get().to_string()),
            ]),
            Line::from(Span::styled(
                "s: toggle and save",
                Style::default().fg(Color::DarkGray),
            )),
        ],
    );

    let size = app.state.window_size;
    render_card(
        frame,
        areas[4],
        &CardProps::new("Window size").description("Terminal size and media query"),
        vec![
            Line::from(vec![Span::raw("Size: "), value(format_size(size))]),
            Line::from(vec![
                Span::raw("(min-width: 100): "),
                value(if app.is_wide() { "yes" } else { "no" }.to_string()),
            ]),
        ],
    );

    render_card(
        frame,
        areas[5],
        &CardProps::new("Popover").description("Closes on outside click"),
        vec![Line::from(Span::styled(
            "p: open, then click elsewhere",
            Style::default().fg(Color::DarkGray),
        ))],
    );
}

fn format_size(size: WindowSize) -> String {
    format!("{}×{}", size.width, size.height)
}

fn draw_popover(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from("I'm a popover."),
            Line::from(Span::styled(
                "Click outside or press Esc",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Popover "),
        )
        .style(Style::default().bg(Color::Black)),
        area,
    );
}
