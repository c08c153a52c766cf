//! Application state and core logic

use crate::api::{ApiClient, ApiClientError, RequestOptions};
use crate::config::TuiConfig;
use crate::platform::ClipboardCopier;
use crate::state::{
    AppState, AsyncState, ExamplesSection, ExamplesState, Form, FormValues, KeyValueStore,
    SignUpButton, SignUpForm, UiArea, View,
};
use crate::ui::{self, examples, layout, sign_up};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// Endpoint receiving sign-up submissions
pub const SIGN_UP_PATH: &str = "/auth/sign-up";

/// Account returned by a successful sign-up
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisteredUser {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
struct SignUpRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Send validated sign-up values to the API
pub async fn register(
    api: &ApiClient,
    values: &FormValues,
) -> Result<RegisteredUser, ApiClientError> {
    let request = SignUpRequest {
        name: values.text("name").trim(),
        email: values.text("email").trim(),
        password: values.text("password"),
    };
    api.post(SIGN_UP_PATH, Some(&request), RequestOptions::default())
        .await
}

/// Results of background work, delivered back to the UI loop
#[derive(Debug)]
pub enum AppEvent {
    SignUpFinished(Result<RegisteredUser, ApiClientError>),
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the JSON API
    pub api: ApiClient,
    pub sign_up: SignUpForm,
    pub sign_up_status: AsyncState<RegisteredUser>,
    pub examples: ExamplesState,
    pub clipboard: ClipboardCopier,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    events_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    pub fn new(
        config: &TuiConfig,
        api: ApiClient,
        store: Arc<dyn KeyValueStore>,
        clipboard: ClipboardCopier,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(config.start_view()),
            api,
            sign_up: SignUpForm::new(),
            sign_up_status: AsyncState::default(),
            examples: ExamplesState::new(store),
            clipboard,
            events_tx,
            events_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Whether the terminal is wide enough for multi-column layouts
    pub fn is_wide(&self) -> bool {
        self.examples.is_wide(self.state.window_size)
    }

    fn screen(&self) -> Rect {
        let size = self.state.window_size;
        Rect::new(0, 0, size.width, size.height)
    }

    fn content_area(&self) -> Rect {
        layout::page_layout(self.screen()).content
    }

    pub fn navigate(&mut self, view: View) {
        if view == self.state.current_view {
            return;
        }
        tracing::debug!("Navigating from {:?} to {:?}", self.state.current_view, view);
        self.examples.close_popover();
        self.examples.search_focused = false;
        self.examples.hovered_card = None;
        self.state.current_view = view;
    }

    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.state.window_size.update(width, height);
        if self.examples.popover.value() {
            let region = examples::popover_area(self.content_area());
            self.examples.popover_outside.register(region);
        }
    }

    /// Advance timers and apply finished background work.
    /// Returns true when anything visible changed.
    pub fn tick(&mut self) -> bool {
        let mut changed = self.examples.tick(Instant::now());
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event);
            changed = true;
        }
        changed
    }

    fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SignUpFinished(Ok(user)) => {
                tracing::info!("Registered {}", user.email);
                self.sign_up.reset();
                self.sign_up_status.succeed(user);
            }
            AppEvent::SignUpFinished(Err(err)) => {
                self.sign_up_status.fail(err.message.clone());
                if err.details.is_some() {
                    self.sign_up.apply_server_errors(&err);
                } else {
                    self.state.push_error(format!("{} ({})", err.message, err.code));
                }
            }
        }
    }

    /// Validate the sign-up form and, when valid, submit it in the background
    pub fn submit_sign_up(&mut self) {
        if self.sign_up_status.is_loading() {
            return;
        }
        let Some(values) = self.sign_up.submit() else {
            tracing::debug!("Sign-up form has {} errors", self.sign_up.engine.errors().len());
            return;
        };

        self.sign_up_status.start();
        let api = self.api.clone();
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let result = register(&api, &values).await;
            // The receiver only goes away when the app shuts down
            let _ = events.send(AppEvent::SignUpFinished(result));
        });
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.state.has_error() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        let consumed = match self.state.current_view {
            View::Home => self.handle_home_key(key),
            View::Examples => self.handle_examples_key(key),
            View::SignUp => self.handle_sign_up_key(key),
        };
        if consumed {
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char(c) => {
                if let Some(view) = View::from_shortcut(c) {
                    self.navigate(view);
                }
            }
            _ => {}
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Enter {
            self.navigate(View::Examples);
            return true;
        }
        false
    }

    fn handle_examples_key(&mut self, key: KeyEvent) -> bool {
        let now = Instant::now();
        if self.examples.search_focused {
            return self.handle_search_key(key, now);
        }

        let section = self.examples.section;
        match key.code {
            KeyCode::Esc if self.examples.popover.value() => self.examples.close_popover(),
            KeyCode::Right | KeyCode::Tab => {
                self.examples.close_popover();
                self.examples.section = section.next();
            }
            KeyCode::Left | KeyCode::BackTab => {
                self.examples.close_popover();
                self.examples.section = section.prev();
            }
            KeyCode::Char('l') if section == ExamplesSection::Buttons => {
                self.examples.start_loading(now)
            }
            KeyCode::Char(c) if section == ExamplesSection::Hooks => {
                return self.handle_helper_key(c);
            }
            _ => return false,
        }
        true
    }

    fn handle_search_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        let examples = &mut self.examples;
        match key.code {
            KeyCode::Esc | KeyCode::Enter => examples.search_focused = false,
            KeyCode::Backspace => examples.backspace_search(now),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                examples.type_search(c, now)
            }
            _ => return false,
        }
        true
    }

    fn handle_helper_key(&mut self, c: char) -> bool {
        match c {
            't' => self.examples.toggle.toggle(),
            'c' => {
                self.clipboard.copy(examples::COPY_DEMO_TEXT);
            }
            's' => self.examples.toggle_remembered(),
            '/' => self.examples.search_focused = true,
            'p' => {
                if self.examples.popover.value() {
                    self.examples.close_popover();
                } else {
                    let region = examples::popover_area(self.content_area());
                    self.examples.popover.set(true);
                    self.examples.popover_outside.register(region);
                }
            }
            _ => return false,
        }
        true
    }

    fn handle_sign_up_key(&mut self, key: KeyEvent) -> bool {
        let loading = self.sign_up_status.is_loading();
        let on_buttons = self.sign_up.is_buttons_row_active();

        match key.code {
            KeyCode::Esc => self.navigate(View::Home),
            KeyCode::Tab | KeyCode::Down => self.sign_up.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.sign_up.prev_field(),
            KeyCode::Left | KeyCode::Right if on_buttons => self.sign_up.toggle_button(),
            KeyCode::Enter if on_buttons => {
                let button = self.sign_up.selected_button;
                self.press_sign_up_button(button);
            }
            KeyCode::Enter => self.submit_sign_up(),
            KeyCode::Backspace if !loading => self.sign_up.backspace(),
            KeyCode::Char(c)
                if !loading && !on_buttons && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.sign_up.type_char(c)
            }
            _ => return false,
        }
        true
    }

    fn press_sign_up_button(&mut self, button: SignUpButton) {
        match button {
            SignUpButton::Submit => self.submit_sign_up(),
            SignUpButton::Reset if !self.sign_up_status.is_loading() => {
                self.sign_up.reset();
                self.sign_up_status.reset();
            }
            SignUpButton::Reset => {}
        }
    }

    /// Handle mouse input
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(column, row),
            MouseEventKind::Moved => self.handle_hover(column, row),
            _ => {}
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        if let Some(message) = self.state.current_error() {
            let dialog = ui::error_dialog_area(self.screen(), message);
            if !crate::state::rect_contains(dialog, column, row) {
                self.state.dismiss_error();
            }
            return;
        }

        if self.examples.popover_outside.is_outside(column, row) {
            self.examples.close_popover();
            return;
        }

        let page = layout::page_layout(self.screen());
        match UiArea::at_row(row, self.state.window_size.height) {
            UiArea::Header => {
                if let Some(view) = layout::nav_item_at(page.header, column, row) {
                    self.navigate(view);
                }
            }
            UiArea::Content if self.state.current_view == View::SignUp => {
                let loading = self.sign_up_status.is_loading();
                let areas = sign_up::form_areas(page.content, &self.sign_up, loading);
                match areas.hit(column, row) {
                    Some(sign_up::SignUpTarget::Field(index)) => self.sign_up.focus(index),
                    Some(sign_up::SignUpTarget::Button(button)) => {
                        self.sign_up.focus(self.sign_up.fields().len());
                        self.sign_up.selected_button = button;
                        self.press_sign_up_button(button);
                    }
                    None => {}
                }
            }
            UiArea::Content | UiArea::Footer => {}
        }
    }

    fn handle_hover(&mut self, column: u16, row: u16) {
        if self.state.current_view != View::Examples
            || self.examples.section != ExamplesSection::Cards
        {
            return;
        }
        let areas = examples::card_areas(self.content_area(), self.is_wide());
        self.examples.hovered_card = areas
            .iter()
            .position(|area| crate::state::rect_contains(*area, column, row));
    }
}
