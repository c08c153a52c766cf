//! Application state definitions

use super::viewport::WindowSize;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Current page in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Home,
    Examples,
    SignUp,
}

impl View {
    /// Pages in header order
    pub const ALL: [View; 3] = [View::Home, View::Examples, View::SignUp];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Examples => "Examples",
            Self::SignUp => "Sign up",
        }
    }

    /// Number key that opens this page
    pub fn shortcut(&self) -> char {
        match self {
            Self::Home => '1',
            Self::Examples => '2',
            Self::SignUp => '3',
        }
    }

    pub fn from_shortcut(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|view| view.shortcut() == c)
    }
}

/// Phase of a background operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AsyncStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Status plus the data or error of the last background operation
#[derive(Debug, Clone, PartialEq)]
pub struct AsyncState<T, E = String> {
    pub status: AsyncStatus,
    pub data: Option<T>,
    pub error: Option<E>,
}

impl<T, E> Default for AsyncState<T, E> {
    fn default() -> Self {
        Self {
            status: AsyncStatus::Idle,
            data: None,
            error: None,
        }
    }
}

impl<T, E> AsyncState<T, E> {
    /// Enter `Loading`, keeping previous data visible
    pub fn start(&mut self) {
        self.status = AsyncStatus::Loading;
        self.error = None;
    }

    pub fn succeed(&mut self, data: T) {
        self.status = AsyncStatus::Success;
        self.data = Some(data);
        self.error = None;
    }

    pub fn fail(&mut self, error: E) {
        self.status = AsyncStatus::Error;
        self.error = Some(error);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_loading(&self) -> bool {
        self.status == AsyncStatus::Loading
    }
}

/// Flag that switches itself off after a fixed duration
#[derive(Debug, Clone, Copy, Default)]
pub struct TimedFlag {
    until: Option<Instant>,
}

impl TimedFlag {
    pub fn start_at(&mut self, now: Instant, duration: Duration) {
        self.until = Some(now + duration);
    }

    pub fn is_active_at(&self, now: Instant) -> bool {
        self.until.is_some_and(|until| now < until)
    }

    /// Clears the flag once expired
    pub fn update_at(&mut self, now: Instant) {
        if !self.is_active_at(now) {
            self.until = None;
        }
    }

    pub fn is_set(&self) -> bool {
        self.until.is_some()
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub window_size: WindowSize,
    /// Pending error messages, oldest shown first
    pub error_queue: VecDeque<String>,
}

impl AppState {
    pub fn new(start_view: View) -> Self {
        Self {
            current_view: start_view,
            ..Default::default()
        }
    }

    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    pub fn has_error(&self) -> bool {
        !self.error_queue.is_empty()
    }
}
