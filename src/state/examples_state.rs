//! State behind the component gallery page

use super::app_state::TimedFlag;
use super::debounce::Debounced;
use super::storage::{KeyValueStore, Stored};
use super::toggle::Toggle;
use super::ui_area::ClickOutside;
use super::viewport::{MediaQuery, WindowSize};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How long the loading button demo stays busy
pub const LOADING_DEMO_DURATION: Duration = Duration::from_secs(2);

/// Storage key for the persisted toggle
pub const REMEMBERED_TOGGLE_KEY: &str = "examples.remembered";

/// Query used to pick the two-column gallery layout
pub const WIDE_LAYOUT_QUERY: &str = "(min-width: 100)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExamplesSection {
    #[default]
    Buttons,
    Inputs,
    Cards,
    Hooks,
}

impl ExamplesSection {
    pub const ALL: [ExamplesSection; 4] = [
        ExamplesSection::Buttons,
        ExamplesSection::Inputs,
        ExamplesSection::Cards,
        ExamplesSection::Hooks,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Buttons => "Button",
            Self::Inputs => "Input",
            Self::Cards => "Card",
            Self::Hooks => "Helpers",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

pub struct ExamplesState {
    pub section: ExamplesSection,
    pub toggle: Toggle,
    pub loading: TimedFlag,
    pub search: Debounced<String>,
    pub search_focused: bool,
    pub popover: Toggle,
    pub popover_outside: ClickOutside,
    pub hovered_card: Option<usize>,
    pub remembered: Stored<bool>,
    wide_layout: Option<MediaQuery>,
}

impl ExamplesState {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            section: ExamplesSection::default(),
            toggle: Toggle::default(),
            loading: TimedFlag::default(),
            search: Debounced::new(String::new()),
            search_focused: false,
            popover: Toggle::default(),
            popover_outside: ClickOutside::default(),
            hovered_card: None,
            remembered: Stored::new(store, REMEMBERED_TOGGLE_KEY, false),
            wide_layout: MediaQuery::parse(WIDE_LAYOUT_QUERY).ok(),
        }
    }

    /// Advance time-based demos; returns true when something changed
    pub fn tick(&mut self, now: Instant) -> bool {
        let was_loading = self.loading.is_set();
        self.loading.update_at(now);
        let settled = self.search.tick_at(now);
        settled || was_loading != self.loading.is_set()
    }

    pub fn start_loading(&mut self, now: Instant) {
        if !self.loading.is_active_at(now) {
            self.loading.start_at(now, LOADING_DEMO_DURATION);
        }
    }

    pub fn type_search(&mut self, c: char, now: Instant) {
        let mut next = self.search.latest().clone();
        next.push(c);
        self.search.set_at(next, now);
    }

    pub fn backspace_search(&mut self, now: Instant) {
        let mut next = self.search.latest().clone();
        next.pop();
        self.search.set_at(next, now);
    }

    pub fn close_popover(&mut self) {
        self.popover.set(false);
        self.popover_outside.clear();
    }

    pub fn toggle_remembered(&mut self) {
        self.remembered.update(|value| !value);
    }

    pub fn is_wide(&self, size: WindowSize) -> bool {
        self.wide_layout
            .as_ref()
            .is_some_and(|query| query.matches(size))
    }
}
