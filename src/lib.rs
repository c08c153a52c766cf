//! Starter TUI - terminal starter kit
//!
//! Form state with declarative validation, a typed client for a JSON API
//! envelope, small state helpers and ratatui components composed into a
//! three-page app.

pub mod api;
pub mod app;
pub mod config;
pub mod env;
pub mod platform;
pub mod state;
pub mod ui;
