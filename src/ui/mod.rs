//! UI module for rendering the TUI

mod components;
pub mod examples;
mod home;
pub mod layout;
pub mod sign_up;
#[cfg(test)]
pub mod test_support;

pub use components::error_dialog_area;

use crate::app::App;
use crate::state::{ExamplesSection, View};
use chrono::Datelike;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let page = layout::page_layout(frame.area());

    layout::draw_header(frame, page.header, app.state.current_view);

    match app.state.current_view {
        View::Home => home::draw(frame, page.content, app),
        View::Examples => examples::draw(frame, page.content, app),
        View::SignUp => sign_up::draw(frame, page.content, app),
    }

    let year = chrono::Local::now().year();
    layout::draw_footer(frame, page.footer, year, &view_hints(app));

    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}

/// Keyboard hints for the current page
fn view_hints(app: &App) -> String {
    if app.state.has_error() {
        return "Enter/Esc:dismiss".to_string();
    }
    match app.state.current_view {
        View::Home => "1-3:pages  Enter:examples  q:quit".to_string(),
        View::Examples if app.examples.search_focused => "type:search  Esc:done".to_string(),
        View::Examples => {
            let section = match app.examples.section {
                ExamplesSection::Buttons => "l:loading  ",
                ExamplesSection::Hooks => "t/c/s/p:demos  /:search  ",
                ExamplesSection::Inputs | ExamplesSection::Cards => "",
            };
            format!("←/→:section  {section}1-3:pages  q:quit")
        }
        View::SignUp => "Tab:next  Enter:submit  Esc:home".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use crate::ui::test_support::{buffer_text, render};

    #[test]
    fn test_draws_each_view() {
        let mut app = test_app();
        app.state.window_size.update(100, 40);
        for (view, marker) in [
            (View::Home, "Starter Kit"),
            (View::Examples, "Variants"),
            (View::SignUp, "Create an account"),
        ] {
            app.state.current_view = view;
            let buffer = render(100, 40, |frame| draw(frame, &app));
            let text = buffer_text(&buffer);
            assert!(text.contains(marker), "{view:?} missing {marker}");
            assert!(text.contains("starter-tui"));
        }
    }

    #[test]
    fn test_error_dialog_overlays_page() {
        let mut app = test_app();
        app.state.push_error("The request timed out.".to_string());
        let buffer = render(80, 24, |frame| draw(frame, &app));
        let text = buffer_text(&buffer);
        assert!(text.contains("The request timed out."));
        assert!(text.contains("Enter/Esc:dismiss"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = test_app();
        for view in View::ALL {
            app.state.current_view = view;
            render(12, 5, |frame| draw(frame, &app));
        }
    }
}
