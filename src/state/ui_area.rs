//! Screen regions for mouse event handling
//!
//! # Layout
//!
//! ```text
//! Row 0-2:  Header navigation (3 rows with borders)
//! Row 3+:   Page content
//! Bottom:   Footer (1 row)
//! ```

use ratatui::layout::Rect;

/// Height of the header bar (top border + content + bottom border)
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the footer line
pub const FOOTER_HEIGHT: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiArea {
    Header,
    Content,
    Footer,
}

impl UiArea {
    /// Area containing `mouse_row` for a terminal of `height` rows
    pub fn at_row(mouse_row: u16, height: u16) -> Self {
        if mouse_row < HEADER_HEIGHT {
            UiArea::Header
        } else if mouse_row >= height.saturating_sub(FOOTER_HEIGHT) {
            UiArea::Footer
        } else {
            UiArea::Content
        }
    }

    /// Row relative to the start of the content area
    #[inline]
    pub fn content_row(mouse_row: u16) -> u16 {
        mouse_row.saturating_sub(HEADER_HEIGHT)
    }
}

/// Tracks one registered region and reports clicks that land outside it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickOutside {
    region: Option<Rect>,
}

impl ClickOutside {
    pub fn register(&mut self, region: Rect) {
        self.region = Some(region);
    }

    pub fn clear(&mut self) {
        self.region = None;
    }

    pub fn region(&self) -> Option<Rect> {
        self.region
    }

    /// True when a region is registered and the cell lies outside it
    pub fn is_outside(&self, column: u16, row: u16) -> bool {
        self.region
            .is_some_and(|region| !rect_contains(region, column, row))
    }
}

/// Whether a cell lies within `area`
pub fn rect_contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod areas {
        use super::*;

        #[test]
        fn test_at_row() {
            assert_eq!(UiArea::at_row(0, 24), UiArea::Header);
            assert_eq!(UiArea::at_row(2, 24), UiArea::Header);
            assert_eq!(UiArea::at_row(3, 24), UiArea::Content);
            assert_eq!(UiArea::at_row(22, 24), UiArea::Content);
            assert_eq!(UiArea::at_row(23, 24), UiArea::Footer);
        }

        #[test]
        fn test_content_row_saturates() {
            assert_eq!(UiArea::content_row(3), 0);
            assert_eq!(UiArea::content_row(7), 4);
            assert_eq!(UiArea::content_row(1), 0);
        }
    }

    mod click_outside {
        use super::*;

        #[test]
        fn test_no_region_ignores_clicks() {
            let tracker = ClickOutside::default();
            assert!(!tracker.is_outside(0, 0));
        }

        #[test]
        fn test_inside_and_outside() {
            let mut tracker = ClickOutside::default();
            tracker.register(Rect::new(10, 5, 20, 4));
            assert!(!tracker.is_outside(10, 5));
            assert!(!tracker.is_outside(29, 8));
            assert!(tracker.is_outside(30, 8));
            assert!(tracker.is_outside(15, 9));
            assert!(tracker.is_outside(9, 6));
        }

        #[test]
        fn test_clear() {
            let mut tracker = ClickOutside::default();
            tracker.register(Rect::new(0, 0, 1, 1));
            tracker.clear();
            assert_eq!(tracker.region(), None);
            assert!(!tracker.is_outside(50, 50));
        }
    }
}
