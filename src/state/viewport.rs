//! Terminal size tracking and size-based queries

use thiserror::Error;

/// Last known terminal size in cells; `0×0` until the first measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowSize {
    pub width: u16,
    pub height: u16,
}

impl WindowSize {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn is_measured(&self) -> bool {
        self.width > 0 || self.height > 0
    }

    pub fn update(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaQueryError {
    #[error("empty media query")]
    Empty,
    #[error("malformed condition `{0}`")]
    Malformed(String),
    #[error("unknown feature `{0}`")]
    UnknownFeature(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Condition {
    MinWidth(u16),
    MaxWidth(u16),
    MinHeight(u16),
    MaxHeight(u16),
}

impl Condition {
    fn matches(self, size: WindowSize) -> bool {
        match self {
            Condition::MinWidth(n) => size.width >= n,
            Condition::MaxWidth(n) => size.width <= n,
            Condition::MinHeight(n) => size.height >= n,
            Condition::MaxHeight(n) => size.height <= n,
        }
    }
}

/// Size query such as `(min-width: 80) and (max-height: 40)`, measured in cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaQuery {
    conditions: Vec<Condition>,
}

impl MediaQuery {
    pub fn parse(query: &str) -> Result<Self, MediaQueryError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(MediaQueryError::Empty);
        }
        let conditions = query
            .split(" and ")
            .map(parse_condition)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { conditions })
    }

    /// All conditions hold; an unmeasured size never matches
    pub fn matches(&self, size: WindowSize) -> bool {
        size.is_measured() && self.conditions.iter().all(|c| c.matches(size))
    }
}

fn parse_condition(raw: &str) -> Result<Condition, MediaQueryError> {
    let malformed = || MediaQueryError::Malformed(raw.trim().to_string());
    let inner = raw
        .trim()
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(malformed)?;
    let (feature, value) = inner.split_once(':').ok_or_else(malformed)?;
    let value = value
        .trim()
        .trim_end_matches("px")
        .parse::<u16>()
        .map_err(|_| malformed())?;

    match feature.trim() {
        "min-width" => Ok(Condition::MinWidth(value)),
        "max-width" => Ok(Condition::MaxWidth(value)),
        "min-height" => Ok(Condition::MinHeight(value)),
        "max-height" => Ok(Condition::MaxHeight(value)),
        other => Err(MediaQueryError::UnknownFeature(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod window_size {
        use super::*;

        #[test]
        fn test_default_is_unmeasured() {
            let size = WindowSize::default();
            assert_eq!((size.width, size.height), (0, 0));
            assert!(!size.is_measured());
        }

        #[test]
        fn test_update() {
            let mut size = WindowSize::default();
            size.update(120, 40);
            assert_eq!(size, WindowSize::new(120, 40));
            assert!(size.is_measured());
        }
    }

    mod media_query {
        use super::*;

        #[test]
        fn test_single_condition() {
            let wide = MediaQuery::parse("(min-width: 100)").unwrap();
            assert!(wide.matches(WindowSize::new(100, 10)));
            assert!(!wide.matches(WindowSize::new(99, 10)));
        }

        #[test]
        fn test_combined_conditions() {
            let query = MediaQuery::parse("(min-width: 80) and (max-height: 30)").unwrap();
            assert!(query.matches(WindowSize::new(80, 30)));
            assert!(!query.matches(WindowSize::new(80, 31)));
            assert!(!query.matches(WindowSize::new(79, 20)));
        }

        #[test]
        fn test_px_suffix_accepted() {
            let query = MediaQuery::parse("(max-width: 60px)").unwrap();
            assert!(query.matches(WindowSize::new(60, 1)));
        }

        #[test]
        fn test_unmeasured_never_matches() {
            let query = MediaQuery::parse("(max-width: 60)").unwrap();
            assert!(!query.matches(WindowSize::default()));
        }

        #[test]
        fn test_parse_errors() {
            assert_eq!(MediaQuery::parse("  "), Err(MediaQueryError::Empty));
            assert_eq!(
                MediaQuery::parse("min-width: 10"),
                Err(MediaQueryError::Malformed("min-width: 10".to_string()))
            );
            assert_eq!(
                MediaQuery::parse("(orientation: 1)"),
                Err(MediaQueryError::UnknownFeature("orientation".to_string()))
            );
        }
    }
}
