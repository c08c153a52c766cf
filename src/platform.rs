//! Platform integration: clipboard access and terminal detection

use std::io::IsTerminal;

/// Whether stdout is attached to a terminal
pub fn is_interactive() -> bool {
    std::io::stdout().is_terminal()
}

/// System clipboard access
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardBackend: Send {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()>;
}

/// Clipboard backed by `arboard`; the handle is opened per copy
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardBackend for SystemClipboard {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

/// Copies text and remembers what was last copied successfully
pub struct ClipboardCopier {
    backend: Box<dyn ClipboardBackend>,
    copied_text: Option<String>,
}

impl ClipboardCopier {
    pub fn new(backend: Box<dyn ClipboardBackend>) -> Self {
        Self {
            backend,
            copied_text: None,
        }
    }

    pub fn system() -> Self {
        Self::new(Box::new(SystemClipboard))
    }

    /// Returns true on success; failures are logged and clear the copied text
    pub fn copy(&mut self, text: &str) -> bool {
        match self.backend.set_text(text) {
            Ok(()) => {
                self.copied_text = Some(text.to_string());
                true
            }
            Err(e) => {
                tracing::warn!("Copy to clipboard failed: {e:#}");
                self.copied_text = None;
                false
            }
        }
    }

    pub fn copied_text(&self) -> Option<&str> {
        self.copied_text.as_deref()
    }

    pub fn reset(&mut self) {
        self.copied_text = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn test_copy_success_records_text() {
        let mut backend = MockClipboardBackend::new();
        backend
            .expect_set_text()
            .with(eq("npm install"))
            .times(1)
            .returning(|_| Ok(()));

        let mut copier = ClipboardCopier::new(Box::new(backend));
        assert!(copier.copy("npm install"));
        assert_eq!(copier.copied_text(), Some("npm install"));

        copier.reset();
        assert_eq!(copier.copied_text(), None);
    }

    #[test]
    fn test_copy_failure_clears_text() {
        let mut backend = MockClipboardBackend::new();
        let mut calls = 0;
        backend.expect_set_text().times(2).returning(move |_| {
            calls += 1;
            if calls == 1 {
                Ok(())
            } else {
                Err(anyhow::anyhow!("no display"))
            }
        });

        let mut copier = ClipboardCopier::new(Box::new(backend));
        assert!(copier.copy("first"));
        assert!(!copier.copy("second"));
        assert_eq!(copier.copied_text(), None);
    }
}
