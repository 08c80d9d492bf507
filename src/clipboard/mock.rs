use crate::clipboard::Clipboard;
use crate::error::{NextVersionError, Result};

/// Mock clipboard for testing without a display server
#[derive(Debug, Default)]
pub struct MockClipboard {
    writes: Vec<String>,
    failure: Option<String>,
}

impl MockClipboard {
    /// Create a new empty mock clipboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock clipboard whose writes always fail with `reason`
    pub fn unavailable(reason: impl Into<String>) -> Self {
        MockClipboard {
            writes: Vec::new(),
            failure: Some(reason.into()),
        }
    }

    /// Every value written so far, oldest first
    pub fn writes(&self) -> &[String] {
        &self.writes
    }

    /// The current clipboard contents
    pub fn last(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }
}

impl Clipboard for MockClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if let Some(reason) = &self.failure {
            return Err(NextVersionError::clipboard(reason.clone()));
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}
