//! Clipboard abstraction layer
//!
//! The pipeline only ever needs to place a single piece of text on the
//! clipboard, so the capability is a one-method trait. Two implementations
//! are provided:
//!
//! - [system::SystemClipboard]: the OS clipboard, via the `arboard` crate
//! - [mock::MockClipboard]: an in-memory recorder for tests
//!
//! ```rust
//! # use next_version::clipboard::{Clipboard, MockClipboard};
//! let mut clipboard = MockClipboard::new();
//! clipboard.set_text("1.2.4").unwrap();
//! assert_eq!(clipboard.last(), Some("1.2.4"));
//! ```

pub mod mock;
pub mod system;

pub use mock::MockClipboard;
pub use system::SystemClipboard;

use crate::error::Result;

/// Write-only access to a clipboard.
///
/// Implementations must complete the write before returning; callers treat
/// `Ok(())` as "the text is now on the clipboard".
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    ///
    /// # Returns
    /// * `Ok(())` - The text was written
    /// * `Err(ClipboardUnavailable)` - If the clipboard cannot be reached
    fn set_text(&mut self, text: &str) -> Result<()>;
}
