use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::ports::clipboard::Clipboard;

/// In-process clipboard owned by the session; holds the last copied text.
#[derive(Debug, Default)]
pub struct SessionClipboard {
    contents: Mutex<Option<String>>,
}

impl SessionClipboard {
    /// A fresh, empty clipboard for a new session.
    pub fn shared() -> Arc<dyn Clipboard> {
        Arc::new(Self::default())
    }
}

impl Clipboard for SessionClipboard {
    fn write_text(&self, text: &str) {
        *self.contents.lock().unwrap_or_else(PoisonError::into_inner) = Some(text.to_string());
    }

    fn read_text(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
