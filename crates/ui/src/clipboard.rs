use arboard::Clipboard;
use quran_core::share::{ClipboardSink, ShareError};

/// System clipboard through arboard. Opened lazily so a headless session
/// only fails when sharing is attempted.
#[derive(Default)]
pub struct ArboardClipboard {
    inner: Option<Clipboard>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for ArboardClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), ShareError> {
        if self.inner.is_none() {
            let clipboard = Clipboard::new().map_err(|e| ShareError::Failed(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        let Some(clipboard) = self.inner.as_mut() else {
            return Err(ShareError::Unsupported);
        };
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ShareError::Failed(e.to_string()))
    }
}
