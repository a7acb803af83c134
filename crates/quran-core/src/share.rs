use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("not supported on this platform")]
    Unsupported,
    #[error("{0}")]
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// A platform share sheet.
pub trait NativeShare {
    fn share(&self, payload: &SharePayload) -> Result<(), ShareError>;
}

pub trait ClipboardSink {
    fn copy_text(&mut self, text: &str) -> Result<(), ShareError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Copied,
    /// Neither tier worked; show the URL for manual copying.
    ManualCopy(String),
}

pub struct ShareFacilitator {
    payload: SharePayload,
    native: Option<Box<dyn NativeShare>>,
    clipboard: Option<Box<dyn ClipboardSink>>,
}

impl ShareFacilitator {
    pub fn new(
        payload: SharePayload,
        native: Option<Box<dyn NativeShare>>,
        clipboard: Option<Box<dyn ClipboardSink>>,
    ) -> Self {
        Self {
            payload,
            native,
            clipboard,
        }
    }

    pub fn share(&mut self) -> ShareOutcome {
        if let Some(native) = &self.native {
            match native.share(&self.payload) {
                Ok(()) => return ShareOutcome::Shared,
                Err(e) => warn!(error = %e, "native share failed"),
            }
        }
        self.fallback()
    }

    fn fallback(&mut self) -> ShareOutcome {
        let url = self.payload.url.clone();
        let Some(clipboard) = self.clipboard.as_mut() else {
            return ShareOutcome::ManualCopy(url);
        };
        match clipboard.copy_text(&url) {
            Ok(()) => {
                info!("share link copied to clipboard");
                ShareOutcome::Copied
            }
            Err(e) => {
                warn!(error = %e, "clipboard copy failed");
                ShareOutcome::ManualCopy(url)
            }
        }
    }
}
