//  ____  __        __  ____  _____  _   _
// |  _ \ \ \      / / / ___|| ____|| \ | |
// | |_) | \ \ /\ / / | |  _ |  _|  |  \| |
// |  __/   \ V  V /  | |_| || |___ | |\  |
// |_|       \_/\_/    \____||_____||_| \_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-17
// Version : 0.1.0
// License : Mulan PSL v2
//
// Clipboard handler

use arboard::Clipboard;

use crate::error::{PwgenError, Result};

/// Anything that can receive a password as plain text.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The desktop clipboard.
///
/// The platform handle is opened on first use and kept for the lifetime of
/// the value. On X11 and Wayland the copied text is only served while the
/// handle is alive, so long-running callers should hold on to one instance.
#[derive(Default)]
pub struct SystemClipboard {
    ctx: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.ctx.is_none() {
            let ctx = Clipboard::new().map_err(|e| PwgenError::Clipboard(e.to_string()))?;
            self.ctx = Some(ctx);
        }
        let ctx = self
            .ctx
            .as_mut()
            .ok_or_else(|| PwgenError::Clipboard("clipboard unavailable".to_string()))?;
        ctx.set_text(text.to_owned())
            .map_err(|e| PwgenError::Clipboard(e.to_string()))?;
        tracing::debug!("password placed on clipboard");
        Ok(())
    }
}

/// Copies `secret` to the desktop clipboard with a one-off handle.
pub fn copy_to_clipboard(secret: &str) -> Result<()> {
    if secret.is_empty() {
        return Err(PwgenError::NothingToCopy);
    }
    SystemClipboard::new().set_text(secret)
}
