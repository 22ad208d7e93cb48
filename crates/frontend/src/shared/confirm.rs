//! Browser `confirm()` as a [`ConfirmPrompt`].

use contracts::shared::delete_guard::ConfirmPrompt;

pub struct BrowserConfirm;

impl ConfirmPrompt for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
