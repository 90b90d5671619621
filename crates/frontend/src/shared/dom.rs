//! Thin wrappers over browser dialogs

pub const UNSAVED_CHANGES_PROMPT: &str =
    "You have unsaved changes. Are you sure you want to leave?";

/// `window.confirm`; a missing window counts as "no"
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Ask before throwing away form edits
pub fn confirm_discard() -> bool {
    confirm(UNSAVED_CHANGES_PROMPT)
}
