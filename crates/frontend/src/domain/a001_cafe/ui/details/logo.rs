//! Logo file picker of the café form.
//!
//! Only the choice is tracked; nothing is uploaded and the submitted `logo`
//! stays the placeholder.

use crate::shared::icons::icon;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

/// 2 MiB
pub const MAX_LOGO_BYTES: f64 = 2.0 * 1024.0 * 1024.0;

pub const LOGO_TOO_LARGE: &str = "File size must be less than 2MB";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogoState {
    file_name: Option<String>,
    error: Option<String>,
}

impl LogoState {
    /// Accept or reject a picked file; a rejected file clears the choice
    pub fn select(&mut self, file_name: &str, size_bytes: f64) -> bool {
        if size_bytes > MAX_LOGO_BYTES {
            log::warn!("Rejected logo {} ({} bytes)", file_name, size_bytes);
            self.file_name = None;
            self.error = Some(LOGO_TOO_LARGE.to_string());
            false
        } else {
            self.file_name = Some(file_name.to_string());
            self.error = None;
            true
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// A picked file counts as an unsaved change
    pub fn is_dirty(&self) -> bool {
        self.file_name.is_some()
    }
}

#[component]
pub fn LogoPicker(state: RwSignal<LogoState>, #[prop(into)] disabled: Signal<bool>) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        match input.files().and_then(|files| files.get(0)) {
            Some(file) => {
                let accepted = state
                    .try_update(|s| s.select(&file.name(), file.size()))
                    .unwrap_or(false);
                if !accepted {
                    input.set_value("");
                }
            }
            None => state.update(LogoState::clear),
        }
    };

    view! {
        <div class=move || if state.with(|s| s.error().is_some()) { "form-group form-group--invalid" } else { "form-group" }>
            <label for="logo">"Logo"</label>
            <label class="button button--secondary logo-picker">
                {icon("upload")}
                " Choose file"
                <input
                    type="file"
                    id="logo"
                    accept="image/*"
                    style="display: none;"
                    disabled=move || disabled.get()
                    on:change=on_change
                />
            </label>
            <span class="logo-picker__name">
                {move || state.with(|s| s.file_name().unwrap_or("No file chosen").to_string())}
            </span>
            {move || state.with(|s| s.error().map(|e| e.to_string())).map(|e| view! {
                <div class="form-group__error">{e}</div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_files_up_to_two_mebibytes() {
        let mut logo = LogoState::default();
        assert!(!logo.is_dirty());
        assert!(logo.select("logo.png", MAX_LOGO_BYTES));
        assert_eq!(logo.file_name(), Some("logo.png"));
        assert!(logo.is_dirty());
    }

    #[test]
    fn rejects_larger_files() {
        let mut logo = LogoState::default();
        logo.select("small.png", 10.0);
        assert!(!logo.select("huge.png", MAX_LOGO_BYTES + 1.0));
        assert_eq!(logo.error(), Some("File size must be less than 2MB"));
        assert_eq!(logo.file_name(), None);
        assert!(!logo.is_dirty());

        assert!(logo.select("ok.png", 1024.0));
        assert_eq!(logo.error(), None);
    }
}
