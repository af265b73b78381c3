//! Form Feedback
//!
//! Success/error banners and per-field validation messages.

use community_core::forms::FieldErrors;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Banner for the outcome of the last submission
#[component]
pub fn NoticeBox(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|notice| match notice {
            Notice::Success(message) => view! { <div class="success-box">{message}</div> }.into_any(),
            Notice::Error(message) => view! { <div class="error-box">{message}</div> }.into_any(),
        })
    }
}

/// Validation message under one input
#[component]
pub fn FieldError(errors: RwSignal<FieldErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors
            .with(|errors| errors.get(field).cloned())
            .map(|message| view! { <p class="field-error">{message}</p> })
    }
}
