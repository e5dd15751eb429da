//! Feedback Components
//!
//! Progress indicator, empty-state message and dismissible error notice.

use leptos::prelude::*;

/// Centered spinner with a caption
#[component]
pub fn Spinner(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class="resource-loading text-center mt-5">
            <div class="spinner-border text-primary" role="status">
                <span class="visually-hidden">{label.clone()}</span>
            </div>
            <p class="mt-3">{label}</p>
        </div>
    }
}

/// Shown when a load finished with zero records
#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(into)] hint: String,
) -> impl IntoView {
    view! {
        <div class="resource-empty text-center py-5">
            <h5>{title}</h5>
            <p class="text-muted">{hint}</p>
        </div>
    }
}

/// Dismissible error alert
///
/// Dismissing only hides the message; callers decide whether anything else
/// happens (the resource view never retries on dismiss).
#[component]
pub fn ErrorNotice(
    #[prop(into)] message: String,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="alert alert-danger alert-dismissible" role="alert">
            <h5 class="alert-heading">"Error"</h5>
            <p class="mb-0">{message}</p>
            <button
                type="button"
                class="btn-close"
                aria-label="Close"
                on:click=move |_| on_dismiss.run(())
            ></button>
        </div>
    }
}
