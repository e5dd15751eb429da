//! User Edit Modal Component
//!
//! Form over the draft store. Saving and cancelling are handled by the
//! owning page; this component only edits the draft and reports intent.

use leptos::prelude::*;
use leptos_resource_view::EditSession;

use crate::store::{DraftStore, UserDraftStoreFields};

/// Modal edit form for one user
///
/// # Arguments
/// * `session` - Edit state; the modal is visible while it is open
/// * `draft` - Form values; inputs write straight into it
/// * `on_save` - Called on submit
/// * `on_cancel` - Called on close/cancel
#[component]
pub fn UserEditModal(
    session: RwSignal<EditSession<u64>>,
    draft: DraftStore,
    #[prop(into)] on_save: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let submitting = move || session.with(EditSession::is_submitting);
    let error = move || session.with(|s| s.error().map(str::to_string));
    let title = move || {
        session
            .with(|s| s.key().copied())
            .map(|id| format!("Edit User #{}", id))
            .unwrap_or_default()
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_save.run(());
    };

    view! {
        <Show when=move || session.with(EditSession::is_open)>
            <div class="modal-backdrop show"></div>
            <div class="modal d-block" tabindex="-1" role="dialog">
                <div class="modal-dialog" role="document">
                    <form class="modal-content" on:submit=on_submit>
                        <div class="modal-header">
                            <h5 class="modal-title">{title}</h5>
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Close"
                                disabled=submitting
                                on:click=move |_| on_cancel.run(())
                            ></button>
                        </div>

                        <div class="modal-body">
                            {move || error().map(|message| view! {
                                <div class="alert alert-danger" role="alert">{message}</div>
                            })}
                            {draft_field("Name", "text", move || draft.name().get(), move |v| *draft.name().write() = v)}
                            {draft_field("Email", "email", move || draft.email().get(), move |v| *draft.email().write() = v)}
                            {draft_field("Team", "text", move || draft.team().get(), move |v| *draft.team().write() = v)}
                            {draft_field("Age", "number", move || draft.age().get(), move |v| *draft.age().write() = v)}
                        </div>

                        <div class="modal-footer">
                            <button
                                type="button"
                                class="btn btn-secondary"
                                disabled=submitting
                                on:click=move |_| on_cancel.run(())
                            >
                                "Cancel"
                            </button>
                            <button type="submit" class="btn btn-primary" disabled=submitting>
                                {move || if submitting() { "Saving..." } else { "Save Changes" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

/// Labelled input bound to one draft field
fn draft_field(
    label: &'static str,
    kind: &'static str,
    value: impl Fn() -> String + Send + Sync + 'static,
    set_value: impl Fn(String) + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div class="mb-3">
            <label class="form-label">{label}</label>
            <input
                type=kind
                class="form-control"
                prop:value=value
                on:input=move |ev| set_value(event_target_value(&ev))
            />
        </div>
    }
}
