//! Resource View Component
//!
//! Fetch-on-mount lifecycle shared by every collection screen: one load per
//! activation, spinner while in flight, dismissible error, empty message or
//! the caller's rendering of the records.

use std::future::Future;
use std::pin::Pin;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::feedback::{EmptyState, ErrorNotice, Spinner};
use crate::state::{ViewState, ViewStatus};

/// Boxed in-flight read of a collection
pub type LoadFuture<T> = Pin<Box<dyn Future<Output = Result<Vec<T>, String>>>>;

/// Starts one read of a collection. Implemented for any
/// `Fn() -> impl Future<Output = Result<Vec<T>, String>>`.
pub trait Loader<T>: Send + Sync + 'static {
    fn start(&self) -> LoadFuture<T>;
}

impl<T, F, Fut> Loader<T> for F
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>, String>> + 'static,
{
    fn start(&self) -> LoadFuture<T> {
        Box::pin(self())
    }
}

/// Generic collection view
///
/// # Arguments
/// * `state` - View state owned by the screen (lets the screen reconcile edits)
/// * `load` - Starts one read of the collection; errors are display strings
/// * `render` - Renders a non-empty collection
/// * `loading_label` - Caption under the spinner, e.g. "Loading users..."
/// * `empty_title` / `empty_hint` - Message when the collection is empty
#[component]
pub fn ResourceView<T, L, R>(
    state: RwSignal<ViewState<T>>,
    load: L,
    render: R,
    #[prop(into)] loading_label: String,
    #[prop(into)] empty_title: String,
    #[prop(into)] empty_hint: String,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    L: Loader<T>,
    R: Fn(Vec<T>) -> AnyView + Send + Sync + 'static,
{
    // Bumped by the refresh button; every change is one activation
    let (activation, set_activation) = signal(0u32);

    Effect::new(move |_| {
        let round = activation.get();
        let Some(ticket) = state.try_update(ViewState::begin) else {
            return;
        };
        log::debug!("[ResourceView] Load #{} started ({:?})", round, ticket);

        let request = load.start();
        spawn_local(async move {
            let outcome = request.await;
            if let Err(e) = &outcome {
                log::error!("[ResourceView] Load #{} failed: {}", round, e);
            }
            match state.try_update(|s| s.resolve(ticket, outcome)) {
                Some(true) => log::debug!("[ResourceView] Load #{} applied", round),
                Some(false) => log::debug!("[ResourceView] Load #{} superseded, discarded", round),
                None => log::debug!("[ResourceView] Load #{} finished after unmount", round),
            }
        });
    });

    let error = move || state.with(|s| s.error().map(str::to_string));
    let dismiss = move |_: ()| state.update(ViewState::dismiss_error);

    view! {
        <div class="resource-view">
            <div class="resource-toolbar d-flex justify-content-end mb-3">
                <button
                    type="button"
                    class="btn btn-outline-secondary btn-sm"
                    disabled=move || state.with(ViewState::is_loading)
                    on:click=move |_| set_activation.update(|n| *n += 1)
                >
                    "Refresh"
                </button>
            </div>

            {move || error().map(|message| view! {
                <ErrorNotice
                    message=message
                    on_dismiss=dismiss
                />
            })}

            {move || {
                let records = state.with(|s| match s.status() {
                    ViewStatus::Loading => None,
                    _ => Some(s.records().to_vec()),
                });
                match records {
                    None => view! { <Spinner label=loading_label.clone() /> }.into_any(),
                    Some(records) if records.is_empty() => view! {
                        <EmptyState title=empty_title.clone() hint=empty_hint.clone() />
                    }.into_any(),
                    Some(records) => render(records),
                }
            }}
        </div>
    }
}
