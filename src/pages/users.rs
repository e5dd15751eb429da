//! Users Page
//!
//! User table with inline editing through a modal. A successful save swaps
//! in the record the server returned; a failed save keeps the modal open
//! with the error and the draft intact.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_resource_view::{Column, DataTable, EditSession, ResourceView, ViewState};
use reactive_stores::Store;

use crate::api::{self, use_api};
use crate::components::{PageHeader, UserEditModal};
use crate::format::{text_or, DASH};
use crate::models::{User, UserUpdate};
use crate::store::{DraftStore, UserDraft};

#[component]
pub fn UsersPage() -> impl IntoView {
    let client = use_api();
    let state = RwSignal::new(ViewState::<User>::new());
    let session = RwSignal::new(EditSession::<u64>::Closed);
    let draft: DraftStore = Store::new(UserDraft::default());

    let save_client = client.clone();
    let save = move |_: ()| {
        let Some((id, update)) = begin_save(session, draft) else {
            return;
        };

        let client = save_client.clone();
        spawn_local(async move {
            match api::update_user(&client, id, &update).await {
                Ok(saved) => {
                    log::info!("[Users] Saved user #{}", saved.id);
                    match finish_save(state, session, draft, saved) {
                        Some(true) => {}
                        Some(false) => log::warn!("[Users] Saved user #{} is no longer listed", id),
                        None => log::debug!("[Users] Save of user #{} finished after unmount", id),
                    }
                }
                Err(e) => {
                    log::error!("[Users] Saving user #{} failed: {}", id, e);
                    if session.try_update(|s| s.fail(e.to_string())).is_none() {
                        log::debug!("[Users] Save of user #{} failed after unmount", id);
                    }
                }
            }
        });
    };

    let load = move || {
        let client = client.clone();
        async move { api::list_users(&client).await.map_err(|e| e.to_string()) }
    };

    let render = move |rows: Vec<User>| {
        let columns = user_columns(move |user| open_editor(session, draft, user));
        view! { <DataTable rows=rows columns=columns /> }.into_any()
    };

    let cancel = move |_: ()| close_editor(session, draft);

    view! {
        <section class="page page-users">
            <PageHeader icon="👥" title="Users" />
            <ResourceView
                state=state
                load=load
                render=render
                loading_label="Loading users..."
                empty_title="No users found"
                empty_hint="No user data available at this time."
            />
            <UserEditModal
                session=session
                draft=draft
                on_save=save
                on_cancel=cancel
            />
        </section>
    }
}

fn user_columns<F>(on_edit: F) -> Vec<Column<User>>
where
    F: Fn(User) + Copy + Send + Sync + 'static,
{
    vec![
        Column::text("ID", |u: &User| u.id.to_string()).centered(),
        Column::new("Name", |u: &User| view! {
            <strong>{text_or(u.name.as_deref(), DASH)}</strong>
        }),
        Column::new("Email", |u: &User| {
            u.email.clone().filter(|e| !e.trim().is_empty()).map_or_else(
                || view! { <span>{DASH}</span> }.into_any(),
                |email| view! { <a href=format!("mailto:{}", email)>{email.clone()}</a> }.into_any(),
            )
        }),
        Column::text("Team", |u: &User| text_or(u.team.as_deref(), DASH)),
        Column::text("Age", |u: &User| u.age.map_or_else(|| DASH.to_string(), |a| a.to_string())).centered(),
        Column::new("Actions", move |u: &User| {
            let user = u.clone();
            view! {
                <button
                    type="button"
                    class="btn btn-warning btn-sm"
                    on:click=move |_| on_edit(user.clone())
                >
                    "Edit"
                </button>
            }
        })
        .centered(),
    ]
}

/// Open the modal on `user` and seed the draft from it
fn open_editor(session: RwSignal<EditSession<u64>>, draft: DraftStore, user: User) {
    if session.try_update(|s| s.open(user.id)).unwrap_or(false) {
        log::debug!("[Users] Editing user #{}", user.id);
        draft.try_update(|d| *d = UserDraft::from_user(&user));
    }
}

fn close_editor(session: RwSignal<EditSession<u64>>, draft: DraftStore) {
    if session.try_update(EditSession::cancel).unwrap_or(false) {
        draft.try_update(|d| *d = UserDraft::default());
    }
}

/// Validate the draft and move the session to submitting. A validation
/// error stays in the open modal.
fn begin_save(session: RwSignal<EditSession<u64>>, draft: DraftStore) -> Option<(u64, UserUpdate)> {
    let update = match draft.try_with_untracked(UserDraft::to_update)? {
        Ok(update) => update,
        Err(e) => {
            session.try_update(|s| s.fail(e.to_string()));
            return None;
        }
    };
    let id = session.try_update(EditSession::submit).flatten()?;
    Some((id, update))
}

/// Reconcile a successful save: swap in the server's record, close the
/// session and clear the draft. Returns whether the row was found, or
/// `None` when the page was unmounted while the request was in flight.
fn finish_save(
    state: RwSignal<ViewState<User>>,
    session: RwSignal<EditSession<u64>>,
    draft: DraftStore,
    saved: User,
) -> Option<bool> {
    let found = state.try_update(|view| view.replace(saved))?;
    session.try_update(EditSession::succeed)?;
    draft.try_update(|d| *d = UserDraft::default())?;
    Some(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64, team: &str) -> User {
        User {
            id,
            name: Some("Ada".to_string()),
            email: Some("a@x.com".to_string()),
            team: Some(team.to_string()),
            age: Some(30),
        }
    }

    fn loaded(records: Vec<User>) -> RwSignal<ViewState<User>> {
        let mut view = ViewState::new();
        let ticket = view.begin();
        view.resolve(ticket, Ok(records));
        RwSignal::new(view)
    }

    #[test]
    fn test_edit_team_and_save() {
        let owner = Owner::new();
        owner.with(|| {
            let state = loaded(vec![user(1, "Red")]);
            let session = RwSignal::new(EditSession::<u64>::Closed);
            let draft: DraftStore = Store::new(UserDraft::default());

            open_editor(session, draft, user(1, "Red"));
            assert!(session.with_untracked(EditSession::is_open));
            assert_eq!(draft.with_untracked(|d| d.team.clone()), "Red");

            draft.update(|d| d.team = "Blue".to_string());
            let (id, update) = begin_save(session, draft).unwrap();
            assert_eq!((id, update.team.as_str()), (1, "Blue"));
            assert!(session.with_untracked(EditSession::is_submitting));

            // Draft edits never touch the listed record
            assert_eq!(state.with_untracked(|v| v.records()[0].team.clone()).as_deref(), Some("Red"));

            assert_eq!(finish_save(state, session, draft, user(1, "Blue")), Some(true));
            state.with_untracked(|v| {
                assert_eq!(v.records().len(), 1);
                assert_eq!(v.records()[0].team.as_deref(), Some("Blue"));
            });
            assert!(!session.with_untracked(EditSession::is_open));
            assert_eq!(draft.get_untracked(), UserDraft::default());
        });
    }

    #[test]
    fn test_server_representation_wins_over_draft() {
        let owner = Owner::new();
        owner.with(|| {
            let state = loaded(vec![user(1, "Red")]);
            let session = RwSignal::new(EditSession::<u64>::Closed);
            let draft: DraftStore = Store::new(UserDraft::default());
            open_editor(session, draft, user(1, "Red"));
            draft.update(|d| d.team = "blue".to_string());
            begin_save(session, draft).unwrap();

            // Server normalizes the team name differently from what was typed
            finish_save(state, session, draft, user(1, "BLUE"));
            assert_eq!(state.with_untracked(|v| v.records()[0].team.clone()).as_deref(), Some("BLUE"));
        });
    }

    #[test]
    fn test_invalid_draft_stays_open_with_error() {
        let owner = Owner::new();
        owner.with(|| {
            let session = RwSignal::new(EditSession::<u64>::Closed);
            let draft: DraftStore = Store::new(UserDraft::default());
            open_editor(session, draft, user(1, "Red"));
            draft.update(|d| d.age = "old".to_string());

            assert_eq!(begin_save(session, draft), None);
            session.with_untracked(|s| {
                assert!(s.is_open());
                assert!(!s.is_submitting());
                assert!(s.error().is_some());
            });
        });
    }

    #[test]
    fn test_failed_save_leaves_row_untouched() {
        let mut view = ViewState::new();
        let ticket = view.begin();
        view.resolve(ticket, Ok(vec![user(1, "Red")]));
        let mut session = EditSession::Closed;
        session.open(1);
        session.submit();

        session.fail("HTTP error! status: 400");

        assert!(session.is_open());
        assert_eq!(view.records()[0].team.as_deref(), Some("Red"));
    }

    #[test]
    fn test_save_finishing_after_unmount_is_dropped() {
        let owner = Owner::new();
        let (state, session, draft) = owner.with(|| {
            let session = RwSignal::new(EditSession::<u64>::Closed);
            session.update(|s| {
                s.open(1);
                s.submit();
            });
            (loaded(vec![user(1, "Red")]), session, Store::new(UserDraft::default()))
        });
        drop(owner);

        assert_eq!(finish_save(state, session, draft, user(1, "Blue")), None);
        assert_eq!(session.try_update(|s| s.fail("late")), None);
        assert_eq!(begin_save(session, draft), None);
    }

    /// Browser tests: `wasm-pack test --headless --firefox`
    #[cfg(target_arch = "wasm32")]
    mod web {
        use super::*;
        use gloo_timers::future::TimeoutFuture;
        use leptos::mount::mount_to;
        use wasm_bindgen::JsCast;
        use wasm_bindgen_test::*;
        use web_sys::{Element, Event, EventInit, HtmlElement, HtmlInputElement};

        wasm_bindgen_test_configure!(run_in_browser);

        fn container() -> HtmlElement {
            let document = document();
            let el = document.create_element("div").unwrap();
            document.body().unwrap().append_child(&el).unwrap();
            el.unchecked_into()
        }

        fn select<T: JsCast>(root: &Element, selector: &str) -> T {
            root.query_selector(selector).unwrap().unwrap().unchecked_into()
        }

        fn count(root: &Element, selector: &str) -> u32 {
            root.query_selector_all(selector).unwrap().length()
        }

        fn cells(root: &Element) -> Vec<String> {
            let list = root.query_selector_all("tbody tr td").unwrap();
            (0..list.length())
                .filter_map(|i| list.item(i))
                .map(|n| n.text_content().unwrap_or_default())
                .collect()
        }

        async fn settle() {
            TimeoutFuture::new(20).await;
        }

        /// Users table and modal wired like the page, with the server echoing
        /// the submitted draft back.
        fn mount_users(root: &HtmlElement, records: Vec<User>) {
            mount_to(root.clone(), move || {
                let state = loaded(records);
                let session = RwSignal::new(EditSession::<u64>::Closed);
                let draft: DraftStore = Store::new(UserDraft::default());

                let save = move |_: ()| {
                    if let Some((id, update)) = begin_save(session, draft) {
                        let echoed = User {
                            id,
                            name: Some(update.name),
                            email: Some(update.email),
                            team: Some(update.team),
                            age: update.age.map(i64::from),
                        };
                        finish_save(state, session, draft, echoed);
                    }
                };
                let cancel = move |_: ()| close_editor(session, draft);
                let table = move || {
                    let rows = state.with(|v| v.records().to_vec());
                    let columns = user_columns(move |user| open_editor(session, draft, user));
                    view! { <DataTable rows=rows columns=columns /> }
                };

                view! {
                    {table}
                    <UserEditModal
                        session=session
                        draft=draft
                        on_save=save
                        on_cancel=cancel
                    />
                }
            })
            .forget();
        }

        #[wasm_bindgen_test]
        async fn test_row_shows_record_values() {
            let root = container();
            mount_users(&root, vec![user(42, "Red")]);
            settle().await;

            assert_eq!(count(&root, "tbody tr"), 1);
            let cells = cells(&root);
            assert_eq!(&cells[..5], &["42", "Ada", "a@x.com", "Red", "30"]);
            assert_eq!(count(&root, "tbody .btn-warning"), 1);
        }

        #[wasm_bindgen_test]
        async fn test_save_updates_row_and_closes_modal() {
            let root = container();
            mount_users(&root, vec![user(42, "Red")]);
            settle().await;

            select::<HtmlElement>(&root, "tbody .btn-warning").click();
            settle().await;
            assert_eq!(count(&root, ".modal"), 1);

            let team: HtmlInputElement = root
                .query_selector_all(".modal input")
                .unwrap()
                .item(2)
                .unwrap()
                .unchecked_into();
            assert_eq!(team.value(), "Red");
            team.set_value("Blue");
            let init = EventInit::new();
            init.set_bubbles(true);
            let input = Event::new_with_event_init_dict("input", &init).unwrap();
            team.dispatch_event(&input).unwrap();

            select::<HtmlElement>(&root, ".modal button[type=submit]").click();
            settle().await;

            assert_eq!(count(&root, ".modal"), 0);
            assert_eq!(count(&root, "tbody tr"), 1);
            assert_eq!(cells(&root)[3], "Blue");
        }

        #[wasm_bindgen_test]
        async fn test_cancel_closes_without_touching_row() {
            let root = container();
            mount_users(&root, vec![user(42, "Red")]);
            settle().await;

            select::<HtmlElement>(&root, "tbody .btn-warning").click();
            settle().await;
            select::<HtmlElement>(&root, ".modal .btn-secondary").click();
            settle().await;

            assert_eq!(count(&root, ".modal"), 0);
            assert_eq!(cells(&root)[3], "Red");
        }
    }
}
