//! Teams Page
//!
//! Teams render as a card grid rather than a table.

use leptos::prelude::*;
use leptos_resource_view::{ResourceView, ViewState};

use crate::api::{self, use_api};
use crate::components::PageHeader;
use crate::format::text_or;
use crate::models::Team;

#[component]
pub fn TeamsPage() -> impl IntoView {
    let client = use_api();
    let state = RwSignal::new(ViewState::<Team>::new());

    let load = move || {
        let client = client.clone();
        async move { api::list_teams(&client).await.map_err(|e| e.to_string()) }
    };

    let render = |teams: Vec<Team>| {
        view! {
            <div class="row">
                {teams.into_iter().map(|team| view! { <TeamCard team=team /> }).collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <section class="page page-teams">
            <PageHeader icon="🤝" title="Teams" />
            <ResourceView
                state=state
                load=load
                render=render
                loading_label="Loading teams..."
                empty_title="No teams found"
                empty_hint="Create a team to start competing together."
            />
        </section>
    }
}

#[component]
fn TeamCard(team: Team) -> impl IntoView {
    let members = team.member_count.unwrap_or(0);

    view! {
        <div class="col-md-6 col-lg-4 mb-4">
            <div class="card h-100 shadow-sm">
                <div class="card-header">
                    <h5 class="card-title mb-0">{text_or(team.name.as_deref(), "Unnamed team")}</h5>
                </div>
                <div class="card-body">
                    <p class="text-muted">
                        {text_or(team.description.as_deref(), "No description provided")}
                    </p>
                    <div class="text-center">
                        <h5 class="mb-1"><span class="badge bg-primary">{members}</span></h5>
                        <small class="text-muted">"Members"</small>
                    </div>
                </div>
            </div>
        </div>
    }
}
