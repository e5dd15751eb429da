//! Leaderboard Page
//!
//! Response order is the ranking. The leader also gets a featured card.

use leptos::prelude::*;
use leptos_resource_view::{Column, DataTable, ResourceView, ViewState};

use crate::api::{self, use_api};
use crate::components::PageHeader;
use crate::format::{number_or_zero, text_or};
use crate::models::{rank_entries, LeaderboardEntry, RankedEntry};

#[component]
pub fn LeaderboardPage() -> impl IntoView {
    let client = use_api();
    let state = RwSignal::new(ViewState::<LeaderboardEntry>::new());

    let load = move || {
        let client = client.clone();
        async move { api::list_leaderboard(&client).await.map_err(|e| e.to_string()) }
    };

    let render = |entries: Vec<LeaderboardEntry>| {
        let ranked = rank_entries(entries);
        let leader = ranked.first().cloned();
        view! {
            <div class="row">
                {leader.map(|leader| view! {
                    <div class="col-md-4 col-lg-3 mb-4">
                        <TopPerformerCard leader=leader />
                    </div>
                })}
                <div class="col mb-4">
                    <DataTable rows=ranked columns=leaderboard_columns() />
                </div>
            </div>
        }
        .into_any()
    };

    view! {
        <section class="page page-leaderboard">
            <PageHeader
                icon="🏆"
                title="Leaderboard"
                subtitle="Top performers across all activities and teams"
            />
            <ResourceView
                state=state
                load=load
                render=render
                loading_label="Loading leaderboard..."
                empty_title="No leaderboard data available"
                empty_hint="Complete some activities to appear on the leaderboard!"
            />
        </section>
    }
}

/// Featured card for rank 1
#[component]
fn TopPerformerCard(leader: RankedEntry) -> impl IntoView {
    let badge = leader.badge();
    let entry = leader.entry;

    view! {
        <div class="card text-center shadow-sm h-100 top-player">
            <div class="card-body pt-4">
                <div class="mb-3"><span class="top-player-emoji">{badge.emoji}</span></div>
                <h5 class="card-title">{text_or(entry.user_name.as_deref(), "N/A")}</h5>
                <p class="text-muted mb-3">{text_or(entry.team.as_deref(), "No Team")}</p>
                <div class="row g-2">
                    <div class="col-6">
                        <div class="p-2 bg-light rounded">
                            <p class="mb-0 fw-bold text-primary">{number_or_zero(entry.total_calories)}</p>
                            <small class="text-muted">"Calories"</small>
                        </div>
                    </div>
                    <div class="col-6">
                        <div class="p-2 bg-light rounded">
                            <p class="mb-0 fw-bold text-success">{number_or_zero(entry.total_duration)}</p>
                            <small class="text-muted">"Minutes"</small>
                        </div>
                    </div>
                </div>
                <span class=format!("badge bg-{} mt-3", badge.variant)>"1st Place"</span>
            </div>
        </div>
    }
}

fn leaderboard_columns() -> Vec<Column<RankedEntry>> {
    vec![
        Column::new("Rank", |r: &RankedEntry| {
            let badge = r.badge();
            view! {
                <div><span class="rank-emoji">{badge.emoji}</span></div>
                <strong>"#" {r.rank}</strong>
            }
        })
        .centered(),
        Column::new("Username", |r: &RankedEntry| view! {
            <strong>{text_or(r.entry.user_name.as_deref(), "N/A")}</strong>
        }),
        Column::text("Team", |r: &RankedEntry| text_or(r.entry.team.as_deref(), "No Team")),
        Column::new("Total Calories", |r: &RankedEntry| view! {
            <span class="badge bg-primary">{number_or_zero(r.entry.total_calories)}</span>
        })
        .centered(),
        Column::new("Duration (min)", |r: &RankedEntry| view! {
            <span class="badge bg-success">{number_or_zero(r.entry.total_duration)}</span>
        })
        .centered(),
        Column::new("Status", |r: &RankedEntry| {
            let badge = r.badge();
            view! { <span class=format!("badge bg-{}", badge.variant)>{badge.label}</span> }
        })
        .centered(),
    ]
}
