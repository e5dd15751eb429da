//! Activities Page

use leptos::prelude::*;
use leptos_resource_view::{Column, DataTable, ResourceView, ViewState};

use crate::api::{self, use_api};
use crate::components::PageHeader;
use crate::format::{format_timestamp, number_or_zero, text_or, DASH};
use crate::models::Activity;

#[component]
pub fn ActivitiesPage() -> impl IntoView {
    let client = use_api();
    let state = RwSignal::new(ViewState::<Activity>::new());

    let load = move || {
        let client = client.clone();
        async move { api::list_activities(&client).await.map_err(|e| e.to_string()) }
    };

    let render = |rows: Vec<Activity>| {
        view! { <DataTable rows=rows columns=activity_columns() numbered=true /> }.into_any()
    };

    view! {
        <section class="page page-activities">
            <PageHeader icon="🏃" title="Activities" />
            <ResourceView
                state=state
                load=load
                render=render
                loading_label="Loading activities..."
                empty_title="No activities found"
                empty_hint="Start by logging an activity or check back later."
            />
        </section>
    }
}

fn activity_columns() -> Vec<Column<Activity>> {
    vec![
        Column::new("User", |a: &Activity| view! {
            <strong>{text_or(a.user_name.as_deref(), DASH)}</strong>
        }),
        Column::new("Type", |a: &Activity| view! {
            <span class="badge bg-info text-dark">{text_or(a.activity_type.as_deref(), DASH)}</span>
        })
        .centered(),
        Column::text("Date", |a: &Activity| format_timestamp(a.timestamp.as_deref())).centered(),
        Column::new("Calories Burned", |a: &Activity| view! {
            <span class="badge bg-warning text-dark">{number_or_zero(a.calories_burned)}</span>
        })
        .centered(),
        Column::text("Duration (min)", |a: &Activity| number_or_zero(a.duration)).centered(),
    ]
}
