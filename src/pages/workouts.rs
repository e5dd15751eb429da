//! Workouts Page

use leptos::prelude::*;
use leptos_resource_view::{Column, DataTable, ResourceView, ViewState};

use crate::api::{self, use_api};
use crate::components::PageHeader;
use crate::format::{number_or_zero, text_or, DASH};
use crate::models::Workout;

#[component]
pub fn WorkoutsPage() -> impl IntoView {
    let client = use_api();
    let state = RwSignal::new(ViewState::<Workout>::new());

    let load = move || {
        let client = client.clone();
        async move { api::list_workouts(&client).await.map_err(|e| e.to_string()) }
    };

    let render = |rows: Vec<Workout>| {
        view! { <DataTable rows=rows columns=workout_columns() numbered=true /> }.into_any()
    };

    view! {
        <section class="page page-workouts">
            <PageHeader icon="💪" title="Workouts" />
            <ResourceView
                state=state
                load=load
                render=render
                loading_label="Loading workouts..."
                empty_title="No workouts found"
                empty_hint="No workout routines are available yet."
            />
        </section>
    }
}

fn workout_columns() -> Vec<Column<Workout>> {
    vec![
        Column::new("Title", |w: &Workout| view! {
            <strong>{text_or(w.title.as_deref(), DASH)}</strong>
        }),
        Column::new("Description", |w: &Workout| view! {
            <small class="text-muted">{text_or(w.description.as_deref(), DASH)}</small>
        }),
        Column::new("Difficulty", |w: &Workout| {
            let class = format!("badge bg-{}", w.difficulty_variant());
            view! { <span class=class>{w.difficulty_label()}</span> }
        })
        .centered(),
        Column::text("Duration (min)", |w: &Workout| number_or_zero(w.duration)).centered(),
        Column::new("Calories", |w: &Workout| view! {
            <span class="badge bg-warning text-dark">{number_or_zero(w.calories_burned)}</span>
        })
        .centered(),
    ]
}
