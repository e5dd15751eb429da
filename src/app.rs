//! OctoFit Frontend App
//!
//! Root component: provides the configured API client, then mounts
//! the selected screen.

use leptos::prelude::*;

use crate::api::provide_api;
use crate::components::{Screen, ScreenTabBar};
use crate::config::AppConfig;
use crate::pages::{ActivitiesPage, LeaderboardPage, TeamsPage, UsersPage, WorkoutsPage};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_api(config);

    let (screen, set_screen) = signal(Screen::Activities);

    view! {
        <div class="app-layout container mt-4 mb-5">
            <h1 class="app-title">"OctoFit Tracker"</h1>

            <ScreenTabBar current=screen set_current=set_screen />

            <main class="main-content">
                {move || match screen.get() {
                    Screen::Activities => view! { <ActivitiesPage /> }.into_any(),
                    Screen::Users => view! { <UsersPage /> }.into_any(),
                    Screen::Teams => view! { <TeamsPage /> }.into_any(),
                    Screen::Workouts => view! { <WorkoutsPage /> }.into_any(),
                    Screen::Leaderboard => view! { <LeaderboardPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
