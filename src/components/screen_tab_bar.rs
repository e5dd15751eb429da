//! Screen Tab Bar Component
//!
//! Switches which resource screen is mounted. Switching unmounts the old
//! screen (dropping its state) and activates the new one.

use leptos::prelude::*;

/// Dashboard screens, in tab order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    Activities,
    Users,
    Teams,
    Workouts,
    Leaderboard,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Activities,
        Screen::Users,
        Screen::Teams,
        Screen::Workouts,
        Screen::Leaderboard,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Screen::Activities => "Activities",
            Screen::Users => "Users",
            Screen::Teams => "Teams",
            Screen::Workouts => "Workouts",
            Screen::Leaderboard => "Leaderboard",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Screen::Activities => "🏃",
            Screen::Users => "👥",
            Screen::Teams => "🤝",
            Screen::Workouts => "💪",
            Screen::Leaderboard => "🏆",
        }
    }
}

/// Screen Tab Bar component
#[component]
pub fn ScreenTabBar(
    current: ReadSignal<Screen>,
    set_current: WriteSignal<Screen>,
) -> impl IntoView {
    view! {
        <nav class="screen-tab-bar nav nav-tabs mb-4">
            <For
                each=|| Screen::ALL
                key=|screen| *screen
                children=move |screen| {
                    let tab_class = move || {
                        if current.get() == screen { "nav-link active" } else { "nav-link" }
                    };

                    view! {
                        <button
                            type="button"
                            class=tab_class
                            on:click=move |_| {
                                if current.get_untracked() != screen {
                                    log::debug!("[Tabs] Switching to {}", screen.label());
                                    set_current.set(screen);
                                }
                            }
                        >
                            {screen.icon()} " " {screen.label()}
                        </button>
                    }
                }
            />
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_screen_has_a_tab() {
        let labels: Vec<_> = Screen::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Activities", "Users", "Teams", "Workouts", "Leaderboard"]);
    }
}
