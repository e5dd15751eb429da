//! Pages
//!
//! One page per backend resource. Each owns its view state exclusively.

mod activities;
mod leaderboard;
mod teams;
mod users;
mod workouts;

pub use activities::ActivitiesPage;
pub use leaderboard::LeaderboardPage;
pub use teams::TeamsPage;
pub use users::UsersPage;
pub use workouts::WorkoutsPage;
