//! Frontend Models
//!
//! Records as served by the REST backend. Everything except `id` may be
//! null or absent, so fields are optional and display code picks fallbacks.

use leptos_resource_view::Keyed;
use serde::{Deserialize, Serialize};

/// Activity log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u64,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub activity_type: Option<String>,
    /// RFC 3339 timestamp
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub calories_burned: Option<f64>,
    /// Minutes
    #[serde(default)]
    pub duration: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    /// Older backends call this `username`
    #[serde(default, alias = "username")]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    /// Backend stores a plain integer; negative values are possible
    #[serde(default)]
    pub age: Option<i64>,
}

/// Body of `PUT /users/{id}/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    pub team: String,
    pub age: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub member_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub calories_burned: Option<f64>,
}

/// Leaderboard row. Order in the response is the ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub total_calories: Option<f64>,
    /// Minutes
    #[serde(default)]
    pub total_duration: Option<f64>,
}

impl Keyed for User {
    type Key = u64;
    fn key(&self) -> u64 { self.id }
}

// ========================
// Derived display values
// ========================

/// Workout difficulty, case-insensitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Other,
}

impl Difficulty {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "easy" => Self::Easy,
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            _ => Self::Other,
        }
    }

    /// Bootstrap badge variant
    pub fn variant(self) -> &'static str {
        match self {
            Self::Easy => "success",
            Self::Medium => "warning",
            Self::Hard => "danger",
            Self::Other => "secondary",
        }
    }
}

impl Workout {
    pub fn difficulty_variant(&self) -> &'static str {
        self.difficulty
            .as_deref()
            .map_or(Difficulty::Other, Difficulty::parse)
            .variant()
    }

    /// Capitalized difficulty, `N/A` when missing
    pub fn difficulty_label(&self) -> String {
        match self.difficulty.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
            Some(d) => {
                let mut chars = d.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
            None => "N/A".to_string(),
        }
    }
}

/// Badge shown next to a leaderboard position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankBadge {
    pub emoji: &'static str,
    pub variant: &'static str,
    pub label: &'static str,
}

impl RankBadge {
    /// `rank` is 1-based
    pub fn for_rank(rank: usize) -> Self {
        match rank {
            1 => Self { emoji: "🥇", variant: "warning", label: "Champion" },
            2 => Self { emoji: "🥈", variant: "secondary", label: "Runner-up" },
            3 => Self { emoji: "🥉", variant: "warning", label: "Third Place" },
            _ => Self { emoji: "🏅", variant: "secondary", label: "Competitor" },
        }
    }
}

/// Leaderboard entry with its 1-based position
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub rank: usize,
    pub entry: LeaderboardEntry,
}

impl RankedEntry {
    pub fn badge(&self) -> RankBadge {
        RankBadge::for_rank(self.rank)
    }
}

/// Number entries by response order
pub fn rank_entries(entries: Vec<LeaderboardEntry>) -> Vec<RankedEntry> {
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| RankedEntry { rank: i + 1, entry })
        .collect()
}
