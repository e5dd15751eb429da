//! Leaderboard Endpoint

use crate::error::FetchError;
use crate::models::LeaderboardEntry;
use super::ApiClient;

pub const LEADERBOARD: &str = "leaderboard";

/// Entries in ranking order (first is the leader)
pub async fn list_leaderboard(client: &ApiClient) -> Result<Vec<LeaderboardEntry>, FetchError> {
    client.get_collection(LEADERBOARD).await
}
