//! Teams Endpoint

use crate::error::FetchError;
use crate::models::Team;
use super::ApiClient;

pub const TEAMS: &str = "teams";

pub async fn list_teams(client: &ApiClient) -> Result<Vec<Team>, FetchError> {
    client.get_collection(TEAMS).await
}
