//! Activities Endpoint

use crate::error::FetchError;
use crate::models::Activity;
use super::ApiClient;

pub const ACTIVITIES: &str = "activities";

pub async fn list_activities(client: &ApiClient) -> Result<Vec<Activity>, FetchError> {
    client.get_collection(ACTIVITIES).await
}
