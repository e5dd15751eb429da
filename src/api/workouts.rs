//! Workouts Endpoint

use crate::error::FetchError;
use crate::models::Workout;
use super::ApiClient;

pub const WORKOUTS: &str = "workouts";

pub async fn list_workouts(client: &ApiClient) -> Result<Vec<Workout>, FetchError> {
    client.get_collection(WORKOUTS).await
}
