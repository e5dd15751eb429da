//! Users Endpoint
//!
//! The only writable resource.

use crate::error::FetchError;
use crate::models::{User, UserUpdate};
use super::ApiClient;

pub const USERS: &str = "users";

pub async fn list_users(client: &ApiClient) -> Result<Vec<User>, FetchError> {
    client.get_collection(USERS).await
}

/// Replace a user's editable fields. Returns the record as the server
/// stored it, which may differ from what was sent.
pub async fn update_user(client: &ApiClient, id: u64, update: &UserUpdate) -> Result<User, FetchError> {
    client.put_record(USERS, id, update).await
}
