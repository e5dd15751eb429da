//! REST API Client
//!
//! HTTP bindings to the backend, organized by resource.

mod activities;
mod leaderboard;
mod teams;
mod users;
mod workouts;

use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_resource_view::extract_collection;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::AbortController;

use crate::config::AppConfig;
use crate::error::{check_status, FetchError};

// Re-export all public items
pub use activities::*;
pub use leaderboard::*;
pub use teams::*;
pub use users::*;
pub use workouts::*;

/// Backend client. Cheap to clone; holds only configuration.
#[derive(Clone, Debug)]
pub struct ApiClient {
    config: AppConfig,
}

impl ApiClient {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// `GET {base}/{resource}/`, accepting bare arrays and `results` envelopes
    pub async fn get_collection<T: DeserializeOwned>(&self, resource: &str) -> Result<Vec<T>, FetchError> {
        let url = self.config.endpoint(resource);
        log::info!("[API] Fetching {} from: {}", resource, url);

        let body = self.send(Request::get(&url), None).await?;
        let records = decode_collection(&body)?;

        log::info!("[API] Loaded {} {} records", records.len(), resource);
        Ok(records)
    }

    /// `PUT {base}/{resource}/{id}/` with a JSON body; returns the server's copy
    pub async fn put_record<B, T>(&self, resource: &str, id: u64, payload: &B) -> Result<T, FetchError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.config.record_endpoint(resource, id);
        log::info!("[API] Updating {} #{} at: {}", resource, id, url);

        let json = serde_json::to_string(payload)?;
        let body = self.send(Request::put(&url), Some(json)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Send with the configured timeout and return the body of a 2xx response
    async fn send(&self, builder: RequestBuilder, json: Option<String>) -> Result<String, FetchError> {
        let millis = self.config.request_timeout_ms;
        let controller = AbortController::new()
            .map_err(|e| FetchError::Network(format!("{:?}", e)))?;
        let signal = controller.signal();

        let timed_out = Rc::new(Cell::new(false));
        let timer = {
            let timed_out = Rc::clone(&timed_out);
            Timeout::new(millis, move || {
                timed_out.set(true);
                controller.abort();
            })
        };

        let builder = builder
            .header("Accept", "application/json")
            .abort_signal(Some(&signal));
        let request = match json {
            Some(json) => builder.header("Content-Type", "application/json").body(json)?,
            None => builder.build()?,
        };

        // The timer stays armed until the body is fully read
        let exchange = async {
            let response = request.send().await?;
            check_status(response.status())?;
            Ok::<_, FetchError>(response.text().await?)
        };
        let result = exchange.await;
        drop(timer);

        expire(result, timed_out.get(), millis)
    }
}

/// Report a failure caused by the abort timer as a timeout, whether the
/// abort hit the request or the body read.
fn expire(result: Result<String, FetchError>, timed_out: bool, millis: u32) -> Result<String, FetchError> {
    match result {
        Err(FetchError::Network(_) | FetchError::Decode(_)) if timed_out => {
            log::warn!("[API] Request aborted after {} ms", millis);
            Err(FetchError::Timeout { millis })
        }
        other => other,
    }
}

/// Parse a collection body. Non-collection JSON is an empty list; invalid
/// JSON or a record that does not fit `T` is a decode error.
pub fn decode_collection<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, FetchError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    extract_collection(value)
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<Vec<T>, _>>()
        .map_err(FetchError::from)
}

pub fn provide_api(config: AppConfig) {
    provide_context(ApiClient::new(config));
}

pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}
