//! Backend API
//!
//! JSON wrappers over the meal planner REST API, organized by resource.
//! Every call carries the stored bearer token and is cut off after the
//! configured timeout.

mod auth;
mod error;
mod groups;
mod ingredients;
mod meals;
mod plans;
mod shopping;
mod users;

use std::future::Future;
use std::pin::pin;

use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use log::{debug, warn};
use meal_domain::session::{KeyValueStore, ACCESS_TOKEN_KEY};
use reqwest::header::ACCEPT;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::config;
use crate::storage::LocalStorage;

// Re-export all public items
pub use auth::*;
pub use error::*;
pub use groups::*;
pub use ingredients::*;
pub use meals::*;
pub use plans::*;
pub use shopping::*;
pub use users::*;

// ========================
// Request Plumbing
// ========================

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{base_url}{}", path.trim_start_matches('/'))
}

fn request(method: Method, path: &str) -> RequestBuilder {
    let url = endpoint(&config().api_url, path);
    debug!("[API] {method} {url}");
    let mut builder = reqwest::Client::new()
        .request(method, url)
        .header(ACCEPT, "application/json");
    if let Some(token) = LocalStorage::open().ok().and_then(|s| s.get(ACCESS_TOKEN_KEY)) {
        builder = builder.bearer_auth(token);
    }
    builder
}

async fn with_timeout<F: Future>(future: F) -> ApiResult<F::Output> {
    let timeout_ms = config().timeout_ms;
    let future = pin!(future);
    let timer = pin!(TimeoutFuture::new(timeout_ms));
    match select(future, timer).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => {
            warn!("[API] Request timed out after {timeout_ms} ms");
            Err(ApiError::Timeout(timeout_ms))
        }
    }
}

async fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body);
    warn!("[API] {} {}: {message}", status.as_u16(), status.canonical_reason().unwrap_or(""));
    Err(ApiError::Status { status: status.as_u16(), message })
}

async fn send(builder: RequestBuilder) -> ApiResult<Response> {
    with_timeout(async move {
        let response = builder.send().await?;
        check_status(response).await
    })
    .await?
}

async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> ApiResult<T> {
    with_timeout(async move {
        let response = check_status(builder.send().await?).await?;
        response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    })
    .await?
}

pub(crate) async fn get<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
    send_json(request(Method::GET, path)).await
}

pub(crate) async fn get_with_query<T, Q>(path: &str, query: &Q) -> ApiResult<T>
where
    T: DeserializeOwned,
    Q: Serialize + ?Sized,
{
    send_json(request(Method::GET, path).query(query)).await
}

pub(crate) async fn post<B, T>(path: &str, body: &B) -> ApiResult<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    send_json(request(Method::POST, path).json(body)).await
}

pub(crate) async fn put<B, T>(path: &str, body: &B) -> ApiResult<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    send_json(request(Method::PUT, path).json(body)).await
}

pub(crate) async fn patch<B, T>(path: &str, body: &B) -> ApiResult<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    send_json(request(Method::PATCH, path).json(body)).await
}

/// POST for actions whose response body is not needed
pub(crate) async fn post_action<B: Serialize + ?Sized>(path: &str, body: &B) -> ApiResult<()> {
    send(request(Method::POST, path).json(body)).await.map(|_| ())
}

pub(crate) async fn delete(path: &str) -> ApiResult<()> {
    send(request(Method::DELETE, path)).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_paths() {
        assert_eq!(endpoint("http://127.0.0.1:8000/api/", "meals/"), "http://127.0.0.1:8000/api/meals/");
        assert_eq!(endpoint("http://127.0.0.1:8000/api/", "/plans/3/"), "http://127.0.0.1:8000/api/plans/3/");
    }
}
