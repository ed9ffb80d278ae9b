//! HTTP helpers for the HallSync REST API with consistent timeouts, bearer
//! authentication and error handling. Feature clients use these helpers so no
//! route builds requests by hand. The token is read from storage per request
//! and never logged.

use super::{
    config::AppConfig,
    errors::AppError,
    query::{QueryParams, join_url},
    storage,
};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::to_string;
use web_sys::AbortController;

#[derive(Clone, Copy, Debug)]
enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    fn builder(self, url: &str) -> RequestBuilder {
        match self {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Patch => Request::patch(url),
            Method::Delete => Request::delete(url),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// Fetches JSON, appending any non-empty query parameters.
pub async fn get_json<T: DeserializeOwned>(path: &str, query: &QueryParams) -> Result<T, AppError> {
    let response = send(Method::Get, &query.apply(path), None).await?;
    handle_json_response(response).await
}

/// Posts a JSON body and parses a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let response = send(Method::Post, path, Some(encode(body)?)).await?;
    handle_json_response(response).await
}

/// Posts a JSON body and ignores the response payload.
pub async fn post_empty<B: Serialize>(path: &str, body: &B) -> Result<(), AppError> {
    let response = send(Method::Post, path, Some(encode(body)?)).await?;
    handle_empty_response(response).await
}

/// Replaces a resource and parses the updated representation.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let response = send(Method::Put, path, Some(encode(body)?)).await?;
    handle_json_response(response).await
}

/// Patches a resource with a JSON body and parses the response.
pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let response = send(Method::Patch, path, Some(encode(body)?)).await?;
    handle_json_response(response).await
}

/// Sends a body-less PATCH, used for state toggles (block, verify, cancel).
pub async fn patch_empty(path: &str) -> Result<(), AppError> {
    let response = send(Method::Patch, path, None).await?;
    handle_empty_response(response).await
}

/// Deletes a resource and ignores the response payload.
pub async fn delete_empty(path: &str) -> Result<(), AppError> {
    let response = send(Method::Delete, path, None).await?;
    handle_empty_response(response).await
}

fn encode<B: Serialize>(body: &B) -> Result<String, AppError> {
    to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))
}

/// Builds and sends a request with the bearer token attached when present.
/// A 401 on an authenticated request ends the local session.
async fn send(method: Method, path: &str, body: Option<String>) -> Result<Response, AppError> {
    let config = AppConfig::load();
    let url = join_url(&config.api_base_url, path);
    let token = storage::token();
    let authenticated = token.is_some();

    tracing::debug!(method = method.as_str(), path, "api request");

    let response = send_with_timeout(config.request_timeout_ms, move |signal| {
        let mut builder = method
            .builder(&url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal));

        if let Some(token) = token.as_deref() {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        match body {
            Some(payload) => builder.body(payload),
            None => builder.build(),
        }
        .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    if response.status() == 401 && authenticated {
        tracing::info!(path, "session rejected by api, signing out");
        expire_session();
        return Err(AppError::Unauthorized);
    }

    Ok(response)
}

/// Clears the stored session and sends the browser to the login page.
fn expire_session() {
    storage::clear_session();
    if let Some(window) = web_sys::window() {
        let on_login = window
            .location()
            .pathname()
            .map(|path| path == "/login")
            .unwrap_or(false);
        if !on_login {
            let _ = window.location().set_href("/login");
        }
    }
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    timeout_ms: u32,
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, AppError>,
) -> Result<Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(timeout_ms, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses and surfaces HTTP errors with the backend message.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(http_error(response).await)
    }
}

/// Accepts any successful response and discards its body.
async fn handle_empty_response(response: Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        Err(http_error(response).await)
    }
}

async fn http_error(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let err = AppError::from_response(status, &body);
    tracing::warn!(status, error = %err, "api request failed");
    err
}
