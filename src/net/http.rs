//! Low-level request plumbing shared by both API bindings.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, bearer token attached
//! when the caller supplies one. Native builds: stubs returning
//! [`ApiError::Unsupported`] so the pure core still compiles and tests.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Status`] with the backend's JSON
//! `{ "message": ... }` body when present. Nothing here retries or
//! intercepts; failures propagate to the calling page unchanged.

#![allow(clippy::unused_async)]

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

/// Fixed backend origin; both bindings point here and there is no
/// per-request override.
pub const API_BASE: &str = "https://13.61.190.197/api";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure (DNS, refused connection, aborted request).
    #[error("network error: {0}")]
    Network(String),
    /// Backend answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// 2xx response whose body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Not available outside the browser build.
    #[error("HTTP is not available in this build")]
    Unsupported,
}

/// Full URL for an API path (`path` starts with `/`).
pub(crate) fn url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Authorization header value for an optional token. `None` in, `None` out:
/// requests without a session go out bare.
pub(crate) fn bearer(token: Option<String>) -> Option<String> {
    token.map(|t| format!("Bearer {t}"))
}

#[cfg(feature = "csr")]
mod browser {
    use super::{ApiError, bearer, url};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    fn with_auth(
        req: gloo_net::http::RequestBuilder,
        token: Option<String>,
    ) -> gloo_net::http::RequestBuilder {
        match bearer(token) {
            Some(value) => req.header("Authorization", &value),
            None => req,
        }
    }

    async fn read<T: DeserializeOwned>(
        resp: gloo_net::http::Response,
    ) -> Result<T, ApiError> {
        if !resp.ok() {
            return Err(status_error(resp).await);
        }
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn status_error(resp: gloo_net::http::Response) -> ApiError {
        let status = resp.status();
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            message: String,
        }
        let message = match resp.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => format!("request failed with status {status}"),
        };
        ApiError::Status { status, message }
    }

    pub async fn get_json<T: DeserializeOwned>(
        path: &str,
        token: Option<String>,
    ) -> Result<T, ApiError> {
        let resp = with_auth(gloo_net::http::Request::get(&url(path)), token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read(resp).await
    }

    pub async fn send_json<T: DeserializeOwned, B: Serialize>(
        method: &str,
        path: &str,
        token: Option<String>,
        body: &B,
    ) -> Result<T, ApiError> {
        let builder = match method {
            "POST" => gloo_net::http::Request::post(&url(path)),
            "PUT" => gloo_net::http::Request::put(&url(path)),
            "PATCH" => gloo_net::http::Request::patch(&url(path)),
            _ => gloo_net::http::Request::delete(&url(path)),
        };
        let req = with_auth(builder, token)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read(resp).await
    }

    /// Variant for endpoints whose success body we never consume.
    pub async fn send_unit<B: Serialize>(
        method: &str,
        path: &str,
        token: Option<String>,
        body: &B,
    ) -> Result<(), ApiError> {
        let builder = match method {
            "POST" => gloo_net::http::Request::post(&url(path)),
            "PUT" => gloo_net::http::Request::put(&url(path)),
            "PATCH" => gloo_net::http::Request::patch(&url(path)),
            _ => gloo_net::http::Request::delete(&url(path)),
        };
        let req = with_auth(builder, token)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.ok() {
            Ok(())
        } else {
            Err(status_error(resp).await)
        }
    }
}

pub(crate) async fn get_json<T: DeserializeOwned>(
    path: &str,
    token: Option<String>,
) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        browser::get_json(path, token).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, token);
        Err(ApiError::Unsupported)
    }
}

pub(crate) async fn send_json<T: DeserializeOwned, B: Serialize>(
    method: &str,
    path: &str,
    token: Option<String>,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        browser::send_json(method, path, token, body).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (method, path, token, body);
        Err(ApiError::Unsupported)
    }
}

pub(crate) async fn send_unit<B: Serialize>(
    method: &str,
    path: &str,
    token: Option<String>,
    body: &B,
) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        browser::send_unit(method, path, token, body).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (method, path, token, body);
        Err(ApiError::Unsupported)
    }
}
