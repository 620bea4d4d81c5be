// SPDX-License-Identifier: MPL-2.0
//! The HTTP client for the notifications API.
//!
//! A thin, cloneable wrapper over `reqwest`: one method per endpoint, each
//! mapping failures into [`ApiError`]. The client owns the shared
//! [`CsrfStore`] and refreshes it from every response that carries the
//! cookie.

use super::csrf::CsrfStore;
use super::model::{MarkReadRequest, MarkReadResponse, NotificationsResponse};
use crate::error::ApiError;
use std::sync::{Arc, Mutex};

/// Header carrying the CSRF token on mutating requests.
const CSRF_HEADER: &str = "X-CSRFToken";

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    csrf: Arc<Mutex<CsrfStore>>,
}

impl ApiClient {
    /// Creates a client against the given backend base URL.
    ///
    /// A trailing slash on the base URL is tolerated and stripped.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
            csrf: Arc::new(Mutex::new(CsrfStore::new())),
        }
    }

    /// The backend base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The current CSRF token ("" until one has been captured).
    #[must_use]
    pub fn csrf_token(&self) -> String {
        self.csrf
            .lock()
            .map(|store| store.token().to_string())
            .unwrap_or_default()
    }

    /// `GET /api/notifications/`.
    ///
    /// Refreshes the CSRF store from the response before decoding, so even
    /// a `{"success": false}` reply leaves a usable token behind.
    pub async fn fetch_notifications(&self) -> Result<NotificationsResponse, ApiError> {
        let url = format!("{}/api/notifications/", self.base_url);
        let response = self.http.get(&url).send().await.map_err(ApiError::from)?;

        if let Ok(mut store) = self.csrf.lock() {
            store.absorb(response.headers());
        }

        let response = response.error_for_status().map_err(ApiError::from)?;
        let body: NotificationsResponse = response.json().await.map_err(ApiError::from)?;

        if body.success {
            Ok(body)
        } else {
            Err(ApiError::Rejected)
        }
    }

    /// `POST /api/notifications/mark-read/`.
    ///
    /// Sends whatever token is currently held, including the empty string;
    /// the backend answers a rejection in that case and the caller surfaces
    /// it as a generic error.
    pub async fn mark_read(&self, request: MarkReadRequest) -> Result<(), ApiError> {
        let url = format!("{}/api/notifications/mark-read/", self.base_url);
        let response = self
            .http
            .post(&url)
            .header(CSRF_HEADER, self.csrf_token())
            .json(&request)
            .send()
            .await
            .map_err(ApiError::from)?;

        if let Ok(mut store) = self.csrf.lock() {
            store.absorb(response.headers());
        }

        let response = response.error_for_status().map_err(ApiError::from)?;
        let body: MarkReadResponse = response.json().await.map_err(ApiError::from)?;

        if body.success {
            Ok(())
        } else {
            Err(ApiError::Rejected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        let client = ApiClient::new("http://localhost:8000///");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn fresh_client_has_empty_token() {
        let client = ApiClient::new("http://localhost:8000");
        assert_eq!(client.csrf_token(), "");
    }

    #[test]
    fn clones_share_the_csrf_store() {
        let client = ApiClient::new("http://localhost:8000");
        let clone = client.clone();

        if let Ok(mut store) = client.csrf.lock() {
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert(
                reqwest::header::SET_COOKIE,
                reqwest::header::HeaderValue::from_static("csrftoken=shared"),
            );
            store.absorb(&headers);
        }

        assert_eq!(clone.csrf_token(), "shared");
    }
}
