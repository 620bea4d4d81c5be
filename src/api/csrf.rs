// SPDX-License-Identifier: MPL-2.0
//! CSRF token capture and lookup.
//!
//! The backend issues its CSRF token as a `csrftoken` cookie on ordinary
//! GET responses. The store absorbs that cookie whenever a response passes
//! through the client and hands the value back to mutating requests as the
//! `X-CSRFToken` header.

use reqwest::header::{HeaderMap, SET_COOKIE};

/// Cookie name the backend uses for its CSRF token.
const CSRF_COOKIE: &str = "csrftoken";

/// Holds the most recently seen CSRF token.
#[derive(Debug, Clone, Default)]
pub struct CsrfStore {
    token: Option<String>,
}

impl CsrfStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current token, or the empty string when none has been
    /// captured yet. Callers must tolerate the empty value: the backend
    /// rejects the request and the caller surfaces a generic error.
    #[must_use]
    pub fn token(&self) -> &str {
        self.token.as_deref().unwrap_or("")
    }

    /// Scans `Set-Cookie` headers for a fresh `csrftoken` value.
    ///
    /// Later headers win. Anything that is not the CSRF cookie is ignored.
    pub fn absorb(&mut self, headers: &HeaderMap) {
        for value in headers.get_all(SET_COOKIE) {
            let Ok(cookie) = value.to_str() else {
                continue;
            };
            if let Some(token) = parse_cookie_value(cookie, CSRF_COOKIE) {
                if !token.is_empty() {
                    self.token = Some(token.to_string());
                }
            }
        }
    }
}

/// Extracts `name=value` from a `Set-Cookie` line, ignoring attributes.
fn parse_cookie_value<'a>(cookie: &'a str, name: &str) -> Option<&'a str> {
    let (pair, _attributes) = cookie.split_once(';').unwrap_or((cookie, ""));
    let (key, value) = pair.split_once('=')?;
    if key.trim() == name {
        Some(value.trim())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers_with(cookies: &[&str]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for cookie in cookies {
            headers.append(SET_COOKIE, HeaderValue::from_str(cookie).expect("ascii"));
        }
        headers
    }

    #[test]
    fn empty_store_returns_empty_string() {
        let store = CsrfStore::new();
        assert_eq!(store.token(), "");
    }

    #[test]
    fn absorbs_the_csrf_cookie() {
        let mut store = CsrfStore::new();
        store.absorb(&headers_with(&[
            "sessionid=abc; Path=/; HttpOnly",
            "csrftoken=tok123; Path=/; SameSite=Lax",
        ]));
        assert_eq!(store.token(), "tok123");
    }

    #[test]
    fn later_cookie_replaces_earlier_token() {
        let mut store = CsrfStore::new();
        store.absorb(&headers_with(&["csrftoken=old"]));
        store.absorb(&headers_with(&["csrftoken=new; Max-Age=31449600"]));
        assert_eq!(store.token(), "new");
    }

    #[test]
    fn unrelated_cookies_leave_the_token_alone() {
        let mut store = CsrfStore::new();
        store.absorb(&headers_with(&["csrftoken=keep"]));
        store.absorb(&headers_with(&["theme=dark; Path=/"]));
        assert_eq!(store.token(), "keep");
    }

    #[test]
    fn empty_cookie_value_is_ignored() {
        let mut store = CsrfStore::new();
        store.absorb(&headers_with(&["csrftoken=keep"]));
        store.absorb(&headers_with(&["csrftoken=; Path=/"]));
        assert_eq!(store.token(), "keep");
    }
}
