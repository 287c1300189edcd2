//! One-shot notices carried in a signed cookie until a page renders them.

use std::sync::Arc;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, SignedCookieJar};

use crate::AppState;

const COOKIE_NAME: &str = "wmdb_flash";

pub struct Flash {
    jar: SignedCookieJar,
    messages: Vec<String>,
}

impl Flash {
    pub fn from_jar(jar: SignedCookieJar) -> Self {
        let messages = jar.get(COOKIE_NAME).map(|c| decode(c.value())).unwrap_or_default();
        Self { jar, messages }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Hands every pending notice to the page being rendered and clears the cookie.
    pub fn take(self) -> (SignedCookieJar, Vec<String>) {
        let jar = self.jar.remove(Cookie::build(COOKIE_NAME).path("/"));
        (jar, self.messages)
    }

    /// Leaves pending notices for the next rendered page. Used on redirects, so a
    /// notice pushed before one is shown on the page the browser lands on.
    pub fn keep(self) -> SignedCookieJar {
        if self.messages.is_empty() {
            return self.jar;
        }
        let cookie = Cookie::build((COOKIE_NAME, encode(&self.messages)))
            .path("/")
            .http_only(true)
            .max_age(time::Duration::minutes(5))
            .build();
        self.jar.add(cookie)
    }
}

impl FromRequestParts<Arc<AppState>> for Flash {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let jar = SignedCookieJar::from_headers(&parts.headers, state.key.clone());
        Ok(Self::from_jar(jar))
    }
}

fn encode(messages: &[String]) -> String {
    let json = serde_json::to_string(messages).unwrap_or_else(|_| "[]".to_string());
    urlencoding::encode(&json).into_owned()
}

fn decode(value: &str) -> Vec<String> {
    urlencoding::decode(value)
        .ok()
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}
