use std::time::Duration;

use base64::Engine;
use haystack_core::pinboard::posts::tag_filter_params;
use haystack_core::pinboard::wire::{RawAllPostsResponse, RawTagsResponse};
use haystack_core::pinboard::Credentials;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;

use crate::error::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.pinboard.in";
pub const TAGS_PATH: &str = "/v1/tags/get";
pub const POSTS_PATH: &str = "/v1/posts/all";

/// Read-only Pinboard API client.
///
/// Credentials are fixed at construction: a token rides along as the
/// `auth_token` query parameter, basic credentials as a default header.
#[derive(Debug)]
pub struct PinboardClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
    timeout: Duration,
}

impl PinboardClient {
    pub fn new(base_url: &str, credentials: Credentials, timeout: Duration) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        if let Credentials::Basic { user, password } = &credentials {
            headers.insert(AUTHORIZATION, basic_auth_header(user, password)?);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .user_agent(concat!("haystack/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Transport(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            timeout,
        })
    }

    /// `GET /v1/tags/get`
    pub async fn get_tags(&self) -> Result<RawTagsResponse, Error> {
        self.fetch_json(TAGS_PATH, &[]).await
    }

    /// `GET /v1/posts/all`, AND-filtered by `tags` on the server.
    pub async fn get_posts(&self, tags: &[String]) -> Result<RawAllPostsResponse, Error> {
        self.fetch_json(POSTS_PATH, &tag_filter_params(tags)).await
    }

    /// Issue one GET against `path` and decode the JSON body.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = format!("{}{}", self.base_url, path);
        let query = self.query(params);

        debug!(
            "GET {} params={:?} auth={}",
            url,
            params.iter().map(|(k, _)| *k).collect::<Vec<_>>(),
            self.credentials.mode()
        );

        let response = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Remote { status, body });
        }

        let body = response.json::<T>().await.map_err(|e| self.classify(e))?;
        debug!("{} decoded", path);

        Ok(body)
    }

    fn query<'a>(&'a self, params: &'a [(&'a str, String)]) -> Vec<(&'a str, &'a str)> {
        let mut query = vec![("format", "json")];
        if let Credentials::Token(token) = &self.credentials {
            query.push(("auth_token", token.as_str()));
        }
        query.extend(params.iter().map(|(key, value)| (*key, value.as_str())));
        query
    }

    fn classify(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout(self.timeout)
        } else if err.is_decode() {
            Error::Decode(err.to_string())
        } else {
            Error::Transport(err.to_string())
        }
    }
}

fn basic_auth_header(user: &str, password: &str) -> Result<HeaderValue, Error> {
    let encoded = base64::engine::general_purpose::STANDARD.encode(format!("{user}:{password}"));
    let mut value = HeaderValue::from_str(&format!("Basic {encoded}"))
        .map_err(|e| Error::Transport(format!("Invalid header value: {e}")))?;
    value.set_sensitive(true);
    Ok(value)
}
