use std::collections::HashMap;
use std::time::Duration;

use gloo_net::http::Response;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::log::{debug, warn};

/// Message used when neither the error body nor the status line says anything.
pub const DEFAULT_ERROR_MESSAGE: &str = "Request failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response. `message` is already normalized for display.
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Falha de comunicação com o servidor: {0}")]
    Network(gloo_net::Error),
    #[error("O servidor não respondeu em {0:?}")]
    Timeout(Duration),
    #[error("Parse error: {0}")]
    Parse(serde_json::Error),
    #[error("Serialize error: {0}")]
    Serialize(serde_json::Error),
    #[error("Empty response body")]
    EmptyBody,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Text to show the user.
    ///
    /// Server and transport failures carry their own message. Malformed payloads
    /// are not something the user can act on, so they get `fallback` instead.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            ApiError::Network(_) | ApiError::Timeout(_) => self.to_string(),
            ApiError::Parse(_) | ApiError::Serialize(_) | ApiError::EmptyBody => {
                fallback.to_string()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Header map with case-insensitive keys, the way HTTP treats them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiHeaders(HashMap<String, String>);

impl ApiHeaders {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// The headers every request starts from.
    pub fn json() -> Self {
        let mut headers = Self::new();
        headers.insert("Content-Type", "application/json");
        headers
    }

    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        self.0.insert(key.as_ref().to_ascii_lowercase(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(&key.to_ascii_lowercase()).map(String::as_str)
    }

    /// Layers `overrides` on top of `self`; colliding keys take the override.
    pub fn merged(&self, overrides: &ApiHeaders) -> ApiHeaders {
        let mut merged = self.clone();
        for (key, value) in &overrides.0 {
            merged.0.insert(key.clone(), value.clone());
        }
        merged
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<ApiHeaders> for gloo_net::http::Headers {
    fn from(val: ApiHeaders) -> Self {
        let headers = gloo_net::http::Headers::new();
        for (key, value) in val.0 {
            headers.set(&key, &value);
        }
        headers
    }
}

/// One request against the configured base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Suffix appended to the base URL, e.g. `/pautas/3`.
    pub path: String,
    /// Serialized JSON body.
    pub body: Option<String>,
    /// Caller headers; merged over the client defaults when sent.
    pub headers: ApiHeaders,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            headers: ApiHeaders::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    pub fn post<B>(path: impl Into<String>, body: &B) -> ApiResult<Self>
    where
        B: serde::Serialize + ?Sized,
    {
        Self::new(HttpMethod::Post, path).json(body)
    }

    pub fn json<B>(mut self, body: &B) -> ApiResult<Self>
    where
        B: serde::Serialize + ?Sized,
    {
        self.body = Some(serde_json::to_string(body).map_err(ApiError::Serialize)?);
        Ok(self)
    }

    /// Caller-supplied header; wins over the client's defaults on collision.
    pub fn header(mut self, key: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers.insert(key, value);
        self
    }
}

/// Status line and body of a response, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            status_text: String::new(),
            body: body.into(),
        }
    }

    pub fn with_status_text(mut self, status_text: impl Into<String>) -> Self {
        self.status_text = status_text.into();
        self
    }

    /// Builds a response from a body read that may have failed.
    ///
    /// On success statuses the read error is the result. On error statuses the
    /// body is only a hint for the message, so an unreadable one counts as empty.
    pub fn from_read(
        status: u16,
        status_text: String,
        body: Result<String, gloo_net::Error>,
    ) -> ApiResult<Self> {
        let body = match body {
            Ok(body) => body,
            Err(err) if (200..=299).contains(&status) => return Err(ApiError::Network(err)),
            Err(_) => String::new(),
        };
        Ok(Self {
            status,
            status_text,
            body,
        })
    }

    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// Picks the message for a failed response.
///
/// Preference order: the `message` field of a JSON body, then (only if the body
/// is not JSON at all) the status text, then [`DEFAULT_ERROR_MESSAGE`].
pub fn error_message(body: &str, status_text: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Null) | Err(_) => {
            if status_text.is_empty() {
                DEFAULT_ERROR_MESSAGE.to_string()
            } else {
                status_text.to_string()
            }
        }
        Ok(value) => value
            .get("message")
            .and_then(serde_json::Value::as_str)
            .filter(|message| !message.is_empty())
            .unwrap_or(DEFAULT_ERROR_MESSAGE)
            .to_string(),
    }
}

/// Turns a non-2xx response into [`ApiError::Status`].
pub fn check_status(response: RawResponse) -> ApiResult<RawResponse> {
    if response.is_success() {
        return Ok(response);
    }
    Err(ApiError::Status {
        status: response.status,
        message: error_message(&response.body, &response.status_text),
    })
}

/// Decodes a successful body. `204 No Content` and empty bodies yield `None`.
pub fn decode_body<T>(response: &RawResponse) -> ApiResult<Option<T>>
where
    T: DeserializeOwned,
{
    if response.status == 204 || response.body.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(&response.body)
        .map(Some)
        .map_err(ApiError::Parse)
}

#[async_trait::async_trait(?Send)]
pub trait ApiClient {
    /// Performs exactly one network attempt and returns the raw response.
    async fn execute(&self, request: ApiRequest) -> ApiResult<RawResponse>;

    async fn fetch_json<T>(&self, request: ApiRequest) -> ApiResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        let method = request.method;
        let path = request.path.clone();
        debug!("{} {}", method.as_str(), path);

        let response = match self.execute(request).await.and_then(check_status) {
            Ok(response) => response,
            Err(err) => {
                warn!(status = ?err.status(), "{} {} failed: {}", method.as_str(), path, err);
                return Err(err);
            }
        };
        decode_body(&response)
    }

    /// Like [`ApiClient::fetch_json`], for endpoints that must return a body.
    async fn fetch_value<T>(&self, request: ApiRequest) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        self.fetch_json(request).await?.ok_or(ApiError::EmptyBody)
    }

    /// Like [`ApiClient::fetch_json`], ignoring whatever body comes back.
    async fn fetch_empty(&self, request: ApiRequest) -> ApiResult<()> {
        let _: Option<serde::de::IgnoredAny> = self.fetch_json(request).await?;
        Ok(())
    }

    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        self.fetch_value(ApiRequest::get(endpoint)).await
    }

    async fn delete(&self, endpoint: &str) -> ApiResult<()> {
        self.fetch_empty(ApiRequest::delete(endpoint)).await
    }
}

pub struct HttpApiClient {
    root_url: String,
    headers: ApiHeaders,
    timeout: Option<Duration>,
}

impl HttpApiClient {
    pub fn new(root_url: impl Into<String>) -> Self {
        Self {
            root_url: root_url.into(),
            headers: ApiHeaders::json(),
            timeout: None,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        let mut client = Self::new(config.base_url.clone());
        client.timeout = config.timeout;
        client
    }

    pub fn root_url(&self) -> &str {
        &self.root_url
    }

    async fn send(&self, request: ApiRequest) -> ApiResult<RawResponse> {
        let url = format!("{}{}", self.root_url, request.path);

        let builder = match request.method {
            HttpMethod::Get => gloo_net::http::Request::get(&url),
            HttpMethod::Post => gloo_net::http::Request::post(&url),
            HttpMethod::Delete => gloo_net::http::Request::delete(&url),
        }
        .headers(self.headers.merged(&request.headers).into());

        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(ApiError::Network)?;

        let response = prepared.send().await.map_err(ApiError::Network)?;
        read_response(response).await
    }
}

async fn read_response(response: Response) -> ApiResult<RawResponse> {
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await;
    RawResponse::from_read(status, status_text, body)
}

#[async_trait::async_trait(?Send)]
impl ApiClient for HttpApiClient {
    async fn execute(&self, request: ApiRequest) -> ApiResult<RawResponse> {
        let Some(limit) = self.timeout else {
            return self.send(request).await;
        };

        let millis = u32::try_from(limit.as_millis()).unwrap_or(u32::MAX);
        let send = Box::pin(self.send(request));
        let timer = gloo_timers::future::TimeoutFuture::new(millis);

        match futures::future::select(send, timer).await {
            futures::future::Either::Left((result, _)) => result,
            futures::future::Either::Right(_) => Err(ApiError::Timeout(limit)),
        }
    }
}
