//! Request extractors
//!
//! Everything a handler needs from the request is turned into a typed value
//! here, so malformed input is rejected before any action logic runs.

use crate::error::ServerError;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequest, FromRequestParts, Path, Request},
    http::{header, request::Parts, HeaderMap, StatusCode},
};
use mixtape_core::{PlaylistId, PlaylistParams, SongParams};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::convert::Infallible;

/// Representation the client asked for via `Accept`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Html,
    Script,
    Json,
}

impl ResponseFormat {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let accept = headers
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        // First recognised media type wins, matching browser and XHR habits
        for media in accept.split(',') {
            let media = media.split(';').next().unwrap_or_default().trim();
            match media {
                "application/json" => return Self::Json,
                "text/javascript" | "application/javascript" | "application/ecmascript" => {
                    return Self::Script
                }
                "text/html" => return Self::Html,
                _ => {}
            }
        }

        Self::Html
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for ResponseFormat
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

/// `:id` path segment parsed as a playlist id
#[derive(Debug, Clone, Copy)]
pub struct PlaylistPath(pub PlaylistId);

#[axum::async_trait]
impl<S> FromRequestParts<S> for PlaylistPath
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ServerError::BadRequest(e.body_text()))?;

        raw.parse::<PlaylistId>()
            .map(PlaylistPath)
            .map_err(|_| ServerError::BadRequest(format!("Invalid playlist id: {:?}", raw)))
    }
}

/// Names the key a resource's fields are nested under in request bodies
pub trait ParamKey {
    const KEY: &'static str;
}

impl ParamKey for PlaylistParams {
    const KEY: &'static str = "playlist";
}

impl ParamKey for SongParams {
    const KEY: &'static str = "song";
}

/// Permitted fields of one resource, taken from its envelope in the body
///
/// Accepts `{"playlist": {"name": "..."}}` as JSON or `playlist[name]=...` as
/// a form. A missing or empty envelope is malformed input; keys outside the
/// params struct are dropped during deserialization.
#[derive(Debug, Clone)]
pub struct Permitted<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for Permitted<T>
where
    S: Send + Sync,
    T: DeserializeOwned + ParamKey + Send,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        let body = Bytes::from_request(req, state).await.map_err(body_rejection)?;

        let fields = match content_type.as_str() {
            _ if body.is_empty() => return Err(missing_param(T::KEY)),
            "application/json" => json_envelope(&body, T::KEY)?,
            "application/x-www-form-urlencoded" => form_envelope(&body, T::KEY)?,
            other => {
                return Err(ServerError::UnsupportedMediaType(format!(
                    "Expected application/json or application/x-www-form-urlencoded, got {:?}",
                    other
                )))
            }
        };

        serde_json::from_value(Value::Object(fields))
            .map(Permitted)
            .map_err(|e| ServerError::BadRequest(format!("Invalid {} parameters: {}", T::KEY, e)))
    }
}

fn body_rejection(rejection: BytesRejection) -> ServerError {
    match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => ServerError::PayloadTooLarge(rejection.body_text()),
        _ => ServerError::BadRequest(rejection.body_text()),
    }
}

fn missing_param(key: &str) -> ServerError {
    ServerError::BadRequest(format!("param is missing or the value is empty: {}", key))
}

fn json_envelope(body: &[u8], key: &str) -> Result<Map<String, Value>, ServerError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ServerError::BadRequest(format!("Invalid JSON body: {}", e)))?;

    match value {
        Value::Object(mut root) => match root.remove(key) {
            Some(Value::Object(fields)) if !fields.is_empty() => Ok(fields),
            _ => Err(missing_param(key)),
        },
        _ => Err(missing_param(key)),
    }
}

fn form_envelope(body: &[u8], key: &str) -> Result<Map<String, Value>, ServerError> {
    let pairs: Vec<(String, String)> = serde_html_form::from_bytes(body)
        .map_err(|e| ServerError::BadRequest(format!("Invalid form body: {}", e)))?;

    let prefix = format!("{}[", key);
    let fields: Map<String, Value> = pairs
        .into_iter()
        .filter_map(|(name, value)| {
            let field = name.strip_prefix(&prefix)?.strip_suffix(']')?;
            Some((field.to_string(), Value::String(value)))
        })
        .collect();

    if fields.is_empty() {
        return Err(missing_param(key));
    }
    Ok(fields)
}
