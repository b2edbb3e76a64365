//! Response modes an action can finish with

use crate::error::{Result, ServerError};
use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::Serialize;

/// Content type of script fragments
pub const SCRIPT_CONTENT_TYPE: &str = "text/javascript; charset=utf-8";

/// Successful outcome of an action, independent of how it is framed on the wire
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResponse {
    /// Full HTML page
    Page(String),

    /// Script that patches the already loaded page
    Fragment {
        status: StatusCode,
        location: Option<String>,
        script: String,
    },

    /// Entity or collection as JSON
    Json {
        status: StatusCode,
        location: Option<String>,
        body: serde_json::Value,
    },

    /// 303 See Other to another path
    Redirect(String),
}

impl ActionResponse {
    pub fn json(status: StatusCode, location: Option<String>, value: &impl Serialize) -> Result<Self> {
        let body = serde_json::to_value(value)
            .map_err(|e| ServerError::Internal(format!("Failed to serialize response: {}", e)))?;
        Ok(Self::Json {
            status,
            location,
            body,
        })
    }

    pub fn fragment(status: StatusCode, location: Option<String>, script: String) -> Self {
        Self::Fragment {
            status,
            location,
            script,
        }
    }
}

fn with_location(mut response: Response, location: Option<String>) -> Response {
    if let Some(location) = location {
        match location.parse() {
            Ok(value) => {
                response.headers_mut().insert(header::LOCATION, value);
            }
            Err(e) => tracing::warn!("Dropping invalid Location header {:?}: {}", location, e),
        }
    }
    response
}

impl IntoResponse for ActionResponse {
    fn into_response(self) -> Response {
        match self {
            ActionResponse::Page(html) => Html(html).into_response(),
            ActionResponse::Fragment {
                status,
                location,
                script,
            } => with_location(
                (status, [(header::CONTENT_TYPE, SCRIPT_CONTENT_TYPE)], script).into_response(),
                location,
            ),
            ActionResponse::Json {
                status,
                location,
                body,
            } => with_location((status, Json(body)).into_response(), location),
            ActionResponse::Redirect(path) => Redirect::to(&path).into_response(),
        }
    }
}
