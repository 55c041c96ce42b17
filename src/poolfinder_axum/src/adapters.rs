//! Axum implementations of the framework-agnostic HTTP traits.
//!
//! `AuthRequest` and `AuthResponseBuilder` live in `poolfinder_core`; newtype wrappers let
//! us implement them for axum's types without running into the orphan rule.
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │  poolfinder_core::AuthRequest (trait)      │
//! └────────────────┬───────────────────────────┘
//!                  │
//!                  ▼
//! ┌────────────────────────────────────────────┐
//! │  AxumRequest(axum::extract::Request)       │
//! │  impl AuthRequest for AxumRequest { }      │
//! └────────────────────────────────────────────┘
//! ```

use axum::body::Body;
use axum::extract::Request;
use axum::http::{Response, StatusCode};
use axum::response::IntoResponse;
use poolfinder_core::{AuthRequest, AuthResponseBuilder};

/// Newtype wrapper around axum's request.
#[repr(transparent)]
pub struct AxumRequest(pub Request);

impl From<Request> for AxumRequest {
    fn from(req: Request) -> Self {
        AxumRequest(req)
    }
}

impl From<AxumRequest> for Request {
    fn from(wrapper: AxumRequest) -> Self {
        wrapper.0
    }
}

impl AuthRequest for AxumRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.0.headers().get(name)?.to_str().ok()
    }

    fn method(&self) -> &str {
        self.0.method().as_str()
    }

    fn path(&self) -> &str {
        self.0.uri().path()
    }
}

/// Collects status, headers and a JSON body, then assembles an axum response.
pub struct AxumResponseBuilder {
    builder: axum::http::response::Builder,
    body: Option<String>,
}

impl AxumResponseBuilder {
    pub fn new() -> Self {
        Self {
            builder: Response::builder(),
            body: None,
        }
    }
}

impl Default for AxumResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthResponseBuilder for AxumResponseBuilder {
    type Response = Response<Body>;

    fn status(mut self, code: u16) -> Self {
        self.builder = self.builder.status(code);
        self
    }

    fn header(mut self, name: &str, value: &str) -> Self {
        self.builder = self.builder.header(name, value);
        self
    }

    fn json_body(mut self, body: serde_json::Value) -> Self {
        self.builder = self.builder.header("content-type", "application/json");
        self.body = Some(body.to_string());
        self
    }

    /// An invalid status or header value set earlier degrades to a bare 500.
    fn build(self) -> Self::Response {
        let body = self.body.unwrap_or_default();
        self.builder.body(Body::from(body)).unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to assemble response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        })
    }
}

pub fn response_builder() -> AxumResponseBuilder {
    AxumResponseBuilder::new()
}
