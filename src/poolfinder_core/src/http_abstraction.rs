//! Zero-cost HTTP abstraction traits for the auth chain.
//!
//! The authenticate/authorize logic is written once against these traits. Web framework
//! crates implement them on newtype wrappers of their own request and response types, so
//! the chain can be unit tested without any framework at all.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  poolfinder_core: Defines HTTP traits    │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  poolfinder_axum: Newtype wrappers       │
//! │  struct AxumRequest<'a>(&'a Request)     │
//! │  impl AuthRequest for AxumRequest { }    │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  auth_chain::authenticate / RoleGuard    │
//! │  (generic over the framework)            │
//! └──────────────────────────────────────────┘
//! ```

/// Read-only view of an inbound HTTP request.
///
/// # Implementation Notes
///
/// - Return `&str` references straight out of the framework's data structures
/// - Header lookup must be case-insensitive
/// - Return `None` for headers that are missing or not valid UTF-8
pub trait AuthRequest {
    /// Get a header value by name.
    fn header(&self, name: &str) -> Option<&str>;

    /// Get the HTTP method (GET, POST, etc.)
    fn method(&self) -> &str;

    /// Get the request path
    fn path(&self) -> &str;
}

/// Builder for the responses the auth chain short-circuits with.
///
/// ```ignore
/// builder
///     .status(401)
///     .json_body(json!({"error": "Access token required"}))
///     .build()
/// ```
pub trait AuthResponseBuilder: Sized {
    /// The framework's response type
    type Response;

    fn status(self, code: u16) -> Self;

    fn header(self, name: &str, value: &str) -> Self;

    /// Set a JSON body; implementors also set `content-type: application/json`.
    fn json_body(self, body: serde_json::Value) -> Self;

    fn build(self) -> Self::Response;

    /// `{"error": message}` with the given status.
    fn error(self, code: u16, message: &str) -> Self::Response {
        self.status(code)
            .json_body(serde_json::json!({ "error": message }))
            .build()
    }
}
