//! Axum integration for the Pool Finder auth subsystem.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  poolfinder_core: HTTP trait definitions │
//! │  and the framework-agnostic auth chain   │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  poolfinder_axum:                        │
//! │  - AxumRequest / AxumResponseBuilder     │
//! │  - authenticate / authorize middleware   │
//! │  - CurrentUser extractor                 │
//! │  - route handlers                        │
//! └──────────────────────────────────────────┘
//! ```

pub mod adapters;
pub mod extractors;
pub mod middleware;
pub mod routes;

// Re-export for convenience
pub use adapters::{AxumRequest, AxumResponseBuilder, response_builder};
pub use extractors::CurrentUser;
pub use middleware::{authenticate, authorize};
pub use routes::ApiError;
