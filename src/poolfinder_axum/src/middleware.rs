//! The auth chain as axum middleware.
//!
//! Both stages are meant for `axum::middleware::from_fn_with_state`. Register `authorize`
//! first and `authenticate` second with `route_layer`, so that authenticate wraps it and
//! runs first:
//!
//! ```ignore
//! Router::new()
//!     .route("/users", get(list_users::<U>))
//!     .route_layer(from_fn_with_state(RoleGuard::allow([Role::Admin]), authorize))
//!     .route_layer(from_fn_with_state(codec, authenticate::<C>))
//! ```

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use poolfinder_core::{IdentityClaim, RoleGuard, TokenCodec, auth_chain};

use crate::adapters::{AxumRequest, response_builder};

/// Verifies the bearer token and attaches the resulting `IdentityClaim` to the request
/// extensions. Short-circuits with 401/403 otherwise.
pub async fn authenticate<C>(State(codec): State<C>, request: Request, next: Next) -> Response
where
    C: TokenCodec,
{
    let request = AxumRequest::from(request);

    match auth_chain::authenticate(&codec, &request) {
        Ok(claim) => {
            let mut request = Request::from(request);
            request.extensions_mut().insert(claim);
            next.run(request).await
        }
        Err(rejection) => rejection.into_response(response_builder()),
    }
}

/// Checks the attached identity against the route's allow-list.
pub async fn authorize(State(guard): State<RoleGuard>, request: Request, next: Next) -> Response {
    match guard.check(request.extensions().get::<IdentityClaim>()) {
        Ok(()) => next.run(request).await,
        Err(rejection) => rejection.into_response(response_builder()),
    }
}
