use axum::{
    Router,
    http::{HeaderValue, Method, header, request},
    middleware::from_fn_with_state,
    routing::{get, post},
};
use poolfinder_adapters::config::AllowedOrigins;
use poolfinder_axum::{
    authenticate, authorize,
    routes::{
        VerificationLinkBase, bounds, confirm_verification, geocode, health, list_users, login,
        me, register, request_email_verification, request_phone_verification, reverse_geocode,
        error::route_not_found,
    },
};
use poolfinder_core::{
    CredentialHasher, EmailClient, GeocodeClient, Role, RoleGuard, SmsClient, TokenCodec,
    UserStore, VerificationStore,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::telemetry::{make_span_with_request_id, on_request, on_response};

/// Everything the routes depend on. Stores and clients are cheap to clone (shared handles).
pub struct ServiceComponents<U, V, H, C, E, S, G> {
    pub user_store: U,
    pub verification_store: V,
    pub hasher: H,
    pub codec: C,
    pub email_client: E,
    pub sms_client: S,
    pub geocode_client: G,
    pub link_base: VerificationLinkBase,
}

/// The Pool Finder API, mounted under `/api`.
pub struct PoolFinderService {
    router: Router,
}

impl PoolFinderService {
    /// Each route group receives only the state it needs.
    ///
    /// Protected groups stack two `route_layer`s: the one added last runs first, so
    /// `authenticate` always precedes `authorize`.
    pub fn new<U, V, H, C, E, S, G>(components: ServiceComponents<U, V, H, C, E, S, G>) -> Self
    where
        U: UserStore + Clone + 'static,
        V: VerificationStore + Clone + 'static,
        H: CredentialHasher,
        C: TokenCodec,
        E: EmailClient + Clone + 'static,
        S: SmsClient + Clone + 'static,
        G: GeocodeClient + Clone + 'static,
    {
        let ServiceComponents {
            user_store,
            verification_store,
            hasher,
            codec,
            email_client,
            sms_client,
            geocode_client,
            link_base,
        } = components;

        // No authentication
        let public: Router = Router::new()
            .route("/auth/register", post(register::<U, H, C>))
            .route("/auth/token", post(login::<U, H, C>))
            .with_state((user_store.clone(), hasher, codec.clone()))
            .route("/health", get(health));

        // Any authenticated caller
        let account: Router = Router::new()
            .route("/auth/me", get(me::<U>))
            .with_state(user_store.clone())
            .route(
                "/auth/verify/phone",
                post(request_phone_verification::<U, V, S>),
            )
            .with_state((user_store.clone(), verification_store.clone(), sms_client))
            .route(
                "/auth/verify/email",
                post(request_email_verification::<U, V, E>),
            )
            .with_state((
                user_store.clone(),
                verification_store.clone(),
                email_client,
                link_base,
            ))
            .route("/auth/verify/confirm", post(confirm_verification::<U, V>))
            .with_state((user_store.clone(), verification_store))
            .route_layer(from_fn_with_state(codec.clone(), authenticate::<C>));

        // Admins only
        let admin: Router = Router::new()
            .route("/admin/users", get(list_users::<U>))
            .with_state(user_store)
            .route_layer(from_fn_with_state(
                RoleGuard::allow([Role::Admin]),
                authorize,
            ))
            .route_layer(from_fn_with_state(codec.clone(), authenticate::<C>));

        // Every recognized role
        let geo: Router = Router::new()
            .route("/geocode", get(geocode::<G>))
            .route("/geocode/reverse", get(reverse_geocode::<G>))
            .with_state(geocode_client)
            .route("/geocode/bounds", post(bounds))
            .route_layer(from_fn_with_state(
                RoleGuard::allow([Role::User, Role::PoolOwner, Role::Admin]),
                authorize,
            ))
            .route_layer(from_fn_with_state(codec, authenticate::<C>));

        let api = public.merge(account).merge(admin).merge(geo);
        let router = Router::new().nest("/api", api).fallback(route_not_found);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert into a router that can be served directly or mounted on another router.
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        origin
                            .to_str()
                            .is_ok_and(|origin| allowed_origins.contains(origin))
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Pool Finder API listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
