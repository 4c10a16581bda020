//! REST API Module
//!
//! Contains HTTP handlers, DTOs, extractors and middleware for the REST API,
//! and assembles them into the application router.

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::use_cases::{
    CreateUserUseCase, DeleteUserUseCase, GetUserByIdUseCase, GetUserByUsernameUseCase, GetUsersUseCase,
    TestModuleService,
};
use crate::domain::gateways::UserRepository;
use crate::infrastructure::driven_adapters::config::{ApiConfig, AppConfig};

use handlers::{test_module, users};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub create_user_use_case: Arc<CreateUserUseCase>,
    pub get_users_use_case: Arc<GetUsersUseCase>,
    pub get_user_by_id_use_case: Arc<GetUserByIdUseCase>,
    pub get_user_by_username_use_case: Arc<GetUserByUsernameUseCase>,
    pub delete_user_use_case: Arc<DeleteUserUseCase>,
    pub test_module_service: TestModuleService,
}

impl AppState {
    /// Wire every use case to the given repository
    #[must_use]
    pub fn new(config: AppConfig, user_repository: Arc<dyn UserRepository>) -> Self {
        Self {
            config: Arc::new(config),
            create_user_use_case: Arc::new(CreateUserUseCase::new(user_repository.clone())),
            get_users_use_case: Arc::new(GetUsersUseCase::new(user_repository.clone())),
            get_user_by_id_use_case: Arc::new(GetUserByIdUseCase::new(user_repository.clone())),
            get_user_by_username_use_case: Arc::new(GetUserByUsernameUseCase::new(user_repository.clone())),
            delete_user_use_case: Arc::new(DeleteUserUseCase::new(user_repository)),
            test_module_service: TestModuleService::new(),
        }
    }
}

/// Route bases every resource is mounted under: the unversioned `/{prefix}`
/// followed by `/{prefix}/v{n}` for each configured version
#[must_use]
pub fn route_bases(api: &ApiConfig) -> Vec<String> {
    let prefix = api.normalized_prefix();
    let versioned = api
        .versions
        .iter()
        .map(|v| v.trim().trim_start_matches(['v', 'V']))
        .filter(|v| !v.is_empty())
        .map(|v| format!("/{prefix}/v{v}"));

    std::iter::once(format!("/{prefix}")).chain(versioned).collect()
}

/// Fully open CORS policy: any origin, header and method, with credentials
///
/// Origins, headers and methods are mirrored from the request because a literal
/// `*` cannot be combined with credentials.
#[must_use]
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_credentials(true)
}

/// Build the application router with every route and global layer
pub fn router(state: AppState) -> Router {
    let api = &state.config.api;
    let prefix = api.normalized_prefix().to_string();

    let mut router = Router::new();
    for base in route_bases(api) {
        router = router
            .nest(&format!("{base}/user"), users::router())
            .nest(&format!("{base}/test-module"), test_module::router());
    }

    // Extractors enforce the per-content-type limits; this only lifts axum's 2 MB default
    let body_limit = api.json_limit.max(api.form_limit);

    router
        .merge(SwaggerUi::new(format!("/{prefix}/docs")).url(format!("/{prefix}/docs-json"), openapi::api_doc(&prefix)))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
