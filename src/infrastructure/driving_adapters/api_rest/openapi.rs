//! OpenAPI documentation configuration.
//!
//! Served through Swagger UI at `/{prefix}/docs`.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use super::dto::user::{CreateUserDto, UserResponseDto};
use super::handlers::{test_module, users};

/// OpenAPI documentation for the Megamind API
#[derive(OpenApi)]
#[openapi(
    info(title = "Megamind API", description = "Document template", version = "1.0"),
    paths(
        users::create_user,
        users::find_all_users,
        users::find_user_by_id,
        users::remove_user,
        test_module::create,
        test_module::find_all,
        test_module::find_one,
        test_module::update,
        test_module::remove,
    ),
    components(schemas(CreateUserDto, UserResponseDto)),
    modifiers(&SecurityAddon),
    tags(
        (name = "User", description = "User management operations"),
        (name = "TestModule", description = "Generated placeholder resource")
    )
)]
pub struct ApiDoc;

/// Declares the `header-auth-key` API key scheme; it is documented, not enforced
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    "header-auth-key",
                    "enter token or by-passs",
                ))),
            );
        }
    }
}

/// The document with every path mounted under `/{prefix}`
#[must_use]
pub fn api_doc(prefix: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    let paths = std::mem::take(&mut doc.paths.paths);
    doc.paths.paths = paths
        .into_iter()
        .map(|(path, item)| (format!("/{prefix}{path}"), item))
        .collect();
    doc
}
