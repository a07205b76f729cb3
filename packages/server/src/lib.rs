pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod providers;
pub mod routes;
pub mod state;
pub mod storage;
pub mod utils;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::CorsConfig;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Badgery API",
        version = "1.0.0",
        description = "API for generating AI badge artwork and publishing awards"
    ),
    paths(
        handlers::auth::login,
        handlers::auth::logout,
        handlers::badge::preview_brief,
        handlers::badge::generate_image,
        handlers::award::publish_award,
        handlers::award::delete_award,
        handlers::award::list_awards,
        handlers::award::get_award,
        handlers::admin::migrate,
        handlers::admin::list_suggestions,
    ),
    components(schemas(
        error::ErrorBody,
        models::auth::LoginRequest,
        models::auth::LoginResponse,
        models::brief::BadgeStyle,
        models::brief::Quality,
        models::brief::BriefColors,
        models::brief::BadgeBrief,
        models::badge::PreviewBriefRequest,
        models::badge::BriefMetadata,
        models::badge::PreviewBriefResponse,
        models::badge::GenerateImageRequest,
        models::badge::BadgeResponse,
        models::badge::GenerateImageResponse,
        models::award::PersonFields,
        models::award::ProjectFields,
        models::award::PublishAwardRequest,
        models::award::AwardResponse,
        models::award::PublishAwardResponse,
        models::award::AwardDetails,
        models::award::AwardListItem,
        models::award::AwardListResponse,
        handlers::admin::MigrateResponse,
        handlers::admin::SuggestionsResponse,
        models::suggestions::BadgeSuggestion,
    )),
    tags(
        (name = "Auth", description = "Admin session management"),
        (name = "Badges", description = "Brief generation and badge artwork"),
        (name = "Awards", description = "Publishing and listing awards"),
        (name = "Admin", description = "Operational endpoints"),
    ),
    modifiers(&SecurityAddon),
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_default();
        components.add_security_scheme(
            "admin_key",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}

fn cors_layer(cfg: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = cfg
        .allow_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
        .max_age(std::time::Duration::from_secs(cfg.max_age))
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", routes::api_routes())
        .merge(routes::public_routes())
        .layer(cors)
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
}
