use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::handlers;
use crate::state::AppState;

/// JSON API routes, nested under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes())
        .nest("/admin", admin_routes())
        .route("/awards/{permalink}", get(handlers::award::get_award))
        .route("/og", get(handlers::og::og_image))
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/logout", post(handlers::auth::logout))
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/preview-brief", post(handlers::badge::preview_brief))
        .route("/generate-image", post(handlers::badge::generate_image))
        .route("/publish-award", post(handlers::award::publish_award))
        .route("/awards", get(handlers::award::list_awards))
        .route("/awards/{id}", delete(handlers::award::delete_award))
        .route("/migrate", post(handlers::admin::migrate))
        .route("/suggestions", get(handlers::admin::list_suggestions))
}

/// Public HTML pages and stored badge assets, mounted at the root.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/a/{permalink}", get(handlers::pages::award_page))
        .route("/hof", get(handlers::pages::hof_page))
        .route("/badges/{slug}/{file}", get(handlers::pages::badge_asset))
}
