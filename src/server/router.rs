use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        character::{self, CHARACTER_TAG},
        favorite::{self, FAVORITE_TAG},
        planet::{self, PLANET_TAG},
        user::{self, USER_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Star Wars API", description = "Catalogue of users, planets, characters and favorites"),
    tags(
        (name = USER_TAG, description = "User management"),
        (name = PLANET_TAG, description = "Planet catalogue"),
        (name = CHARACTER_TAG, description = "Character catalogue"),
        (name = FAVORITE_TAG, description = "Favorites linking users to planets and characters"),
    )
)]
struct ApiDoc;

/// Builds the API routes together with the OpenAPI document describing them.
pub fn router() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(user::get_users, user::create_user))
        .routes(routes!(user::get_user, user::update_user, user::delete_user))
        .routes(routes!(favorite::get_user_favorites))
        .routes(routes!(favorite::remove_user_favorite_planet))
        .routes(routes!(favorite::remove_user_favorite_character))
        .routes(routes!(planet::get_planets, planet::create_planet))
        .routes(routes!(planet::get_planet, planet::update_planet, planet::delete_planet))
        .routes(routes!(favorite::get_planet_favorites))
        .routes(routes!(character::get_characters, character::create_character))
        .routes(routes!(
            character::get_character,
            character::update_character,
            character::delete_character
        ))
        .routes(routes!(favorite::get_character_favorites))
        .routes(routes!(favorite::get_favorites, favorite::create_favorite))
        .routes(routes!(
            favorite::get_favorite,
            favorite::update_favorite,
            favorite::delete_favorite
        ))
        .routes(routes!(favorite::favorite_planet))
        .routes(routes!(favorite::favorite_character))
        .split_for_parts()
}

/// Assembles the complete application: API routes, Swagger UI, CORS and request tracing.
///
/// The OpenAPI document is served at `/api-docs/openapi.json` and browsable at `/docs`.
pub fn app(state: AppState) -> Router {
    let (api_routes, api) = router();

    api_routes
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
