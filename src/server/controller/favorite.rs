//! Favorite endpoints.
//!
//! Besides plain CRUD on `/favorites`, this module serves the nested views of favorites
//! from the user, planet and character side, and the shortcut routes that favorite a
//! planet or character named in the path.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::{CreateFavoriteDto, FavoriteDto, FavoriteOwnerDto, UpdateFavoriteDto},
    },
    server::{
        controller::deleted,
        error::{AppError, Resource},
        model::favorite::{CreateFavoriteParam, Favorite, UpdateFavoriteParam},
        service::favorite::FavoriteService,
        state::AppState,
        util::extract::{AppJson, AppPath},
    },
};

pub static FAVORITE_TAG: &str = "favorite";

fn into_dtos(favorites: Vec<Favorite>) -> Vec<FavoriteDto> {
    favorites
        .into_iter()
        .map(|favorite| favorite.into_dto())
        .collect()
}

#[utoipa::path(
    get,
    path = "/favorites",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved favorites", body = Vec<FavoriteDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorites(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let favorites = FavoriteService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(favorites))))
}

#[utoipa::path(
    post,
    path = "/favorites",
    tag = FAVORITE_TAG,
    request_body = CreateFavoriteDto,
    responses(
        (status = 201, description = "Successfully created favorite", body = FavoriteDto),
        (status = 400, description = "Missing user_id", body = ErrorDto),
        (status = 404, description = "Referenced user, planet or character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_favorite(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateFavoriteDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateFavoriteParam::try_from(payload)?;

    let favorite = FavoriteService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(favorite.into_dto())))
}

#[utoipa::path(
    get,
    path = "/favorites/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Favorite ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved favorite", body = FavoriteDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorite(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let favorite = FavoriteService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(favorite.into_dto())))
}

#[utoipa::path(
    put,
    path = "/favorites/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Favorite ID")
    ),
    request_body = UpdateFavoriteDto,
    responses(
        (status = 200, description = "Successfully updated favorite", body = FavoriteDto),
        (status = 400, description = "Invalid favorite data", body = ErrorDto),
        (status = 404, description = "Favorite or referenced record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_favorite(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateFavoriteDto>,
) -> Result<impl IntoResponse, AppError> {
    let favorite = FavoriteService::new(&state.db)
        .update(id, UpdateFavoriteParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(favorite.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/favorites/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Favorite ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted favorite", body = MessageDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    FavoriteService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, deleted(Resource::Favorite)))
}

#[utoipa::path(
    post,
    path = "/favorites/planets/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    request_body = FavoriteOwnerDto,
    responses(
        (status = 201, description = "Successfully favorited planet", body = FavoriteDto),
        (status = 400, description = "Missing user_id", body = ErrorDto),
        (status = 404, description = "User or planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn favorite_planet(
    State(state): State<AppState>,
    AppPath(planet_id): AppPath<i32>,
    AppJson(payload): AppJson<FavoriteOwnerDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateFavoriteParam::for_planet(payload, planet_id)?;

    let favorite = FavoriteService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(favorite.into_dto())))
}

#[utoipa::path(
    post,
    path = "/favorites/characters/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("character_id" = i32, Path, description = "Character ID")
    ),
    request_body = FavoriteOwnerDto,
    responses(
        (status = 201, description = "Successfully favorited character", body = FavoriteDto),
        (status = 400, description = "Missing user_id", body = ErrorDto),
        (status = 404, description = "User or character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn favorite_character(
    State(state): State<AppState>,
    AppPath(character_id): AppPath<i32>,
    AppJson(payload): AppJson<FavoriteOwnerDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateFavoriteParam::for_character(payload, character_id)?;

    let favorite = FavoriteService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(favorite.into_dto())))
}

#[utoipa::path(
    get,
    path = "/users/{id}/favorites",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Favorites belonging to the user", body = Vec<FavoriteDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let favorites = FavoriteService::new(&state.db)
        .favorites_of_user(id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(favorites))))
}

#[utoipa::path(
    get,
    path = "/planets/{id}/favorites",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Favorites pointing at the planet", body = Vec<FavoriteDto>),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet_favorites(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let favorites = FavoriteService::new(&state.db)
        .favorites_of_planet(id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(favorites))))
}

#[utoipa::path(
    get,
    path = "/characters/{id}/favorites",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Favorites pointing at the character", body = Vec<FavoriteDto>),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character_favorites(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let favorites = FavoriteService::new(&state.db)
        .favorites_of_character(id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(favorites))))
}

#[utoipa::path(
    delete,
    path = "/users/{id}/favorites/planets/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "User ID"),
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Removed the user's favorites for the planet", body = MessageDto),
        (status = 404, description = "User has no favorite for the planet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_user_favorite_planet(
    State(state): State<AppState>,
    AppPath((id, planet_id)): AppPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    FavoriteService::new(&state.db)
        .remove_user_planet(id, planet_id)
        .await?;

    Ok((StatusCode::OK, deleted(Resource::Favorite)))
}

#[utoipa::path(
    delete,
    path = "/users/{id}/favorites/characters/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "User ID"),
        ("character_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Removed the user's favorites for the character", body = MessageDto),
        (status = 404, description = "User has no favorite for the character", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_user_favorite_character(
    State(state): State<AppState>,
    AppPath((id, character_id)): AppPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    FavoriteService::new(&state.db)
        .remove_user_character(id, character_id)
        .await?;

    Ok((StatusCode::OK, deleted(Resource::Favorite)))
}
