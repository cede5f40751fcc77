use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        character::{CreateCharacterDto, CharacterDto, UpdateCharacterDto},
    },
    server::{
        controller::deleted,
        error::{AppError, Resource},
        model::character::{CreateCharacterParam, UpdateCharacterParam},
        service::character::CharacterService,
        state::AppState,
        util::extract::{AppJson, AppPath},
    },
};

pub static CHARACTER_TAG: &str = "character";

#[utoipa::path(
    get,
    path = "/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let characters = CharacterService::new(&state.db).get_all().await?;

    let dtos: Vec<CharacterDto> = characters
        .into_iter()
        .map(|character| character.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    post,
    path = "/characters",
    tag = CHARACTER_TAG,
    request_body = CreateCharacterDto,
    responses(
        (status = 201, description = "Successfully created character", body = CharacterDto),
        (status = 400, description = "Missing or invalid character data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateCharacterDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateCharacterParam::try_from(payload)?;

    let character = CharacterService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(character.into_dto())))
}

#[utoipa::path(
    get,
    path = "/characters/{id}",
    tag = CHARACTER_TAG,
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved character", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let character = CharacterService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}

#[utoipa::path(
    put,
    path = "/characters/{id}",
    tag = CHARACTER_TAG,
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    request_body = UpdateCharacterDto,
    responses(
        (status = 200, description = "Successfully updated character", body = CharacterDto),
        (status = 400, description = "Invalid character data", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_character(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateCharacterDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateCharacterParam::from(payload);

    let character = CharacterService::new(&state.db).update(id, param).await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/characters/{id}",
    tag = CHARACTER_TAG,
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted character", body = MessageDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 409, description = "Character is still referenced by favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_character(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    CharacterService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, deleted(Resource::Character)))
}
