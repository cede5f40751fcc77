use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        planet::{CreatePlanetDto, PlanetDto, UpdatePlanetDto},
    },
    server::{
        controller::deleted,
        error::{AppError, Resource},
        model::planet::{CreatePlanetParam, UpdatePlanetParam},
        service::planet::PlanetService,
        state::AppState,
        util::extract::{AppJson, AppPath},
    },
};

pub static PLANET_TAG: &str = "planet";

#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Successfully retrieved planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let planets = PlanetService::new(&state.db).get_all().await?;

    let dtos: Vec<PlanetDto> = planets
        .into_iter()
        .map(|planet| planet.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    post,
    path = "/planets",
    tag = PLANET_TAG,
    request_body = CreatePlanetDto,
    responses(
        (status = 201, description = "Successfully created planet", body = PlanetDto),
        (status = 400, description = "Missing or invalid planet data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreatePlanetDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreatePlanetParam::try_from(payload)?;

    let planet = PlanetService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(planet.into_dto())))
}

#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let planet = PlanetService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(planet.into_dto())))
}

#[utoipa::path(
    put,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    request_body = UpdatePlanetDto,
    responses(
        (status = 200, description = "Successfully updated planet", body = PlanetDto),
        (status = 400, description = "Invalid planet data", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_planet(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdatePlanetDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdatePlanetParam::from(payload);

    let planet = PlanetService::new(&state.db).update(id, param).await?;

    Ok((StatusCode::OK, Json(planet.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted planet", body = MessageDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 409, description = "Planet is still referenced by favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    PlanetService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, deleted(Resource::Planet)))
}
