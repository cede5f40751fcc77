use sea_orm::DatabaseConnection;

use crate::server::{
    data::{favorite::FavoriteRepository, planet::PlanetRepository},
    error::{AppError, Resource},
    model::planet::{CreatePlanetParam, Planet, UpdatePlanetParam},
};

pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new planet
    pub async fn create(&self, param: CreatePlanetParam) -> Result<Planet, AppError> {
        let planet = PlanetRepository::new(self.db).create(param).await?;

        tracing::info!("Created planet {} ({})", planet.id, planet.name);

        Ok(planet)
    }

    pub async fn get_all(&self) -> Result<Vec<Planet>, AppError> {
        Ok(PlanetRepository::new(self.db).get_all().await?)
    }

    /// Gets a planet by ID, or `AppError::NotFound` if it doesn't exist
    pub async fn get_by_id(&self, id: i32) -> Result<Planet, AppError> {
        PlanetRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound(Resource::Planet))
    }

    pub async fn update(&self, id: i32, param: UpdatePlanetParam) -> Result<Planet, AppError> {
        let planet = PlanetRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or(AppError::NotFound(Resource::Planet))?;

        tracing::info!("Updated planet {}", id);

        Ok(planet)
    }

    /// Deletes a planet
    ///
    /// Refused with `AppError::Conflict` while any favorite still points at the planet.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = PlanetRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound(Resource::Planet));
        }

        let references = FavoriteRepository::new(self.db)
            .count_referencing(entity::favorite::Column::PlanetId, id)
            .await?;
        if references > 0 {
            return Err(AppError::Conflict(format!(
                "Planet {} is still referenced by {} favorite(s)",
                id, references
            )));
        }

        if !repo.delete(id).await? {
            return Err(AppError::NotFound(Resource::Planet));
        }

        tracing::info!("Deleted planet {}", id);

        Ok(())
    }
}
