//! Favorite service: the relationship layer between users, planets and characters.
//!
//! Every write resolves its foreign keys first, in the order user, planet, character, and
//! stops at the first one that does not exist. Nothing is written when a check fails.

use entity::favorite::Column;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        character::CharacterRepository, favorite::FavoriteRepository, planet::PlanetRepository,
        user::UserRepository,
    },
    error::{AppError, Resource},
    model::favorite::{CreateFavoriteParam, Favorite, UpdateFavoriteParam},
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a favorite after checking that every referenced record exists
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created favorite
    /// - `Err(AppError::NotFound)` - First unresolved reference (user, then planet, then character)
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateFavoriteParam) -> Result<Favorite, AppError> {
        self.ensure_references(Some(param.user_id), param.planet_id, param.character_id)
            .await?;

        let favorite = FavoriteRepository::new(self.db).create(param).await?;

        tracing::info!(
            "Created favorite {} for user {}",
            favorite.id,
            favorite.user_id
        );

        Ok(favorite)
    }

    pub async fn get_all(&self) -> Result<Vec<Favorite>, AppError> {
        Ok(FavoriteRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Favorite, AppError> {
        FavoriteRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound(Resource::Favorite))
    }

    /// Applies a partial update to a favorite
    ///
    /// The favorite itself is looked up first, then any foreign key set by the patch. A
    /// cleared planet or character needs no check.
    pub async fn update(&self, id: i32, param: UpdateFavoriteParam) -> Result<Favorite, AppError> {
        let repo = FavoriteRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(Resource::Favorite));
        }

        self.ensure_references(
            param.user_id,
            param.planet_id.flatten(),
            param.character_id.flatten(),
        )
        .await?;

        let favorite = repo
            .update(id, param)
            .await?
            .ok_or(AppError::NotFound(Resource::Favorite))?;

        tracing::info!("Updated favorite {}", id);

        Ok(favorite)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !FavoriteRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(Resource::Favorite));
        }

        tracing::info!("Deleted favorite {}", id);

        Ok(())
    }

    /// Lists the favorites belonging to a user, or `NotFound` if the user doesn't exist
    pub async fn favorites_of_user(&self, user_id: i32) -> Result<Vec<Favorite>, AppError> {
        if !UserRepository::new(self.db).exists(user_id).await? {
            return Err(AppError::NotFound(Resource::User));
        }

        Ok(FavoriteRepository::new(self.db)
            .get_referencing(Column::UserId, user_id)
            .await?)
    }

    /// Lists the favorites pointing at a planet, or `NotFound` if the planet doesn't exist
    pub async fn favorites_of_planet(&self, planet_id: i32) -> Result<Vec<Favorite>, AppError> {
        if !PlanetRepository::new(self.db).exists(planet_id).await? {
            return Err(AppError::NotFound(Resource::Planet));
        }

        Ok(FavoriteRepository::new(self.db)
            .get_referencing(Column::PlanetId, planet_id)
            .await?)
    }

    /// Lists the favorites pointing at a character, or `NotFound` if it doesn't exist
    pub async fn favorites_of_character(
        &self,
        character_id: i32,
    ) -> Result<Vec<Favorite>, AppError> {
        if !CharacterRepository::new(self.db)
            .exists(character_id)
            .await?
        {
            return Err(AppError::NotFound(Resource::Character));
        }

        Ok(FavoriteRepository::new(self.db)
            .get_referencing(Column::CharacterId, character_id)
            .await?)
    }

    /// Removes every favorite `user_id` holds for `planet_id`
    ///
    /// Returns `AppError::NotFound(Resource::Favorite)` when there was nothing to remove.
    pub async fn remove_user_planet(&self, user_id: i32, planet_id: i32) -> Result<u64, AppError> {
        self.remove_for_user(user_id, Column::PlanetId, planet_id)
            .await
    }

    /// Removes every favorite `user_id` holds for `character_id`
    pub async fn remove_user_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<u64, AppError> {
        self.remove_for_user(user_id, Column::CharacterId, character_id)
            .await
    }

    async fn remove_for_user(
        &self,
        user_id: i32,
        column: Column,
        target_id: i32,
    ) -> Result<u64, AppError> {
        let removed = FavoriteRepository::new(self.db)
            .delete_for_user(user_id, column, target_id)
            .await?;

        if removed == 0 {
            return Err(AppError::NotFound(Resource::Favorite));
        }

        tracing::info!(
            "Removed {} favorite(s) of user {} for {:?} {}",
            removed,
            user_id,
            column,
            target_id
        );

        Ok(removed)
    }

    /// Checks the supplied references in order, returning the first that is missing
    async fn ensure_references(
        &self,
        user_id: Option<i32>,
        planet_id: Option<i32>,
        character_id: Option<i32>,
    ) -> Result<(), AppError> {
        if let Some(user_id) = user_id {
            if !UserRepository::new(self.db).exists(user_id).await? {
                return Err(AppError::NotFound(Resource::User));
            }
        }

        if let Some(planet_id) = planet_id {
            if !PlanetRepository::new(self.db).exists(planet_id).await? {
                return Err(AppError::NotFound(Resource::Planet));
            }
        }

        if let Some(character_id) = character_id {
            if !CharacterRepository::new(self.db)
                .exists(character_id)
                .await?
            {
                return Err(AppError::NotFound(Resource::Character));
            }
        }

        Ok(())
    }
}
