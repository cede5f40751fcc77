//! Favorite data repository for database operations.
//!
//! Provides the `FavoriteRepository` for managing favorites in the database. The repository
//! stores foreign-key values as given; checking that they resolve happens in
//! `FavoriteService` before any insert or update.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::favorite::{CreateFavoriteParam, Favorite, UpdateFavoriteParam};

/// Repository providing database operations for favorites.
pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    /// Creates a new FavoriteRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a favorite with the provided references.
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created favorite
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateFavoriteParam) -> Result<Favorite, DbErr> {
        let entity = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            planet_id: ActiveValue::Set(param.planet_id),
            character_id: ActiveValue::Set(param.character_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Favorite::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Favorite>, DbErr> {
        let entity = entity::prelude::Favorite::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Favorite::from_entity))
    }

    /// Gets all favorites in insertion order.
    pub async fn get_all(&self) -> Result<Vec<Favorite>, DbErr> {
        let entities = entity::prelude::Favorite::find()
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Favorite::from_entity).collect())
    }

    /// Gets all favorites whose `column` equals `id`, in insertion order.
    ///
    /// # Arguments
    /// - `column` - One of the reference columns (`UserId`, `PlanetId`, `CharacterId`)
    /// - `id` - ID of the referenced record
    pub async fn get_referencing(
        &self,
        column: entity::favorite::Column,
        id: i32,
    ) -> Result<Vec<Favorite>, DbErr> {
        let entities = entity::prelude::Favorite::find()
            .filter(column.eq(id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Favorite::from_entity).collect())
    }

    /// Counts favorites whose `column` equals `id`.
    pub async fn count_referencing(
        &self,
        column: entity::favorite::Column,
        id: i32,
    ) -> Result<u64, DbErr> {
        entity::prelude::Favorite::find()
            .filter(column.eq(id))
            .count(self.db)
            .await
    }

    /// Applies a partial update to a favorite.
    ///
    /// # Returns
    /// - `Ok(Some(Favorite))` - The favorite after the update (unchanged for an empty patch)
    /// - `Ok(None)` - No favorite with that ID
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateFavoriteParam,
    ) -> Result<Option<Favorite>, DbErr> {
        let Some(favorite) = entity::prelude::Favorite::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::favorite::ActiveModel = favorite.clone().into();
        if let Some(user_id) = param.user_id {
            active_model.user_id = ActiveValue::Set(user_id);
        }
        if let Some(planet_id) = param.planet_id {
            active_model.planet_id = ActiveValue::Set(planet_id);
        }
        if let Some(character_id) = param.character_id {
            active_model.character_id = ActiveValue::Set(character_id);
        }

        if !active_model.is_changed() {
            return Ok(Some(Favorite::from_entity(favorite)));
        }

        let updated = active_model.update(self.db).await?;

        Ok(Some(Favorite::from_entity(updated)))
    }

    /// Deletes the favorite with the provided ID, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Favorite::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every favorite of `user_id` whose `column` equals `target_id`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of favorites removed (0 if none matched)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_for_user(
        &self,
        user_id: i32,
        column: entity::favorite::Column,
        target_id: i32,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(column.eq(target_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
