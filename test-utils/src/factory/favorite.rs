//! Favorite factory for creating test favorite entities.
//!
//! Favorites reference a user and optionally a planet and/or character. The factory
//! inserts rows directly, so the referenced records must already exist.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test favorites.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::favorite::FavoriteFactory;
///
/// let favorite = FavoriteFactory::new(&db, user.id)
///     .planet_id(planet.id)
///     .character_id(character.id)
///     .build()
///     .await?;
/// ```
pub struct FavoriteFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    planet_id: Option<i32>,
    character_id: Option<i32>,
}

impl<'a> FavoriteFactory<'a> {
    /// Creates a new FavoriteFactory for the provided user with no targets set.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            planet_id: None,
            character_id: None,
        }
    }

    /// Sets the favorited planet.
    pub fn planet_id(mut self, planet_id: i32) -> Self {
        self.planet_id = Some(planet_id);
        self
    }

    /// Sets the favorited character.
    pub fn character_id(mut self, character_id: i32) -> Self {
        self.character_id = Some(character_id);
        self
    }

    /// Builds and inserts the favorite entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::favorite::Model)` - Created favorite entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::favorite::Model, DbErr> {
        entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            planet_id: ActiveValue::Set(self.planet_id),
            character_id: ActiveValue::Set(self.character_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a favorite linking a user to a planet.
pub async fn create_planet_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    planet_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    FavoriteFactory::new(db, user_id)
        .planet_id(planet_id)
        .build()
        .await
}

/// Creates a favorite linking a user to a character.
pub async fn create_character_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    character_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    FavoriteFactory::new(db, user_id)
        .character_id(character_id)
        .build()
        .await
}
