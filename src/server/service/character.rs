use sea_orm::DatabaseConnection;

use crate::server::{
    data::{character::CharacterRepository, favorite::FavoriteRepository},
    error::{AppError, Resource},
    model::character::{Character, CreateCharacterParam, UpdateCharacterParam},
};

pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateCharacterParam) -> Result<Character, AppError> {
        let character = CharacterRepository::new(self.db).create(param).await?;

        tracing::info!("Created character {} ({})", character.id, character.name);

        Ok(character)
    }

    pub async fn get_all(&self) -> Result<Vec<Character>, AppError> {
        Ok(CharacterRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Character, AppError> {
        CharacterRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound(Resource::Character))
    }

    pub async fn update(
        &self,
        id: i32,
        param: UpdateCharacterParam,
    ) -> Result<Character, AppError> {
        let character = CharacterRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or(AppError::NotFound(Resource::Character))?;

        tracing::info!("Updated character {}", id);

        Ok(character)
    }

    /// Deletes a character unless a favorite still points at it
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = CharacterRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound(Resource::Character));
        }

        let references = FavoriteRepository::new(self.db)
            .count_referencing(entity::favorite::Column::CharacterId, id)
            .await?;
        if references > 0 {
            return Err(AppError::Conflict(format!(
                "Character {} is still referenced by {} favorite(s)",
                id, references
            )));
        }

        if !repo.delete(id).await? {
            return Err(AppError::NotFound(Resource::Character));
        }

        tracing::info!("Deleted character {}", id);

        Ok(())
    }
}
