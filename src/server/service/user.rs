use sea_orm::DatabaseConnection;

use crate::server::{
    data::{favorite::FavoriteRepository, user::UserRepository},
    error::{AppError, Resource},
    model::user::{CreateUserParam, UpdateUserParam, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let user = UserRepository::new(self.db).create(param).await?;

        tracing::info!("Created user {}", user.id);

        Ok(user)
    }

    /// Gets all users in insertion order
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Gets a user by ID
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound(Resource::User))
    }

    /// Applies a partial update, returning the user as stored afterwards
    pub async fn update(&self, id: i32, param: UpdateUserParam) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or(AppError::NotFound(Resource::User))?;

        tracing::info!("Updated user {}", id);

        Ok(user)
    }

    /// Deletes a user
    ///
    /// Refused with `AppError::Conflict` while any favorite still belongs to the user.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound(Resource::User));
        }

        let references = FavoriteRepository::new(self.db)
            .count_referencing(entity::favorite::Column::UserId, id)
            .await?;
        if references > 0 {
            return Err(AppError::Conflict(format!(
                "User {} still has {} favorite(s)",
                id, references
            )));
        }

        if !repo.delete(id).await? {
            return Err(AppError::NotFound(Resource::User));
        }

        tracing::info!("Deleted user {}", id);

        Ok(())
    }
}
