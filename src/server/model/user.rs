//! User domain models and parameters.

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    server::{error::AppError, util::validate::require_field},
};

/// A stored user, including the credentials that are never serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            password: entity.password,
            first_name: entity.first_name,
            last_name: entity.last_name,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// Only the id and email are kept; password and names are dropped.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
        }
    }
}

/// Parameters for creating a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl TryFrom<CreateUserDto> for CreateUserParam {
    type Error = AppError;

    /// # Returns
    /// - `Err(AppError::MissingField)` - `email` or `password` absent
    fn try_from(dto: CreateUserDto) -> Result<Self, Self::Error> {
        Ok(Self {
            email: require_field("email", dto.email)?,
            password: require_field("password", dto.password)?,
            first_name: dto.first_name,
            last_name: dto.last_name,
        })
    }
}

/// Partial update of a user; `None` fields are left unchanged.
///
/// The names are nullable, so `Some(None)` clears them. Email and password can only be
/// replaced.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<Option<String>>,
    pub last_name: Option<Option<String>>,
}

impl From<UpdateUserDto> for UpdateUserParam {
    fn from(dto: UpdateUserDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}
