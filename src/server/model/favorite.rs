//! Favorite domain models and parameters.
//!
//! A favorite always belongs to one user and points at no more than one planet and one
//! character. Both targets are optional.
//! Parameter types only carry foreign-key values; whether those keys resolve is checked by
//! `FavoriteService` before anything is written.

use crate::{
    model::favorite::{CreateFavoriteDto, FavoriteDto, FavoriteOwnerDto, UpdateFavoriteDto},
    server::{error::AppError, util::validate::require_field},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: Option<i32>,
    pub character_id: Option<i32>,
}

impl Favorite {
    pub fn from_entity(entity: entity::favorite::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            planet_id: entity.planet_id,
            character_id: entity.character_id,
        }
    }

    /// Converts the favorite to its flat DTO; related records are referenced by id only.
    pub fn into_dto(self) -> FavoriteDto {
        FavoriteDto {
            id: self.id,
            user_id: self.user_id,
            planet_id: self.planet_id,
            character_id: self.character_id,
        }
    }
}

/// Parameters for creating a favorite.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateFavoriteParam {
    pub user_id: i32,
    pub planet_id: Option<i32>,
    pub character_id: Option<i32>,
}

impl CreateFavoriteParam {
    /// Builds the parameters for favoriting a planet named in the request path.
    pub fn for_planet(dto: FavoriteOwnerDto, planet_id: i32) -> Result<Self, AppError> {
        Ok(Self {
            user_id: require_field("user_id", dto.user_id)?,
            planet_id: Some(planet_id),
            character_id: None,
        })
    }

    /// Builds the parameters for favoriting a character named in the request path.
    pub fn for_character(dto: FavoriteOwnerDto, character_id: i32) -> Result<Self, AppError> {
        Ok(Self {
            user_id: require_field("user_id", dto.user_id)?,
            planet_id: None,
            character_id: Some(character_id),
        })
    }
}

impl TryFrom<CreateFavoriteDto> for CreateFavoriteParam {
    type Error = AppError;

    /// # Returns
    /// - `Err(AppError::MissingField)` - `user_id` absent
    fn try_from(dto: CreateFavoriteDto) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: require_field("user_id", dto.user_id)?,
            planet_id: dto.planet_id,
            character_id: dto.character_id,
        })
    }
}

/// Partial update of a favorite; `None` fields are left unchanged and `Some(None)` clears
/// a target.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateFavoriteParam {
    pub user_id: Option<i32>,
    pub planet_id: Option<Option<i32>>,
    pub character_id: Option<Option<i32>>,
}

impl From<UpdateFavoriteDto> for UpdateFavoriteParam {
    fn from(dto: UpdateFavoriteDto) -> Self {
        Self {
            user_id: dto.user_id,
            planet_id: dto.planet_id,
            character_id: dto.character_id,
        }
    }
}
