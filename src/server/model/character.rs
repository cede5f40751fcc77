//! Character domain models and parameters.

use crate::{
    model::character::{CharacterDto, CreateCharacterDto, UpdateCharacterDto},
    server::{error::AppError, util::validate::require_field},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl Character {
    pub fn from_entity(entity: entity::character::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }

    pub fn into_dto(self) -> CharacterDto {
        CharacterDto {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCharacterParam {
    pub name: String,
    pub description: Option<String>,
}

impl TryFrom<CreateCharacterDto> for CreateCharacterParam {
    type Error = AppError;

    fn try_from(dto: CreateCharacterDto) -> Result<Self, Self::Error> {
        Ok(Self {
            name: require_field("name", dto.name)?,
            description: dto.description,
        })
    }
}

/// Partial update of a character; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateCharacterParam {
    pub name: Option<String>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
}

impl From<UpdateCharacterDto> for UpdateCharacterParam {
    fn from(dto: UpdateCharacterDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }
}
