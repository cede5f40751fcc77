//! Planet domain models and parameters.

use crate::{
    model::planet::{CreatePlanetDto, PlanetDto, UpdatePlanetDto},
    server::{error::AppError, util::validate::require_field},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl Planet {
    pub fn from_entity(entity: entity::planet::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }

    pub fn into_dto(self) -> PlanetDto {
        PlanetDto {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }
}

/// Parameters for creating a new planet.
#[derive(Debug, Clone)]
pub struct CreatePlanetParam {
    pub name: String,
    pub description: Option<String>,
}

impl TryFrom<CreatePlanetDto> for CreatePlanetParam {
    type Error = AppError;

    fn try_from(dto: CreatePlanetDto) -> Result<Self, Self::Error> {
        Ok(Self {
            name: require_field("name", dto.name)?,
            description: dto.description,
        })
    }
}

/// Partial update of a planet; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdatePlanetParam {
    pub name: Option<String>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
}

impl From<UpdatePlanetDto> for UpdatePlanetParam {
    fn from(dto: UpdatePlanetDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }
}
