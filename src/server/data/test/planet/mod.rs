use crate::server::{
    data::planet::PlanetRepository,
    model::planet::{CreatePlanetParam, UpdatePlanetParam},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod update;
