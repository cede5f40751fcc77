use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public representation of a favorite.
///
/// References are flat ids, `null` when the favorite does not point at that kind of record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: Option<i32>,
    pub character_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateFavoriteDto {
    pub user_id: Option<i32>,
    pub planet_id: Option<i32>,
    pub character_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateFavoriteDto {
    pub user_id: Option<i32>,
    #[serde(default, deserialize_with = "super::deserialize_nullable")]
    #[schema(value_type = Option<i32>)]
    pub planet_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "super::deserialize_nullable")]
    #[schema(value_type = Option<i32>)]
    pub character_id: Option<Option<i32>>,
}

/// Body of the `/favorites/planets/{id}` and `/favorites/characters/{id}` shortcuts, where
/// the target comes from the path.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct FavoriteOwnerDto {
    pub user_id: Option<i32>,
}
