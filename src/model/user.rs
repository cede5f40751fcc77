use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public representation of a user.
///
/// Only the id and email are exposed; the password and names never leave the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(default, deserialize_with = "super::deserialize_nullable")]
    #[schema(value_type = Option<String>)]
    pub first_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::deserialize_nullable")]
    #[schema(value_type = Option<String>)]
    pub last_name: Option<Option<String>>,
}
