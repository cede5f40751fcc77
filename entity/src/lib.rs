//! SeaORM entity definitions for the catalogue tables.
//!
//! Each module mirrors one table created by the `migration` crate. Favorites hold the only
//! foreign keys: a required `user_id` plus optional `planet_id` and `character_id`.

pub mod prelude;

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
