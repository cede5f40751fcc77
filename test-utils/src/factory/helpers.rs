//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules, including
//! unique value generation and convenience methods for creating favorites together with
//! the records they reference.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user, a planet and a favorite linking them.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, planet, favorite))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_planet_favorite_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::planet::Model,
        entity::favorite::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let planet = crate::factory::planet::create_planet(db).await?;
    let favorite = crate::factory::favorite::create_planet_favorite(db, user.id, planet.id).await?;

    Ok((user, planet, favorite))
}

/// Creates a user, a character and a favorite linking them.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, character, favorite))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_character_favorite_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::character::Model,
        entity::favorite::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let character = crate::factory::character::create_character(db).await?;
    let favorite =
        crate::factory::favorite::create_character_favorite(db, user.id, character.id).await?;

    Ok((user, character, favorite))
}
