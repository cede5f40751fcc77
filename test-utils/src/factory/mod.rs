//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating catalogue records with sensible
//! defaults, reducing boilerplate in tests. Each entity has its own factory module with a
//! `Factory` struct for customization and a `create_*` convenience function.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::create_user(&db).await?;
//!     let planet = factory::create_planet(&db).await?;
//!
//!     // Create a favorite with its user and planet
//!     let (user, planet, favorite) =
//!         factory::helpers::create_planet_favorite_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let planet = factory::planet::PlanetFactory::new(&db)
//!     .name("Tatooine")
//!     .description("Desert world")
//!     .build()
//!     .await?;
//! ```

pub mod character;
pub mod favorite;
pub mod helpers;
pub mod planet;
pub mod user;

pub use character::create_character;
pub use favorite::{create_character_favorite, create_planet_favorite};
pub use planet::create_planet;
pub use user::create_user;
