//! Database repository layer for all catalogue entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! table. Repositories use SeaORM entity models internally and return domain models to
//! maintain separation between the data layer and business logic layer. A missing record
//! is reported as `None` or `false`; turning that into a not-found error is left to the
//! services.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;

#[cfg(test)]
mod test;
