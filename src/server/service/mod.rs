//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Existence Rules**: Turning missing records into `AppError::NotFound`
//! - **Reference Checks**: Resolving favorite foreign keys before any write
//! - **Delete Guards**: Refusing to delete records still referenced by favorites
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;

#[cfg(test)]
mod test;
