//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types are built from request
//! DTOs; building a create parameter is where required-field presence is enforced, and
//! update parameters are patches in which only the `Some` fields are applied.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
