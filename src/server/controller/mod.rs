//! HTTP request handlers.
//!
//! Controllers extract path parameters and JSON bodies, convert request DTOs into domain
//! parameters, call the matching service and convert the result back into response DTOs.
//! Each handler carries a `#[utoipa::path]` annotation that feeds the OpenAPI document.

use axum::Json;

use crate::{model::api::MessageDto, server::error::Resource};

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;


/// Acknowledgement body returned by delete endpoints.
fn deleted(resource: Resource) -> Json<MessageDto> {
    Json(MessageDto {
        message: format!("{} deleted", resource),
    })
}
