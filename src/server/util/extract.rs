//! Request extractors whose rejections are `AppError`.
//!
//! Axum's own `Json` and `Path` extractors reject with plain-text bodies. Wrapping them keeps
//! every failure, including malformed bodies and non-numeric ids, in the `{"error": ...}`
//! shape produced by `AppError`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::AppError;

/// JSON request body extractor.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameter extractor.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
