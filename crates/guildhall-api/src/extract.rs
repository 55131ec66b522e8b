//! Request extractors.

use axum::extract::FromRequest;

use crate::error::ApiError;

/// `axum::Json` whose rejections become `validation_error` responses.
///
/// Missing fields, wrong types, unknown races and malformed timestamps all
/// surface through this extractor before any handler code runs.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ValidatedJson<T>(pub T);
