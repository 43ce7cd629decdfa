//! Request extractors whose rejections render as `RegistryError`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::RegistryError;

/// `axum::Json` with a 400 problem document on rejection
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(RegistryError))]
pub struct JsonBody<T>(pub T);

/// `axum::extract::Path` for numeric ids
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(RegistryError))]
pub struct IdPath<T>(pub T);
