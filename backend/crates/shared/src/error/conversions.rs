//! Error conversions
//!
//! HTTP rendering of [`AppError`] and client-facing text for axum's
//! extractor rejections (behind the `axum` feature).

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for super::app_error::AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, axum::Json(self.problem())).into_response()
    }
}

/// Fixed client message for a JSON body rejection. The serde detail is
/// left to the caller's log.
#[cfg(feature = "axum")]
pub fn json_rejection_message(
    rejection: &axum::extract::rejection::JsonRejection,
) -> &'static str {
    use axum::extract::rejection::JsonRejection;

    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            "Expected request with `Content-Type: application/json`"
        }
        JsonRejection::JsonSyntaxError(_) => "Request body is not valid JSON",
        JsonRejection::JsonDataError(_) => "Request body has missing or invalid fields",
        _ => "Failed to read request body",
    }
}
