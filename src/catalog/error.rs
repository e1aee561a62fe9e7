//! Catalog error types and their HTTP mapping.

use super::helpers::PrettyJson;
use super::models::MessageResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Every way a catalog request can fail.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The request body is not a JSON array of produce items.
    #[error("{0}")]
    BadRequestBody(String),

    /// At least one item failed a format or integrity check.
    #[error("Either the produce codes or unit prices are incorrectly formatted")]
    BadFormat,

    /// Every item in the batch is already in the catalog.
    #[error("All uploaded items already exist. Please change payload and try again")]
    AllDuplicates,

    /// No entry has the requested code.
    #[error("produce not found")]
    NotFound,
}

impl CatalogError {
    pub fn status(&self) -> StatusCode {
        match self {
            CatalogError::BadRequestBody(_) | CatalogError::BadFormat => StatusCode::BAD_REQUEST,
            CatalogError::AllDuplicates => StatusCode::CONFLICT,
            CatalogError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            CatalogError::NotFound => PrettyJson(
                status,
                MessageResponse {
                    message: self.to_string(),
                },
            )
            .into_response(),
            _ => (status, self.to_string()).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(
            CatalogError::BadRequestBody("eof".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(CatalogError::BadFormat.status(), StatusCode::BAD_REQUEST);
        assert_eq!(CatalogError::AllDuplicates.status(), StatusCode::CONFLICT);
        assert_eq!(CatalogError::NotFound.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn not_found_is_json_and_others_are_plain_text() {
        let response = CatalogError::NotFound.into_response();
        let content_type = response.headers()["content-type"].to_str().unwrap();
        assert_eq!(content_type, "application/json");

        let response = CatalogError::AllDuplicates.into_response();
        let content_type = response.headers()["content-type"].to_str().unwrap();
        assert!(content_type.starts_with("text/plain"));
    }
}
