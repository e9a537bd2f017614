// ABOUTME: Shared API response types and error handling
// ABOUTME: Provides consistent response format across all API endpoints

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson, Response},
};
use serde::Serialize;
use tracing::error;

use shelf_products::{ManagerError, PaginatedResponse, PaginationMeta};

/// Standard API response wrapper: `{success, message?, data?,
/// pagination?, error?}`. Absent fields are omitted from the JSON.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationMeta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        ApiResponse {
            success: true,
            message: None,
            data: Some(data),
            pagination: None,
            error: None,
        }
    }

    pub fn success_with_message(message: impl Into<String>, data: T) -> Self {
        ApiResponse {
            success: true,
            message: Some(message.into()),
            data: Some(data),
            pagination: None,
            error: None,
        }
    }

    pub fn message(message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: true,
            message: Some(message.into()),
            data: None,
            pagination: None,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            message: Some(message.into()),
            data: None,
            pagination: None,
            error: None,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Wraps one page of results together with its pagination block.
    pub fn paginated(page: PaginatedResponse<T>) -> Self {
        ApiResponse {
            success: true,
            message: None,
            data: Some(page.data),
            pagination: Some(page.pagination),
            error: None,
        }
    }
}

/// Wrapper converting manager errors to HTTP responses.
///
/// Internal failures surface as an opaque error code; the underlying
/// error is logged server-side, never echoed to the caller.
pub struct ApiError(pub ManagerError);

impl From<ManagerError> for ApiError {
    fn from(err: ManagerError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            ManagerError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                ApiResponse::<()>::failure("Product not found"),
            ),
            ManagerError::Validation(errors) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                (
                    StatusCode::BAD_REQUEST,
                    ApiResponse::<()>::failure(format!(
                        "Missing or invalid fields: {}",
                        fields.join(", ")
                    )),
                )
            }
            ManagerError::DuplicateBarcode(_) | ManagerError::DuplicateSerial(_) => (
                StatusCode::CONFLICT,
                ApiResponse::<()>::failure("Product with this barcode or serial already exists"),
            ),
            ManagerError::Storage(err) => {
                error!(error = %err, "Storage error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse {
                        success: false,
                        message: Some("Server error".to_string()),
                        data: None,
                        pagination: None,
                        error: Some("INTERNAL_ERROR".to_string()),
                    },
                )
            }
        };

        (status, ResponseJson(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_omits_absent_fields() {
        let json = serde_json::to_value(ApiResponse::success(42)).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], 42);
        assert!(json.get("message").is_none());
        assert!(json.get("error").is_none());
        assert!(json.get("pagination").is_none());
    }

    #[test]
    fn failure_envelope_carries_message() {
        let json = serde_json::to_value(ApiResponse::<()>::failure("Product not found")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Product not found");
        assert!(json.get("data").is_none());
    }
}
