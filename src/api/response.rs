//! Wire envelopes for API responses
//!
//! ```text
//! success: { "success": true,  "data": T, "message"?: string }
//! failure: { "success": false, "error": { "code": string, "message": string,
//!                                         "details"?: { [field]: string[] } } }
//! ```

use super::error::ErrorDetails;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Successful response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSuccessResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiSuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }
}

/// Error information carried by a failure envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorInfo {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ErrorDetails>,
}

/// Failure response envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub error: ApiErrorInfo,
}

impl ApiErrorResponse {
    pub fn new(error: ApiErrorInfo) -> Self {
        Self {
            success: false,
            error,
        }
    }
}

/// Outcome of trying to read a non-success body as a failure envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorBody {
    /// Body matched the failure envelope
    Declared(ApiErrorInfo),
    /// Anything else: wrong shape, `success: true`, missing or empty code
    Unrecognized,
}

impl ErrorBody {
    pub fn decode(body: Value) -> Self {
        match serde_json::from_value::<ApiErrorResponse>(body) {
            Ok(envelope) if !envelope.success && !envelope.error.code.is_empty() => {
                ErrorBody::Declared(envelope.error)
            }
            _ => ErrorBody::Unrecognized,
        }
    }
}

/// Pull the `data` member out of a success body without checking the envelope.
/// A missing member (or a non-object body) yields `null`.
pub fn take_data(body: Value) -> Value {
    match body {
        Value::Object(mut map) => map.remove("data").unwrap_or(Value::Null),
        _ => Value::Null,
    }
}

/// Page metadata attached to list responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl Pagination {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Success envelope with page metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub pagination: Pagination,
}

/// Decoded page of items
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    mod error_body {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_declared_error_is_recognized() {
            let body = json!({
                "success": false,
                "error": { "code": "NOT_FOUND", "message": "missing", "details": {} }
            });
            assert_eq!(
                ErrorBody::decode(body),
                ErrorBody::Declared(ApiErrorInfo {
                    code: "NOT_FOUND".to_string(),
                    message: "missing".to_string(),
                    details: Some(ErrorDetails::new()),
                })
            );
        }

        #[test]
        fn test_details_are_optional() {
            let body = json!({
                "success": false,
                "error": { "code": "BAD", "message": "bad" }
            });
            match ErrorBody::decode(body) {
                ErrorBody::Declared(info) => assert!(info.details.is_none()),
                other => panic!("expected declared error, got {other:?}"),
            }
        }

        #[test]
        fn test_success_true_is_not_an_error_envelope() {
            let body = json!({
                "success": true,
                "error": { "code": "X", "message": "y" }
            });
            assert_eq!(ErrorBody::decode(body), ErrorBody::Unrecognized);
        }

        #[test]
        fn test_missing_fields_fall_back() {
            assert_eq!(
                ErrorBody::decode(json!({ "success": false })),
                ErrorBody::Unrecognized
            );
            assert_eq!(
                ErrorBody::decode(json!({ "success": false, "error": { "code": "X" } })),
                ErrorBody::Unrecognized
            );
            assert_eq!(ErrorBody::decode(json!("oops")), ErrorBody::Unrecognized);
        }

        #[test]
        fn test_empty_code_falls_back() {
            let body = json!({
                "success": false,
                "error": { "code": "", "message": "no code" }
            });
            assert_eq!(ErrorBody::decode(body), ErrorBody::Unrecognized);
        }
    }

    mod envelopes {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_take_data() {
            assert_eq!(
                take_data(json!({ "success": true, "data": { "id": 1 } })),
                json!({ "id": 1 })
            );
            assert_eq!(take_data(json!({ "success": true })), Value::Null);
            assert_eq!(take_data(json!([1, 2])), Value::Null);
        }

        #[test]
        fn test_success_serializes_without_message() {
            let body = serde_json::to_value(ApiSuccessResponse::new(json!({ "id": 1 }))).unwrap();
            assert_eq!(body, json!({ "success": true, "data": { "id": 1 } }));
        }

        #[test]
        fn test_pagination_uses_camel_case() {
            let pagination: Pagination = serde_json::from_value(json!({
                "page": 1, "limit": 20, "total": 45, "totalPages": 3
            }))
            .unwrap();
            assert_eq!(pagination.total_pages, 3);
            assert!(pagination.has_next());
        }
    }
}
