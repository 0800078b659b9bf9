//! Wire envelopes used by the backend and the uniform result shape handed to pages.

use super::messages::{self, MessageDomain};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// `{ success, data, message }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub codes: CodeFields,
}

impl<T> ApiEnvelope<T> {
    pub fn backend_code(&self) -> Option<String> {
        self.codes.first_text()
    }
}

/// The backend spells its error code three ways, and `code` is sometimes the
/// numeric HTTP status. Each spelling is read on its own so a number in one
/// does not sink the whole body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<Value>,
    #[serde(default, rename = "errorCode", skip_serializing_if = "Option::is_none")]
    pub error_code_camel: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<Value>,
}

impl CodeFields {
    /// First spelling that carries a non-empty string.
    pub fn first_text(&self) -> Option<String> {
        [&self.error_code, &self.error_code_camel, &self.code]
            .into_iter()
            .find_map(|value| match value {
                Some(Value::String(code)) if !code.trim().is_empty() => Some(code.clone()),
                _ => None,
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub page: u32,
    pub limit: u32,
    pub total_items: u64,
    pub total_pages: u32,
}

/// `data` of a paginated list endpoint: `{ items, metadata }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedData<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub metadata: PageMetadata,
}

pub type PagedEnvelope<T> = ApiEnvelope<PagedData<T>>;

/// Nested `error` object some endpoints return instead of a flat code.
#[derive(Debug, Clone, Default, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    code: Option<Value>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(flatten)]
    codes: CodeFields,
    #[serde(default)]
    error: Option<ErrorDetail>,
}

/// A request that did not produce usable data.
///
/// `status == None` means no response was received at all.
#[derive(Debug, Clone, Default, PartialEq, Error)]
#[error("request failed (status: {status:?}, code: {code:?}, detail: {detail:?})")]
pub struct ApiFailure {
    pub status: Option<u16>,
    pub code: Option<String>,
    pub detail: Option<String>,
}

impl ApiFailure {
    pub fn network(detail: impl Into<String>) -> Self {
        Self {
            status: None,
            code: None,
            detail: Some(detail.into()),
        }
    }

    /// Builds a failure from a non-2xx response body. Bodies that are not
    /// JSON keep the raw text as detail.
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => {
                let nested = parsed.error.unwrap_or_default();
                Self {
                    status: Some(status),
                    code: parsed.codes.first_text().or(match nested.code {
                        Some(Value::String(code)) => Some(code),
                        _ => None,
                    }),
                    detail: parsed.message.or(nested.message),
                }
            }
            Err(_) => Self {
                status: Some(status),
                code: None,
                detail: (!body.trim().is_empty()).then(|| body.trim().to_string()),
            },
        }
    }

    /// 2xx response whose envelope reported `success: false`.
    pub fn rejected<T>(status: u16, envelope: &ApiEnvelope<T>) -> Self {
        Self {
            status: Some(status),
            code: envelope.backend_code(),
            detail: envelope.message.clone(),
        }
    }

    pub fn decode(detail: impl Into<String>) -> Self {
        Self {
            status: Some(200),
            code: None,
            detail: Some(detail.into()),
        }
    }

    /// A call attempted without a session; reads like a backend 401.
    pub fn unauthenticated() -> Self {
        Self {
            status: Some(401),
            code: None,
            detail: Some("no active session".to_string()),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }

    pub fn user_message(&self, domain: MessageDomain) -> String {
        messages::resolve(domain, self.code.as_deref(), self.status).to_string()
    }

    /// Message for a failed load: same lookup, but an unrecognised failure
    /// reads as "could not load" rather than "unknown error".
    pub fn fetch_message(&self, domain: MessageDomain) -> String {
        match messages::resolve(domain, self.code.as_deref(), self.status) {
            messages::UNKNOWN_ERROR => messages::FETCH_FAILED.to_string(),
            msg => msg.to_string(),
        }
    }
}

/// Uniform outcome of a mutation: callers branch on `success` instead of
/// handling errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    pub fn from_result(result: Result<T, ApiFailure>, domain: MessageDomain) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(failure) => Self::fail(failure.user_message(domain)),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResult<U> {
        ApiResult {
            success: self.success,
            data: self.data.map(f),
            message: self.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paged_envelope_parses() {
        let body = r#"{
            "success": true,
            "data": {
                "items": [1, 2],
                "metadata": { "page": 1, "limit": 2, "total_items": 5, "total_pages": 3 }
            }
        }"#;
        let env: PagedEnvelope<u32> = serde_json::from_str(body).unwrap();
        let data = env.data.unwrap();
        assert_eq!(data.items, vec![1, 2]);
        assert_eq!(data.metadata.total_pages, 3);
    }

    #[test]
    fn test_failure_reads_flat_and_nested_codes() {
        let flat = ApiFailure::from_response(
            409,
            r#"{"success":false,"error_code":"DELETION_REQUEST_PENDING","message":"pending"}"#,
        );
        assert_eq!(flat.code.as_deref(), Some("DELETION_REQUEST_PENDING"));

        let nested = ApiFailure::from_response(
            422,
            r#"{"success":false,"error":{"code":"REVOKE_WINDOW_EXPIRED","message":"too late"}}"#,
        );
        assert_eq!(nested.code.as_deref(), Some("REVOKE_WINDOW_EXPIRED"));
        assert_eq!(nested.detail.as_deref(), Some("too late"));
        assert_eq!(
            nested.user_message(MessageDomain::Cancellation),
            "Đã quá thời hạn thu hồi yêu cầu hủy"
        );
    }

    #[test]
    fn test_numeric_code_beside_error_code_keeps_backend_code() {
        let failure = ApiFailure::from_response(
            409,
            r#"{"success":false,"code":409,"error_code":"DELETION_REQUEST_PENDING","message":"pending"}"#,
        );
        assert_eq!(failure.code.as_deref(), Some("DELETION_REQUEST_PENDING"));
        assert_eq!(failure.detail.as_deref(), Some("pending"));

        let both = ApiFailure::from_response(
            409,
            r#"{"code":"X","error_code":"DELETION_REQUEST_PENDING"}"#,
        );
        assert_eq!(both.code.as_deref(), Some("DELETION_REQUEST_PENDING"));

        let only_numeric = ApiFailure::from_response(500, r#"{"code":500,"message":"boom"}"#);
        assert_eq!(only_numeric.code, None);
        assert_eq!(only_numeric.detail.as_deref(), Some("boom"));
    }

    #[test]
    fn test_rejected_envelope_with_numeric_code_still_parses() {
        let env: ApiEnvelope<u32> = serde_json::from_str(
            r#"{"success":false,"code":200,"errorCode":"MAX_BENEFICIARIES_REACHED"}"#,
        )
        .unwrap();
        let failure = ApiFailure::rejected(200, &env);
        assert_eq!(failure.code.as_deref(), Some("MAX_BENEFICIARIES_REACHED"));
    }

    #[test]
    fn test_non_json_body_falls_back_to_status_text() {
        let failure = ApiFailure::from_response(500, "<html>Bad gateway</html>");
        assert_eq!(failure.code, None);
        assert_eq!(
            failure.user_message(MessageDomain::Payout),
            "Lỗi hệ thống, vui lòng thử lại sau"
        );
    }

    #[test]
    fn test_fetch_message_for_unmapped_status() {
        let failure = ApiFailure::from_response(418, "");
        assert_eq!(
            failure.user_message(MessageDomain::Beneficiary),
            messages::UNKNOWN_ERROR
        );
        assert_eq!(
            failure.fetch_message(MessageDomain::Beneficiary),
            messages::FETCH_FAILED
        );
    }

    #[test]
    fn test_result_from_failure_carries_message() {
        let result: ApiResult<()> =
            ApiResult::from_result(Err(ApiFailure::network("offline")), MessageDomain::Policy);
        assert!(!result.success);
        assert_eq!(result.message.as_deref(), Some(messages::NETWORK_ERROR));
    }
}
