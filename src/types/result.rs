//! Typed use-case outcome value.
//!
//! Every use case returns exactly one `UseCaseResult`. The `success` flag is
//! derived from the application status at serialization time, so the two can
//! never disagree. Once returned to the dispatcher the value is consumed by
//! move; nothing downstream mutates or retries it.

use serde::Serialize;
use serde_json::{json, Value};

use crate::types::ApplicationStatus;

/// Outcome of one use-case invocation
#[derive(Debug, Clone)]
pub struct UseCaseResult<T = ()> {
    status: ApplicationStatus,
    message: Option<String>,
    data: Option<T>,
}

/// Canonical serialized envelope; `None` fields are omitted
#[derive(Debug, Serialize)]
pub struct ResultDto<T> {
    pub success: bool,
    #[serde(rename = "statusCode")]
    pub status_code: ApplicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> UseCaseResult<T> {
    /// Successful outcome carrying a payload
    pub fn success_with(data: T) -> Self {
        Self {
            status: ApplicationStatus::Success,
            message: None,
            data: Some(data),
        }
    }

    /// Successful outcome carrying only a message
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            status: ApplicationStatus::Success,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Failed outcome. `status` must not be a success code.
    pub fn failure(status: ApplicationStatus, message: impl Into<String>) -> Self {
        debug_assert!(!status.is_success(), "failure with a success status");
        Self {
            status,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn status(&self) -> ApplicationStatus {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }
}

impl UseCaseResult<()> {
    /// Successful outcome with neither payload nor message
    pub fn success() -> Self {
        Self {
            status: ApplicationStatus::Success,
            message: None,
            data: None,
        }
    }
}

impl<T: Serialize> UseCaseResult<T> {
    /// Canonical DTO shape (compact: absent fields omitted)
    pub fn into_dto(self) -> ResultDto<T> {
        ResultDto {
            success: self.status.is_success(),
            status_code: self.status,
            message: self.message,
            data: self.data,
        }
    }

    /// Full envelope shape (explicit: absent fields serialized as null)
    pub fn to_envelope(&self) -> Value {
        json!({
            "success": self.status.is_success(),
            "statusCode": self.status,
            "message": self.message,
            "data": self.data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_flag_follows_status() {
        let ok = UseCaseResult::success_with("token");
        assert!(ok.is_success());
        assert_eq!(ok.status(), ApplicationStatus::Success);

        let bad: UseCaseResult<String> =
            UseCaseResult::failure(ApplicationStatus::InvalidInput, "nope");
        assert!(!bad.is_success());
    }

    #[test]
    fn dto_omits_absent_fields() {
        let result: UseCaseResult<String> =
            UseCaseResult::failure(ApplicationStatus::InvalidInput, "Invalid email address.");
        let encoded = serde_json::to_value(result.into_dto()).unwrap();

        assert_eq!(
            encoded,
            json!({
                "success": false,
                "statusCode": "INVALID_INPUT",
                "message": "Invalid email address.",
            })
        );
    }

    #[test]
    fn envelope_keeps_absent_fields_as_null() {
        let result = UseCaseResult::success_with(json!({"token": "abc"}));
        let envelope = result.to_envelope();

        assert_eq!(envelope["success"], json!(true));
        assert_eq!(envelope["statusCode"], json!("SUCCESS"));
        assert_eq!(envelope["message"], Value::Null);
        assert_eq!(envelope["data"]["token"], json!("abc"));
    }
}
