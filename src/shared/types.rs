use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome marker carried by every JSON acknowledgment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Error,
}

/// JSON envelope: `{status, message}` plus the fields of `data`, flattened.
///
/// Use `()` as `T` for plain acknowledgments.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: ApiStatus,
    pub message: String,
    #[serde(flatten)]
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// OpenAPI shape of a plain `{status, message}` acknowledgment
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct MessageResponseDto {
    pub status: ApiStatus,
    #[schema(example = "Pembayaran SPP sebesar Rp 2,500,000 berhasil!")]
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: ApiStatus::Success,
            message: message.into(),
            data,
            errors: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self::success(message, ())
    }

    pub fn error(message: impl Into<String>, errors: Option<Vec<String>>) -> Self {
        Self {
            status: ApiStatus::Error,
            message: message.into(),
            data: (),
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Extra {
        surat_url: String,
    }

    #[test]
    fn test_data_fields_are_flattened() {
        let response = ApiResponse::success(
            "ok",
            Extra {
                surat_url: "/download-surat/1".to_string(),
            },
        );
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "status": "success",
                "message": "ok",
                "surat_url": "/download-surat/1"
            })
        );
    }

    #[test]
    fn test_plain_message() {
        let json = serde_json::to_value(ApiResponse::message("ok")).unwrap();
        assert_eq!(json, serde_json::json!({"status": "success", "message": "ok"}));
    }

    #[test]
    fn test_error_with_details() {
        let json = serde_json::to_value(ApiResponse::error(
            "invalid",
            Some(vec!["nim".to_string()]),
        ))
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "error", "message": "invalid", "errors": ["nim"]})
        );
    }
}
