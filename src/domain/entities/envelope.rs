use serde::Serialize;

/// The uniform JSON wrapper returned by every endpoint:
/// `{success, data}` on the happy path, `{success, message}` otherwise.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        ApiResponse {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ApiResponse {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_omits_message() {
        let json = serde_json::to_value(ApiResponse::ok(vec![1, 2, 3])).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
        assert!(json.get("message").is_none());
    }

    #[test]
    fn message_envelope_omits_data() {
        let json =
            serde_json::to_value(ApiResponse::<()>::message("Project deleted successfully"))
                .unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Project deleted successfully");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn error_envelope_is_unsuccessful() {
        let json = serde_json::to_value(ApiResponse::<()>::error("Route not found")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Route not found");
    }
}
