//! JSON body for failures that happen before a GraphQL request is executed,
//! such as an unparseable request body.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,

    /// HTTP status of the response carrying this body.
    pub status: u16,
}

impl ErrorResponse {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_body() {
        let body = serde_json::to_value(ErrorResponse::bad_request("bad body")).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "bad body", "status": 400 }));
    }
}
