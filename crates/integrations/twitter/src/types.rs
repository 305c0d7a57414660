use serde::{Deserialize, Serialize};

/// JSON request body for `POST /2/tweets`.
#[derive(Debug, Clone, Serialize)]
pub struct TweetRequest {
    /// Tweet text (the API enforces the length limit).
    pub text: String,
}

/// Successful response envelope from `POST /2/tweets`.
#[derive(Debug, Clone, Deserialize)]
pub struct TweetResponse {
    /// Created tweet, absent on error responses.
    pub data: Option<TweetData>,
}

/// Created tweet fields.
#[derive(Debug, Clone, Deserialize)]
pub struct TweetData {
    /// Tweet id.
    pub id: String,
    /// Echo of the posted text.
    pub text: String,
}

/// Error envelope the v2 API returns with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Short error title (e.g. `"Unauthorized"`).
    pub title: Option<String>,
    /// Longer human-readable description.
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tweet_request_serializes_text() {
        let req = TweetRequest {
            text: "What's happening?".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"text": "What's happening?"}));
    }

    #[test]
    fn tweet_response_deserializes_created_tweet() {
        let json = r#"{"data":{"id":"1445880548472328192","text":"Hello"}}"#;
        let resp: TweetResponse = serde_json::from_str(json).unwrap();
        let data = resp.data.unwrap();
        assert_eq!(data.id, "1445880548472328192");
        assert_eq!(data.text, "Hello");
    }

    #[test]
    fn api_error_body_deserializes() {
        let json = r#"{"title":"Unauthorized","detail":"Unauthorized","type":"about:blank","status":401}"#;
        let body: ApiErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.title.as_deref(), Some("Unauthorized"));
    }
}
