use serde::{Deserialize, Serialize};

/// Form-encoded request body for `POST /{target}/feed`.
#[derive(Debug, Clone, Serialize)]
pub struct FeedPostRequest {
    /// Post message text.
    pub message: String,

    /// Access token; the Graph API accepts it as a body parameter.
    pub access_token: String,
}

/// Successful response from `POST /{target}/feed`.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedPostResponse {
    /// Created post id (`{page_id}_{post_id}`).
    pub id: Option<String>,
}

/// Graph API error envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphErrorBody {
    /// Error details.
    pub error: Option<GraphError>,
}

/// Inner Graph API error object.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphError {
    /// Human-readable error message.
    pub message: Option<String>,
    /// Error type (e.g. `"OAuthException"`).
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    /// Numeric error code.
    pub code: Option<i64>,
}
