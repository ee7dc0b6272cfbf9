use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Validate, Deserialize)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, message = "The title field is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "The content field is required"))]
    pub content: String,
}

/// Fields left out of the body (or sent as "") keep their current value.
#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}
