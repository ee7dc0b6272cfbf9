use crate::models::Post;
use serde::Serialize;

/// Confirmation wrapper returned by create and update.
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub message: String,
    pub post: Post,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
