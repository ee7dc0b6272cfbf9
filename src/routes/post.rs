use crate::{
    dto::{CreatePostRequest, MessageResponse, PostResponse, UpdatePostRequest},
    errors::ApiError,
    models::Post,
    states::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;
use validator::Validate;

/// GET /posts
pub async fn list_posts(State(state): State<AppState>) -> Json<Vec<Post>> {
    let mut posts: Vec<Post> = state
        .posts
        .iter()
        .map(|entry| entry.value().clone())
        .collect();

    // Stable order for clients
    posts.sort_by_key(|post| post.id);

    Json(posts)
}

/// POST /posts
/// Body: { "title": "...", "content": "..." }
pub async fn create_post(
    State(state): State<AppState>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let post = Post {
        id: state.next_id(),
        title: payload.title,
        content: payload.content,
    };

    state.posts.insert(post.id, post.clone());

    info!("Post created: {}", post.id);

    Ok((
        StatusCode::CREATED,
        Json(PostResponse {
            message: "Post created successfully".to_string(),
            post,
        }),
    ))
}

/// GET /posts/:id
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Post>, ApiError> {
    let post = state.posts.get(&id).ok_or(ApiError::NotFound)?;

    Ok(Json(post.clone()))
}

/// PUT /posts/:id
/// Body fields are optional; empty or missing fields are left unchanged
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePostRequest>,
) -> Result<Json<PostResponse>, ApiError> {
    let mut entry = state.posts.get_mut(&id).ok_or(ApiError::NotFound)?;

    if !payload.title.is_empty() {
        entry.title = payload.title;
    }
    if !payload.content.is_empty() {
        entry.content = payload.content;
    }

    let post = entry.clone();
    drop(entry);

    info!("Post updated: {}", id);

    Ok(Json(PostResponse {
        message: "Post updated successfully".to_string(),
        post,
    }))
}

/// DELETE /posts/:id
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.posts.remove(&id).ok_or(ApiError::NotFound)?;

    info!("Post deleted: {}", id);

    Ok(Json(MessageResponse {
        message: "Post deleted successfully".to_string(),
    }))
}
