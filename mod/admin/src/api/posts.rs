use axum::extract::{Path, State};
use axum::routing::{get, post, put};
use axum::{Json, Router};

use projectboard_core::ServiceError;

use crate::api::AppState;
use crate::model::PostInput;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/dashboard", get(dashboard))
        .route("/admin/create_post", get(create_post_form).post(create_post))
        .route("/admin/posts/{project_id}", get(view_post))
        .route(
            "/admin/posts/{project_id}/edit",
            get(edit_post_form).post(edit_post),
        )
        .route("/admin/posts/{project_id}/delete", post(delete_post))
        // Programmatic update endpoint, shares the form route's write path.
        .route("/posts/{project_id}", put(update_post))
}

/// GET /admin/dashboard — post count plus the full post list.
///
/// The count comes from a separate projected scan, not from the list.
async fn dashboard(
    State(svc): State<AppState>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let total_posts = svc.count_posts().map_err(ServiceError::from)?;
    let posts = svc.list_posts().map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({
        "total_posts": total_posts,
        "posts": posts,
    })))
}

/// GET /admin/create_post — empty post object for form prefill.
async fn create_post_form() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "post": PostInput::default(),
    }))
}

/// POST /admin/create_post — submit a new post to the external API.
async fn create_post(
    State(svc): State<AppState>,
    Json(input): Json<PostInput>,
) -> Result<(axum::http::StatusCode, Json<serde_json::Value>), ServiceError> {
    svc.create_post(input).await.map_err(ServiceError::from)?;
    Ok((
        axum::http::StatusCode::CREATED,
        Json(serde_json::json!({"message": "Post created successfully!"})),
    ))
}

/// GET /admin/posts/{project_id} — view a single post.
async fn view_post(
    State(svc): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let post = svc.get_post(&project_id).map_err(ServiceError::from)?;
    Ok(Json(serde_json::to_value(post).unwrap()))
}

/// GET /admin/posts/{project_id}/edit — current fields for form prefill.
async fn edit_post_form(
    State(svc): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let post = svc.get_post(&project_id).map_err(ServiceError::from)?;
    Ok(Json(serde_json::to_value(post).unwrap()))
}

/// POST /admin/posts/{project_id}/edit — form-driven update.
async fn edit_post(
    State(svc): State<AppState>,
    Path(project_id): Path<String>,
    Json(input): Json<PostInput>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    svc.update_post(&project_id, input)
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({"message": "Post updated successfully!"})))
}

/// PUT /posts/{project_id} — programmatic update.
///
/// Answers with the updated attributes, mirroring the managed store's
/// update-by-key response shape.
async fn update_post(
    State(svc): State<AppState>,
    Path(project_id): Path<String>,
    Json(input): Json<PostInput>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let post = svc
        .update_post(&project_id, input)
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({
        "message": "Post updated successfully!",
        "updatedAttributes": {
            "title": post.title,
            "description": post.description,
            "image": post.image,
        },
    })))
}

/// POST /admin/posts/{project_id}/delete — delete by key.
///
/// Succeeds whether or not the key existed.
async fn delete_post(
    State(svc): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    svc.delete_post(&project_id).map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({"message": "Post deleted successfully!"})))
}
