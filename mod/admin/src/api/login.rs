use axum::extract::{Extension, State};
use axum::routing::get;
use axum::{Json, Router};

use projectboard_core::ServiceError;

use crate::api::AppState;
use crate::model::{Claims, LoginRequest};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/login", get(login_form).post(login))
        .route("/admin/logout", get(logout))
}

/// GET /admin/login — rendering is owned by the frontend; describe
/// the endpoint for API callers.
async fn login_form() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "POST username and password to this endpoint to obtain an access token.",
    }))
}

/// POST /admin/login — verify credentials, issue a token.
async fn login(
    State(svc): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let resp = svc
        .login(&body.username, &body.password)
        .map_err(ServiceError::from)?;
    Ok(Json(serde_json::to_value(resp).unwrap()))
}

/// GET /admin/logout — revoke the caller's session.
async fn logout(
    State(svc): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    svc.revoke_session(&claims.sid).map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({
        "message": "You have been logged out.",
    })))
}
