mod login;
mod middleware;
mod posts;

use std::sync::Arc;

use axum::Router;

use crate::service::AdminService;

/// Shared application state.
pub type AppState = Arc<AdminService>;

/// Build the complete admin API router.
///
/// Routes carry their full paths (`/admin/...` and `/posts/...`) —
/// the caller merges them at the application root.
pub fn build_router(svc: Arc<AdminService>) -> Router {
    Router::new()
        .merge(login::routes())
        .merge(posts::routes())
        .layer(axum::middleware::from_fn_with_state(
            svc.clone(),
            middleware::auth_middleware,
        ))
        .with_state(svc)
}
