use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::db::CommentStore;
use crate::handlers::comments as comment_handlers;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CommentStore>,
}

pub fn create_router(store: Arc<dyn CommentStore>) -> Router {
    let state = AppState { store };

    let comment_routes = Router::new()
        .route("/", get(comment_handlers::list_comments))
        .route("/:id", delete(comment_handlers::delete_comment));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/comments", comment_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    use super::*;
    use crate::db::PgCommentStore;

    #[tokio::test]
    async fn health_check_answers_without_touching_the_store() {
        // A pool pointing nowhere is fine, /health never uses it.
        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unused")
            .unwrap();
        let app = create_router(Arc::new(PgCommentStore::new(pool)));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
