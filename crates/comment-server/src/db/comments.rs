use chrono::{DateTime, Utc};
use comment_shared::Comment;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::AppError;

/// Storage operations the comment handlers depend on. Injected at router
/// construction so tests can substitute a fake.
#[async_trait::async_trait]
pub trait CommentStore: Send + Sync {
    /// All comments, newest first.
    async fn list_newest_first(&self) -> Result<Vec<Comment>, AppError>;

    /// Find-and-delete as a single storage operation. Returns the removed
    /// comment, or `None` when nothing matched the id.
    async fn delete_by_id(&self, id: Uuid) -> Result<Option<Comment>, AppError>;
}

/// Postgres-backed store over a shared connection pool.
#[derive(Clone)]
pub struct PgCommentStore {
    pool: DbPool,
}

impl PgCommentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

type CommentRow = (
    Uuid,          // id
    String,        // content
    DateTime<Utc>, // created_at
);

fn row_to_comment(row: CommentRow) -> Comment {
    Comment {
        id: row.0,
        content: row.1,
        created_at: row.2,
    }
}

#[async_trait::async_trait]
impl CommentStore for PgCommentStore {
    async fn list_newest_first(&self) -> Result<Vec<Comment>, AppError> {
        let rows: Vec<CommentRow> = sqlx::query_as(
            r#"
            SELECT id, content, created_at
            FROM comments
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(row_to_comment).collect())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<Comment>, AppError> {
        // DELETE .. RETURNING keeps locate-and-remove atomic; two racing
        // deletes cannot both see the row.
        let row: Option<CommentRow> = sqlx::query_as(
            r#"
            DELETE FROM comments
            WHERE id = $1
            RETURNING id, content, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(row_to_comment))
    }
}
