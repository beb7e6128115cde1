use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;

use super::repo_types::{Comment, NewComment};

#[async_trait]
pub trait CommentRepo: Send + Sync {
    /// Comments of one skill, in id order.
    async fn list_by_skill(&self, skill_id: i64) -> anyhow::Result<Vec<Comment>>;
    async fn find(&self, id: i64) -> anyhow::Result<Option<Comment>>;
    async fn create(&self, new: NewComment) -> anyhow::Result<Comment>;
    /// `body: None` only bumps `updated_at`. Returns `None` when no row has this id.
    async fn update(&self, id: i64, body: Option<String>) -> anyhow::Result<Option<Comment>>;
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;
}

#[derive(Clone)]
pub struct PgCommentRepo {
    db: PgPool,
}

impl PgCommentRepo {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepo for PgCommentRepo {
    async fn list_by_skill(&self, skill_id: i64) -> anyhow::Result<Vec<Comment>> {
        let rows = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, body, user_id, skill_id, created_at, updated_at
              FROM comments
             WHERE skill_id = $1
             ORDER BY id
            "#,
        )
        .bind(skill_id)
        .fetch_all(&self.db)
        .await
        .context("list comments by skill")?;
        Ok(rows)
    }

    async fn find(&self, id: i64) -> anyhow::Result<Option<Comment>> {
        let row = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, body, user_id, skill_id, created_at, updated_at
              FROM comments
             WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .context("find comment")?;
        Ok(row)
    }

    async fn create(&self, new: NewComment) -> anyhow::Result<Comment> {
        let row = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (body, user_id, skill_id)
            VALUES ($1, $2, $3)
            RETURNING id, body, user_id, skill_id, created_at, updated_at
            "#,
        )
        .bind(new.body)
        .bind(new.user_id)
        .bind(new.skill_id)
        .fetch_one(&self.db)
        .await
        .context("insert comment")?;
        Ok(row)
    }

    async fn update(&self, id: i64, body: Option<String>) -> anyhow::Result<Option<Comment>> {
        let row = sqlx::query_as::<_, Comment>(
            r#"
            UPDATE comments
               SET body       = COALESCE($2, body),
                   updated_at = now()
             WHERE id = $1
            RETURNING id, body, user_id, skill_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(body)
        .fetch_optional(&self.db)
        .await
        .context("update comment")?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .context("delete comment")?;
        Ok(res.rows_affected() > 0)
    }
}
