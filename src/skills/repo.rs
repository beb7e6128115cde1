use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;

use super::repo_types::{NewSkill, Skill, SkillPatch};

#[async_trait]
pub trait SkillRepo: Send + Sync {
    /// Every skill, in id order.
    async fn list(&self) -> anyhow::Result<Vec<Skill>>;
    async fn find(&self, id: i64) -> anyhow::Result<Option<Skill>>;
    async fn create(&self, new: NewSkill) -> anyhow::Result<Skill>;
    /// Returns `None` when no row has this id.
    async fn update(&self, id: i64, patch: SkillPatch) -> anyhow::Result<Option<Skill>>;
    /// Returns whether a row was removed.
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;
}

#[derive(Clone)]
pub struct PgSkillRepo {
    db: PgPool,
}

impl PgSkillRepo {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillRepo for PgSkillRepo {
    async fn list(&self) -> anyhow::Result<Vec<Skill>> {
        let rows = sqlx::query_as::<_, Skill>(
            r#"
            SELECT id, title, description, price_per_hour, location, user_id,
                   created_at, updated_at
            FROM skills
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await
        .context("list skills")?;
        Ok(rows)
    }

    async fn find(&self, id: i64) -> anyhow::Result<Option<Skill>> {
        let row = sqlx::query_as::<_, Skill>(
            r#"
            SELECT id, title, description, price_per_hour, location, user_id,
                   created_at, updated_at
            FROM skills
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .context("find skill")?;
        Ok(row)
    }

    async fn create(&self, new: NewSkill) -> anyhow::Result<Skill> {
        let row = sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO skills (title, description, price_per_hour, location, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, description, price_per_hour, location, user_id,
                      created_at, updated_at
            "#,
        )
        .bind(new.title)
        .bind(new.description)
        .bind(new.price_per_hour)
        .bind(new.location)
        .bind(new.user_id)
        .fetch_one(&self.db)
        .await
        .context("insert skill")?;
        Ok(row)
    }

    async fn update(&self, id: i64, patch: SkillPatch) -> anyhow::Result<Option<Skill>> {
        // Each column gets a "supplied" flag so an explicit NULL can be written.
        let row = sqlx::query_as::<_, Skill>(
            r#"
            UPDATE skills
               SET title          = CASE WHEN $2 THEN $3 ELSE title END,
                   description    = CASE WHEN $4 THEN $5 ELSE description END,
                   price_per_hour = CASE WHEN $6 THEN $7 ELSE price_per_hour END,
                   location       = CASE WHEN $8 THEN $9 ELSE location END,
                   updated_at     = now()
             WHERE id = $1
            RETURNING id, title, description, price_per_hour, location, user_id,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(patch.title.is_some())
        .bind(patch.title.flatten())
        .bind(patch.description.is_some())
        .bind(patch.description.flatten())
        .bind(patch.price_per_hour.is_some())
        .bind(patch.price_per_hour.flatten())
        .bind(patch.location.is_some())
        .bind(patch.location.flatten())
        .fetch_optional(&self.db)
        .await
        .context("update skill")?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .context("delete skill")?;
        Ok(res.rows_affected() > 0)
    }
}
