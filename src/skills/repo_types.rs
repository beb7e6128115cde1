use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

use crate::ownership::Owned;

/// Skill listing row. Content columns are nullable; `user_id` is fixed at insert.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price_per_hour: Option<f64>,
    pub location: Option<String>,
    pub user_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Owned for Skill {
    fn owner_id(&self) -> i64 {
        self.user_id
    }
}

#[derive(Debug, Clone)]
pub struct NewSkill {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price_per_hour: Option<f64>,
    pub location: Option<String>,
    pub user_id: i64,
}

/// Partial update. Outer `None` keeps the stored value, `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct SkillPatch {
    pub title: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub price_per_hour: Option<Option<f64>>,
    pub location: Option<Option<String>>,
}
