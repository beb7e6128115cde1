use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

use crate::ownership::Owned;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub body: String,
    pub user_id: i64,
    pub skill_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Owned for Comment {
    fn owner_id(&self) -> i64 {
        self.user_id
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub body: String,
    pub user_id: i64,
    pub skill_id: i64,
}
