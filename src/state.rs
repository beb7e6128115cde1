use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    auth::repo::{PgUserRepo, UserRepo},
    comments::repo::{CommentRepo, PgCommentRepo},
    config::AppConfig,
    skills::repo::{PgSkillRepo, SkillRepo},
};

/// Shared per-process state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserRepo>,
    pub skills: Arc<dyn SkillRepo>,
    pub comments: Arc<dyn CommentRepo>,
}

impl AppState {
    /// Postgres-backed repositories sharing one pool.
    pub fn from_pool(db: PgPool, config: Arc<AppConfig>) -> Self {
        Self {
            config,
            users: Arc::new(PgUserRepo::new(db.clone())),
            skills: Arc::new(PgSkillRepo::new(db.clone())),
            comments: Arc::new(PgCommentRepo::new(db)),
        }
    }
}
