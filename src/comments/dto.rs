use serde::Deserialize;

/// Body of `POST /skills/:id/comments`.
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub body: String,
}

/// Body of `PATCH /comments/:id`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCommentRequest {
    pub body: Option<String>,
}
