use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct NewComment {
    pub user_id: i32,
    pub post_id: i32,
    pub content: String,
}
