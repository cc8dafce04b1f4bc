use serde::Serialize;

/// Rows removed by a cascading delete, all within one transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CascadeSummary {
    pub users: u64,
    pub posts: u64,
    pub comments: u64,
    pub favorites: u64,
}
