use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize)]
pub struct NewPost {
    pub user_id: i32,
    pub caption: Option<String>,
    pub image_url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostChanges {
    /// `Some(None)` clears the caption; in JSON an explicit `null` does the
    /// same, while an absent key leaves it untouched.
    #[serde(default, deserialize_with = "present")]
    pub caption: Option<Option<String>>,
    pub image_url: Option<String>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
