use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub email: String,
    /// Credential digest, see [`crate::auth::hash_password`].
    pub password: String,
    pub is_active: bool,
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserChanges {
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
}
