pub mod comment;
pub mod favorite_user;
pub mod post;
pub mod user;
