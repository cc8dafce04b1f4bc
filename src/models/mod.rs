pub mod comment;
pub mod post;
pub mod summary;
pub mod user;

pub use comment::*;
pub use post::*;
pub use summary::*;
pub use user::*;
