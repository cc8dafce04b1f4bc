//! Data-access procedures over an explicitly passed connection handle.
//!
//! Plain reads and writes accept any [`sea_orm::ConnectionTrait`]; cascading
//! deletes need a [`sea_orm::TransactionTrait`] handle and run inside a
//! single transaction that is rolled back on any failure.

pub mod comments;
pub mod favorites;
pub mod posts;
pub mod users;

pub use comments::*;
pub use favorites::*;
pub use posts::*;
pub use users::*;
