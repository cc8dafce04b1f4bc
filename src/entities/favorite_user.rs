use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Directed edge: `user_id` marked `favorite_user_id` as a favorite.
///
/// Both columns point at `users`, so there is no `Related<user::Entity>`
/// impl; navigate through [`super::user::FavoritesLink`] and
/// [`super::user::FavoritedByLink`] or filter on the columns directly.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "favorite_users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub favorite_user_id: i32,
}

impl Model {
    pub fn serialize(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("id".to_string(), Value::from(self.id));
        fields.insert("user_id".to_string(), Value::from(self.user_id));
        fields.insert(
            "favorite_user_id".to_string(),
            Value::from(self.favorite_user_id),
        );
        fields
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Restrict"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::FavoriteUserId",
        to = "super::user::Column::Id",
        on_delete = "Restrict"
    )]
    FavoriteUser,
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialize_edge() {
        let edge = Model {
            id: 1,
            user_id: 2,
            favorite_user_id: 3,
        };
        assert_eq!(
            Value::Object(edge.serialize()),
            json!({"id": 1, "user_id": 2, "favorite_user_id": 3})
        );
    }
}
