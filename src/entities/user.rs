use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const EMAIL_MAX_LEN: usize = 120;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique, column_type = "String(Some(120))")]
    pub email: String,
    /// Credential digest; never leaves the layer.
    #[serde(skip_serializing)]
    pub password: String,
    pub is_active: bool,
}

impl Model {
    pub fn serialize(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("id".to_string(), Value::from(self.id));
        fields.insert("email".to_string(), Value::from(self.email.clone()));
        fields.insert("is_active".to_string(), Value::from(self.is_active));
        fields
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Posts,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comments,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Posts.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

/// Users this user has marked as favorite (outgoing edges).
#[derive(Debug)]
pub struct FavoritesLink;

impl Linked for FavoritesLink {
    type FromEntity = Entity;
    type ToEntity = Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::favorite_user::Relation::User.def().rev(),
            super::favorite_user::Relation::FavoriteUser.def(),
        ]
    }
}

/// Users who have marked this user as favorite (incoming edges).
#[derive(Debug)]
pub struct FavoritedByLink;

impl Linked for FavoritedByLink {
    type FromEntity = Entity;
    type ToEntity = Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::favorite_user::Relation::FavoriteUser.def().rev(),
            super::favorite_user::Relation::User.def(),
        ]
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Model {
        Model {
            id: 1,
            email: "a@x.com".to_string(),
            password: "h".to_string(),
            is_active: true,
        }
    }

    #[test]
    fn serialize_omits_password() {
        let fields = sample().serialize();
        assert!(!fields.contains_key("password"));
        assert_eq!(
            Value::Object(fields),
            json!({"id": 1, "email": "a@x.com", "is_active": true})
        );
    }

    #[test]
    fn serde_output_matches_serialize() {
        let model = sample();
        let via_serde = serde_json::to_value(&model).unwrap();
        assert_eq!(via_serde, Value::Object(model.serialize()));
    }
}
