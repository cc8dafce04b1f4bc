use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const IMAGE_URL_MAX_LEN: usize = 250;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub caption: Option<String>,
    #[sea_orm(column_type = "String(Some(250))")]
    pub image_url: String,
}

impl Model {
    pub fn serialize(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("id".to_string(), Value::from(self.id));
        fields.insert("user_id".to_string(), Value::from(self.user_id));
        fields.insert(
            "caption".to_string(),
            self.caption.clone().map_or(Value::Null, Value::from),
        );
        fields.insert("image_url".to_string(), Value::from(self.image_url.clone()));
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
    #[sea_orm(has_many = "super::comment::Entity")]
    Comments,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialize_keeps_missing_caption_as_null() {
        let post = Model {
            id: 3,
            user_id: 1,
            caption: None,
            image_url: "http://x/3.png".to_string(),
        };
        assert_eq!(
            Value::Object(post.serialize()),
            json!({"id": 3, "user_id": 1, "caption": null, "image_url": "http://x/3.png"})
        );
    }
}
