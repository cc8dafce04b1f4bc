use crate::entities::{favorite_user, user};
use crate::error::{StoreError, StoreResult};
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
};

/// Records that `user_id` marks `favorite_user_id` as a favorite.
pub async fn add_favorite<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    favorite_user_id: i32,
) -> StoreResult<favorite_user::Model> {
    let active = favorite_user::ActiveModel {
        user_id: Set(user_id),
        favorite_user_id: Set(favorite_user_id),
        ..Default::default()
    };

    let edge = favorite_user::Entity::insert(active)
        .exec_with_returning(db)
        .await?;
    log::debug!("User {} favorited user {}", user_id, favorite_user_id);
    Ok(edge)
}

pub async fn remove_favorite<C: ConnectionTrait>(db: &C, id: i32) -> StoreResult<()> {
    let result = favorite_user::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(StoreError::NotFound {
            entity: "favorite_user",
            id,
        });
    }
    Ok(())
}

/// Outgoing edges: users that `user_id` has favorited.
pub async fn find_favorites_of<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
) -> StoreResult<Vec<favorite_user::Model>> {
    Ok(favorite_user::Entity::find()
        .filter(favorite_user::Column::UserId.eq(user_id))
        .order_by_asc(favorite_user::Column::Id)
        .all(db)
        .await?)
}

/// Incoming edges: users that have favorited `user_id`.
pub async fn find_favorited_by_of<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
) -> StoreResult<Vec<favorite_user::Model>> {
    Ok(favorite_user::Entity::find()
        .filter(favorite_user::Column::FavoriteUserId.eq(user_id))
        .order_by_asc(favorite_user::Column::Id)
        .all(db)
        .await?)
}

pub async fn find_favorite_users_of<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
) -> StoreResult<Vec<user::Model>> {
    let owner = user::Entity::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or(StoreError::NotFound {
            entity: "user",
            id: user_id,
        })?;

    Ok(owner
        .find_linked(user::FavoritesLink)
        .order_by_asc(user::Column::Id)
        .all(db)
        .await?)
}

pub async fn find_favorited_by_users_of<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
) -> StoreResult<Vec<user::Model>> {
    let target = user::Entity::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or(StoreError::NotFound {
            entity: "user",
            id: user_id,
        })?;

    Ok(target
        .find_linked(user::FavoritedByLink)
        .order_by_asc(user::Column::Id)
        .all(db)
        .await?)
}
