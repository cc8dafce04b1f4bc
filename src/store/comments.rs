use crate::entities::comment;
use crate::error::{StoreError, StoreResult};
use crate::models::NewComment;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

pub async fn create_comment<C: ConnectionTrait>(
    db: &C,
    new_comment: NewComment,
) -> StoreResult<comment::Model> {
    let active = comment::ActiveModel {
        user_id: Set(new_comment.user_id),
        post_id: Set(new_comment.post_id),
        content: Set(new_comment.content),
        ..Default::default()
    };

    let comment = comment::Entity::insert(active).exec_with_returning(db).await?;
    log::debug!(
        "Created comment {} on post {} by user {}",
        comment.id,
        comment.post_id,
        comment.user_id
    );
    Ok(comment)
}

pub async fn find_comment<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> StoreResult<Option<comment::Model>> {
    Ok(comment::Entity::find_by_id(id).one(db).await?)
}

pub async fn find_comments_of_post<C: ConnectionTrait>(
    db: &C,
    post_id: i32,
) -> StoreResult<Vec<comment::Model>> {
    Ok(comment::Entity::find()
        .filter(comment::Column::PostId.eq(post_id))
        .order_by_asc(comment::Column::Id)
        .all(db)
        .await?)
}

pub async fn find_comments_of_user<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
) -> StoreResult<Vec<comment::Model>> {
    Ok(comment::Entity::find()
        .filter(comment::Column::UserId.eq(user_id))
        .order_by_asc(comment::Column::Id)
        .all(db)
        .await?)
}

pub async fn update_comment<C: ConnectionTrait>(
    db: &C,
    id: i32,
    content: String,
) -> StoreResult<comment::Model> {
    let existing = comment::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(StoreError::NotFound {
            entity: "comment",
            id,
        })?;

    let mut active: comment::ActiveModel = existing.into();
    active.content = Set(content);
    Ok(active.update(db).await?)
}

pub async fn delete_comment<C: ConnectionTrait>(db: &C, id: i32) -> StoreResult<()> {
    let result = comment::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(StoreError::NotFound {
            entity: "comment",
            id,
        });
    }
    Ok(())
}
