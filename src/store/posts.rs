use crate::entities::{comment, post};
use crate::error::{StoreError, StoreResult};
use crate::models::{CascadeSummary, NewPost, PostChanges};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

pub async fn create_post<C: ConnectionTrait>(db: &C, new_post: NewPost) -> StoreResult<post::Model> {
    let active = post::ActiveModel {
        user_id: Set(new_post.user_id),
        caption: Set(new_post.caption),
        image_url: Set(new_post.image_url),
        ..Default::default()
    };

    let post = post::Entity::insert(active).exec_with_returning(db).await?;
    log::info!("Created post {} for user {}", post.id, post.user_id);
    Ok(post)
}

pub async fn find_post<C: ConnectionTrait>(db: &C, id: i32) -> StoreResult<Option<post::Model>> {
    Ok(post::Entity::find_by_id(id).one(db).await?)
}

pub async fn find_posts_of<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
) -> StoreResult<Vec<post::Model>> {
    Ok(post::Entity::find()
        .filter(post::Column::UserId.eq(user_id))
        .order_by_asc(post::Column::Id)
        .all(db)
        .await?)
}

pub async fn update_post<C: ConnectionTrait>(
    db: &C,
    id: i32,
    changes: PostChanges,
) -> StoreResult<post::Model> {
    let existing = post::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(StoreError::NotFound { entity: "post", id })?;

    let mut active: post::ActiveModel = existing.clone().into();
    if let Some(caption) = changes.caption {
        active.caption = Set(caption);
    }
    if let Some(image_url) = changes.image_url {
        active.image_url = Set(image_url);
    }

    if !active.is_changed() {
        return Ok(existing);
    }
    Ok(active.update(db).await?)
}

/// Deletes a post and all comments on it in one transaction.
pub async fn delete_post<C: TransactionTrait>(db: &C, id: i32) -> StoreResult<CascadeSummary> {
    let txn = db.begin().await?;

    let comments = comment::Entity::delete_many()
        .filter(comment::Column::PostId.eq(id))
        .exec(&txn)
        .await?
        .rows_affected;

    let posts = post::Entity::delete_by_id(id).exec(&txn).await?.rows_affected;
    if posts == 0 {
        txn.rollback().await?;
        return Err(StoreError::NotFound { entity: "post", id });
    }

    txn.commit().await?;

    let summary = CascadeSummary {
        posts,
        comments,
        ..Default::default()
    };
    log::info!("Deleted post {}: {:?}", id, summary);
    Ok(summary)
}
