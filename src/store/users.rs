use crate::entities::{comment, favorite_user, post, user};
use crate::error::{StoreError, StoreResult};
use crate::models::{CascadeSummary, NewUser, UserChanges};
use sea_orm::sea_query::Query;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};

pub async fn create_user<C: ConnectionTrait>(db: &C, new_user: NewUser) -> StoreResult<user::Model> {
    let active = user::ActiveModel {
        email: Set(new_user.email),
        password: Set(new_user.password),
        is_active: Set(new_user.is_active),
        ..Default::default()
    };

    let user = user::Entity::insert(active).exec_with_returning(db).await?;
    log::info!("Created user {}", user.id);
    Ok(user)
}

pub async fn find_user<C: ConnectionTrait>(db: &C, id: i32) -> StoreResult<Option<user::Model>> {
    Ok(user::Entity::find_by_id(id).one(db).await?)
}

pub async fn find_user_by_email<C: ConnectionTrait>(
    db: &C,
    email: &str,
) -> StoreResult<Option<user::Model>> {
    Ok(user::Entity::find()
        .filter(user::Column::Email.eq(email))
        .one(db)
        .await?)
}

pub async fn update_user<C: ConnectionTrait>(
    db: &C,
    id: i32,
    changes: UserChanges,
) -> StoreResult<user::Model> {
    let existing = user::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(StoreError::NotFound { entity: "user", id })?;

    let mut active: user::ActiveModel = existing.clone().into();
    if let Some(email) = changes.email {
        active.email = Set(email);
    }
    if let Some(password) = changes.password {
        active.password = Set(password);
    }
    if let Some(is_active) = changes.is_active {
        active.is_active = Set(is_active);
    }

    if !active.is_changed() {
        return Ok(existing);
    }
    Ok(active.update(db).await?)
}

/// Deletes a user together with its posts, the comments it wrote, the
/// comments on its posts and every favorite edge touching it.
pub async fn delete_user<C: TransactionTrait>(db: &C, id: i32) -> StoreResult<CascadeSummary> {
    let txn = db.begin().await?;

    let authored_posts = Query::select()
        .column(post::Column::Id)
        .from(post::Entity)
        .and_where(post::Column::UserId.eq(id))
        .to_owned();

    let comments = comment::Entity::delete_many()
        .filter(
            Condition::any()
                .add(comment::Column::UserId.eq(id))
                .add(comment::Column::PostId.in_subquery(authored_posts)),
        )
        .exec(&txn)
        .await?
        .rows_affected;

    let posts = post::Entity::delete_many()
        .filter(post::Column::UserId.eq(id))
        .exec(&txn)
        .await?
        .rows_affected;

    let favorites = favorite_user::Entity::delete_many()
        .filter(
            Condition::any()
                .add(favorite_user::Column::UserId.eq(id))
                .add(favorite_user::Column::FavoriteUserId.eq(id)),
        )
        .exec(&txn)
        .await?
        .rows_affected;

    let users = user::Entity::delete_by_id(id).exec(&txn).await?.rows_affected;
    if users == 0 {
        txn.rollback().await?;
        return Err(StoreError::NotFound { entity: "user", id });
    }

    txn.commit().await?;

    let summary = CascadeSummary {
        users,
        posts,
        comments,
        favorites,
    };
    log::info!("Deleted user {}: {:?}", id, summary);
    Ok(summary)
}
