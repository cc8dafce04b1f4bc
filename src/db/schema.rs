use crate::entities::{comment, favorite_user, post, user};
use sea_orm::sea_query::{
    ColumnDef, Expr, ForeignKey, ForeignKeyAction, Index, IndexCreateStatement, SimpleExpr, Table,
    TableCreateStatement,
};
use sea_orm::{ConnectionTrait, DbBackend, DbErr};

/// Creates `users`, `posts`, `comments` and `favorite_users` if they do not
/// exist yet. Foreign keys restrict deletes; cascades live in `store`.
pub async fn create_tables<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let backend = db.get_database_backend();

    let tables = [
        users_table(backend),
        posts_table(backend),
        comments_table(),
        favorite_users_table(),
    ];
    for table in &tables {
        db.execute(backend.build(table)).await?;
    }

    // InnoDB indexes foreign key columns on its own and has no
    // CREATE INDEX IF NOT EXISTS.
    if backend != DbBackend::MySql {
        for index in &foreign_key_indexes() {
            db.execute(backend.build(index)).await?;
        }
    }

    log::info!("Schema ready: users, posts, comments, favorite_users");
    Ok(())
}

pub fn users_table(backend: DbBackend) -> TableCreateStatement {
    Table::create()
        .table(user::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(user::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(user::Column::Email)
                .string_len(user::EMAIL_MAX_LEN as u32)
                .not_null()
                .unique_key()
                .check(length_within(backend, "email", user::EMAIL_MAX_LEN)),
        )
        .col(ColumnDef::new(user::Column::Password).string().not_null())
        .col(ColumnDef::new(user::Column::IsActive).boolean().not_null())
        .to_owned()
}

pub fn posts_table(backend: DbBackend) -> TableCreateStatement {
    Table::create()
        .table(post::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(post::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(post::Column::UserId).integer().not_null())
        .col(ColumnDef::new(post::Column::Caption).text().null())
        .col(
            ColumnDef::new(post::Column::ImageUrl)
                .string_len(post::IMAGE_URL_MAX_LEN as u32)
                .not_null()
                .check(length_within(
                    backend,
                    "image_url",
                    post::IMAGE_URL_MAX_LEN,
                )),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_posts_user_id")
                .from(post::Entity, post::Column::UserId)
                .to(user::Entity, user::Column::Id)
                .on_delete(ForeignKeyAction::Restrict),
        )
        .to_owned()
}

pub fn comments_table() -> TableCreateStatement {
    Table::create()
        .table(comment::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(comment::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(comment::Column::UserId).integer().not_null())
        .col(ColumnDef::new(comment::Column::PostId).integer().not_null())
        .col(ColumnDef::new(comment::Column::Content).text().not_null())
        .foreign_key(
            ForeignKey::create()
                .name("fk_comments_user_id")
                .from(comment::Entity, comment::Column::UserId)
                .to(user::Entity, user::Column::Id)
                .on_delete(ForeignKeyAction::Restrict),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_comments_post_id")
                .from(comment::Entity, comment::Column::PostId)
                .to(post::Entity, post::Column::Id)
                .on_delete(ForeignKeyAction::Restrict),
        )
        .to_owned()
}

pub fn favorite_users_table() -> TableCreateStatement {
    Table::create()
        .table(favorite_user::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(favorite_user::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(favorite_user::Column::UserId)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(favorite_user::Column::FavoriteUserId)
                .integer()
                .not_null(),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_favorite_users_user_id")
                .from(favorite_user::Entity, favorite_user::Column::UserId)
                .to(user::Entity, user::Column::Id)
                .on_delete(ForeignKeyAction::Restrict),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_favorite_users_favorite_user_id")
                .from(favorite_user::Entity, favorite_user::Column::FavoriteUserId)
                .to(user::Entity, user::Column::Id)
                .on_delete(ForeignKeyAction::Restrict),
        )
        .to_owned()
}

fn foreign_key_indexes() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .if_not_exists()
            .name("idx_posts_user_id")
            .table(post::Entity)
            .col(post::Column::UserId)
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name("idx_comments_user_id")
            .table(comment::Entity)
            .col(comment::Column::UserId)
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name("idx_comments_post_id")
            .table(comment::Entity)
            .col(comment::Column::PostId)
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name("idx_favorite_users_user_id")
            .table(favorite_user::Entity)
            .col(favorite_user::Column::UserId)
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name("idx_favorite_users_favorite_user_id")
            .table(favorite_user::Entity)
            .col(favorite_user::Column::FavoriteUserId)
            .to_owned(),
    ]
}

fn length_within(backend: DbBackend, column: &str, max: usize) -> SimpleExpr {
    let function = match backend {
        DbBackend::Sqlite => "LENGTH",
        _ => "CHAR_LENGTH",
    };
    Expr::cust(format!("{function}({column}) <= {max}"))
}
