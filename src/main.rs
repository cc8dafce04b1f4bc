use sea_orm::{EntityTrait, PaginatorTrait};
use social_schema::config::Config;
use social_schema::db::create_pool;
use social_schema::entities::{comment, favorite_user, post, user};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env()?;

    let pool = create_pool(&config).await?;
    log::info!("Database connection established");

    let users = user::Entity::find().count(&pool).await?;
    let posts = post::Entity::find().count(&pool).await?;
    let comments = comment::Entity::find().count(&pool).await?;
    let favorites = favorite_user::Entity::find().count(&pool).await?;

    log::info!(
        "users={} posts={} comments={} favorite_users={}",
        users,
        posts,
        comments,
        favorites
    );

    Ok(())
}
