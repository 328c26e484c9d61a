use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

const MAX_CONNECTIONS: u32 = 5;

/// Open (or create) the SQLite database at the given path and make sure the
/// `post` table exists.
pub async fn init_pool(db_path: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await?;

    init_schema(&pool).await?;

    Ok(pool)
}

async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS post (
            user_id      INTEGER PRIMARY KEY,
            post_title   TEXT,
            post_content TEXT
        );
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// In-memory database for tests.
#[cfg(test)]
pub async fn init_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new().in_memory(true);

    // A pool of one: every in-memory connection is its own database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    init_schema(&pool).await?;

    Ok(pool)
}
