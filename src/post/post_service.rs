use crate::post::post_model::Post;
use crate::utils::error::CustomError;
use log::error;
use sqlx::SqlitePool;

pub struct PostService {
    pool: SqlitePool,
}

impl PostService {
    pub fn new(pool: SqlitePool) -> Self {
        PostService { pool }
    }

    /// Fetch the first row of the table, if any.
    pub async fn get_first_post(&self) -> Result<Option<Post>, CustomError> {
        sqlx::query_as::<_, Post>(
            "SELECT user_id, post_title, post_content FROM post LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Error fetching posts: {}", e);
            CustomError::InternalServerError("Error fetching posts.".into())
        })
    }

    pub async fn get_all_posts(&self) -> Result<Vec<Post>, CustomError> {
        sqlx::query_as::<_, Post>("SELECT user_id, post_title, post_content FROM post")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("Error fetching posts: {}", e);
                CustomError::InternalServerError("Error fetching posts.".into())
            })
    }

    /// The id is bound as-is; SQLite coerces it against the integer column,
    /// so a non-numeric id matches nothing.
    pub async fn get_post(&self, user_id: &str) -> Result<Option<Post>, CustomError> {
        sqlx::query_as::<_, Post>(
            "SELECT user_id, post_title, post_content FROM post WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Error fetching post: {}", e);
            CustomError::InternalServerError("Error retrieving post.".into())
        })
    }

    /// Insert a new post and return its id. `user_id` is assigned by the
    /// engine (`INTEGER PRIMARY KEY`): 1 on an empty table, previous max + 1
    /// otherwise.
    pub async fn create_post(
        &self,
        post_title: Option<&str>,
        post_content: Option<&str>,
    ) -> Result<i64, CustomError> {
        let result = sqlx::query("INSERT INTO post (post_title, post_content) VALUES (?, ?)")
            .bind(post_title)
            .bind(post_content)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Error adding post: {}", e);
                CustomError::InternalServerError("Error adding post.".into())
            })?;

        Ok(result.last_insert_rowid())
    }

    /// Returns the number of rows changed; zero means no such post.
    pub async fn update_post(
        &self,
        user_id: &str,
        post_title: Option<&str>,
        post_content: Option<&str>,
    ) -> Result<u64, CustomError> {
        let result =
            sqlx::query("UPDATE post SET post_title = ?, post_content = ? WHERE user_id = ?")
                .bind(post_title)
                .bind(post_content)
                .bind(user_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    error!("Error updating post: {}", e);
                    CustomError::InternalServerError("Error updating post.".into())
                })?;

        Ok(result.rows_affected())
    }

    /// Returns the number of rows deleted; zero means no such post.
    pub async fn delete_post(&self, user_id: &str) -> Result<u64, CustomError> {
        let result = sqlx::query("DELETE FROM post WHERE user_id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Error deleting post: {}", e);
                CustomError::InternalServerError("Error deleting post.".into())
            })?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::db::init_memory_pool;

    async fn service() -> PostService {
        let pool = init_memory_pool().await.unwrap();
        PostService::new(pool)
    }

    #[actix_web::test]
    async fn create_assigns_incrementing_ids_from_one() {
        let service = service().await;

        let first = service.create_post(Some("a"), Some("b")).await.unwrap();
        let second = service.create_post(Some("c"), Some("d")).await.unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[actix_web::test]
    async fn create_assigns_previous_max_plus_one_after_delete() {
        let service = service().await;

        service.create_post(Some("a"), None).await.unwrap();
        let second = service.create_post(Some("b"), None).await.unwrap();
        service.delete_post(&second.to_string()).await.unwrap();

        // Max in use is 1 again, so the next id is 2
        let third = service.create_post(Some("c"), None).await.unwrap();
        assert_eq!(third, 2);
    }

    #[actix_web::test]
    async fn created_post_round_trips_through_get() {
        let service = service().await;

        let id = service
            .create_post(Some("hello"), Some("world"))
            .await
            .unwrap();

        let post = service.get_post(&id.to_string()).await.unwrap().unwrap();
        assert_eq!(post.user_id, id);
        assert_eq!(post.post_title.as_deref(), Some("hello"));
        assert_eq!(post.post_content.as_deref(), Some("world"));
    }

    #[actix_web::test]
    async fn absent_fields_are_stored_as_null() {
        let service = service().await;

        let id = service.create_post(None, None).await.unwrap();

        let post = service.get_post(&id.to_string()).await.unwrap().unwrap();
        assert_eq!(post.post_title, None);
        assert_eq!(post.post_content, None);
    }

    #[actix_web::test]
    async fn get_post_with_unknown_or_non_numeric_id_returns_none() {
        let service = service().await;
        service.create_post(Some("a"), Some("b")).await.unwrap();

        assert!(service.get_post("99").await.unwrap().is_none());
        assert!(service.get_post("abc").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn first_post_is_none_on_empty_table() {
        let service = service().await;

        assert!(service.get_first_post().await.unwrap().is_none());

        service.create_post(Some("a"), Some("b")).await.unwrap();
        service.create_post(Some("c"), Some("d")).await.unwrap();

        let first = service.get_first_post().await.unwrap().unwrap();
        assert_eq!(first.user_id, 1);
    }

    #[actix_web::test]
    async fn all_posts_returns_every_row_in_order() {
        let service = service().await;

        assert!(service.get_all_posts().await.unwrap().is_empty());

        service.create_post(Some("a"), None).await.unwrap();
        service.create_post(Some("b"), None).await.unwrap();

        let posts = service.get_all_posts().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].user_id, 1);
        assert_eq!(posts[1].user_id, 2);
    }

    #[actix_web::test]
    async fn update_changes_fields_and_reports_rows() {
        let service = service().await;
        let id = service.create_post(Some("old"), Some("old")).await.unwrap();

        let changed = service
            .update_post(&id.to_string(), Some("new title"), Some("new content"))
            .await
            .unwrap();
        assert_eq!(changed, 1);

        let post = service.get_post(&id.to_string()).await.unwrap().unwrap();
        assert_eq!(post.post_title.as_deref(), Some("new title"));
        assert_eq!(post.post_content.as_deref(), Some("new content"));
    }

    #[actix_web::test]
    async fn update_on_missing_id_changes_nothing() {
        let service = service().await;
        service.create_post(Some("keep"), Some("keep")).await.unwrap();

        let changed = service.update_post("42", Some("x"), Some("y")).await.unwrap();
        assert_eq!(changed, 0);

        let posts = service.get_all_posts().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].post_title.as_deref(), Some("keep"));
    }

    #[actix_web::test]
    async fn delete_removes_the_row() {
        let service = service().await;
        let id = service.create_post(Some("a"), Some("b")).await.unwrap();

        let deleted = service.delete_post(&id.to_string()).await.unwrap();
        assert_eq!(deleted, 1);
        assert!(service.get_post(&id.to_string()).await.unwrap().is_none());

        let deleted_again = service.delete_post(&id.to_string()).await.unwrap();
        assert_eq!(deleted_again, 0);
    }

    #[actix_web::test]
    async fn values_with_quotes_are_bound_not_interpolated() {
        let service = service().await;

        let title = "Robert'); DROP TABLE post;--";
        let id = service.create_post(Some(title), Some("x")).await.unwrap();

        let post = service.get_post(&id.to_string()).await.unwrap().unwrap();
        assert_eq!(post.post_title.as_deref(), Some(title));

        // Table survived
        assert_eq!(service.get_all_posts().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn storage_failure_maps_to_internal_error() {
        let pool = init_memory_pool().await.unwrap();
        let service = PostService::new(pool.clone());
        pool.close().await;

        let err = service.get_all_posts().await.unwrap_err();
        assert_eq!(err.to_string(), "Error fetching posts.");
    }
}
