use crate::errors::BlogError;
use crate::utils::serializer::timestamp_serializer;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{SqliteConnection, SqlitePool};

const SELECT_COLUMNS: &str = "id, title, content, created_at";

/// A single blog entry.
///
/// `id` is assigned by the store and `created_at` by the server on insert;
/// both stay fixed for the lifetime of the row.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(serialize_with = "timestamp_serializer::serialize")]
    pub created_at: NaiveDateTime,
}

/// Fields submitted by the new and edit forms.
#[derive(Debug, Clone, Deserialize)]
pub struct PostForm {
    pub title: String,
    #[serde(alias = "newpost")]
    pub content: String,
}

impl Post {
    /// Query creating the `posts` table. Safe to run more than once.
    pub fn migration_query() -> &'static str {
        "CREATE TABLE IF NOT EXISTS posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
);"
    }

    pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
        use sqlx::Executor as _;

        pool.execute(Self::migration_query()).await?;
        Ok(())
    }

    /// All posts, newest `id` first.
    pub async fn find_all(conn: &mut SqliteConnection) -> Result<Vec<Post>, BlogError> {
        let posts = sqlx::query_as::<_, Post>(&format!("SELECT {SELECT_COLUMNS} FROM posts ORDER BY id DESC"))
            .fetch_all(conn)
            .await?;

        Ok(posts)
    }

    pub async fn maybe_find_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Option<Post>, BlogError> {
        let post = sqlx::query_as::<_, Post>(&format!("SELECT {SELECT_COLUMNS} FROM posts WHERE id = ?"))
            .bind(id)
            .fetch_optional(conn)
            .await?;

        Ok(post)
    }

    pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Post, BlogError> {
        Self::maybe_find_by_id(conn, id).await?.ok_or_else(|| not_found(id))
    }

    pub async fn create(conn: &mut SqliteConnection, form: &PostForm) -> Result<Post, BlogError> {
        let post = sqlx::query_as::<_, Post>(&format!(
            "INSERT INTO posts (title, content, created_at) VALUES (?, ?, ?) RETURNING {SELECT_COLUMNS}"
        ))
        .bind(&form.title)
        .bind(&form.content)
        .bind(Utc::now().naive_utc())
        .fetch_one(conn)
        .await?;

        Ok(post)
    }

    /// Overwrites title and content. Last writer wins.
    pub async fn update(conn: &mut SqliteConnection, id: i64, form: &PostForm) -> Result<Post, BlogError> {
        let post = sqlx::query_as::<_, Post>(&format!(
            "UPDATE posts SET title = ?, content = ? WHERE id = ? RETURNING {SELECT_COLUMNS}"
        ))
        .bind(&form.title)
        .bind(&form.content)
        .bind(id)
        .fetch_optional(conn)
        .await?;

        post.ok_or_else(|| not_found(id))
    }

    pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<(), BlogError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        Ok(())
    }
}

fn not_found(id: i64) -> BlogError {
    BlogError::NotFound(format!("Post {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::memory_pool;

    fn form(title: &str, content: &str) -> PostForm {
        PostForm {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn migration_is_idempotent() {
        let pool = memory_pool().await;

        Post::migrate(&pool).await.unwrap();
        Post::migrate(&pool).await.unwrap();

        let mut conn = pool.acquire().await.unwrap();
        assert!(Post::find_all(&mut conn).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_all_lists_newest_first() {
        let pool = memory_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let first = Post::create(&mut conn, &form("first", "a")).await.unwrap();
        let second = Post::create(&mut conn, &form("second", "b")).await.unwrap();

        let posts = Post::find_all(&mut conn).await.unwrap();
        let ids: Vec<i64> = posts.iter().map(|p| p.id).collect();

        assert!(second.id > first.id);
        assert_eq!(ids, vec![second.id, first.id]);
        assert!(posts[0].created_at >= posts[1].created_at);
    }

    #[tokio::test]
    async fn empty_strings_are_stored() {
        let pool = memory_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let post = Post::create(&mut conn, &form("", "")).await.unwrap();
        let found = Post::find_by_id(&mut conn, post.id).await.unwrap();

        assert_eq!(found.title, "");
        assert_eq!(found.content, "");
    }

    #[tokio::test]
    async fn update_keeps_id_and_created_at() {
        let pool = memory_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let created = Post::create(&mut conn, &form("draft", "old")).await.unwrap();
        let updated = Post::update(&mut conn, created.id, &form("final", "new")).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.title, "final");
        assert_eq!(updated.content, "new");
    }

    #[tokio::test]
    async fn update_missing_post_is_not_found() {
        let pool = memory_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let result = Post::update(&mut conn, 42, &form("t", "c")).await;

        assert!(matches!(result, Err(BlogError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_removes_row_and_rejects_second_delete() {
        let pool = memory_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let post = Post::create(&mut conn, &form("gone", "soon")).await.unwrap();

        Post::delete(&mut conn, post.id).await.unwrap();

        assert!(Post::maybe_find_by_id(&mut conn, post.id).await.unwrap().is_none());
        assert!(matches!(
            Post::delete(&mut conn, post.id).await,
            Err(BlogError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let pool = memory_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let post = Post::create(&mut conn, &form("one", "1")).await.unwrap();
        Post::delete(&mut conn, post.id).await.unwrap();
        let next = Post::create(&mut conn, &form("two", "2")).await.unwrap();

        assert!(next.id > post.id);
    }
}
