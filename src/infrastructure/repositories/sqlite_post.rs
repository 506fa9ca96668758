use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostContent, PostDescription, PostId, PostReadRepository, PostSlug,
    PostTitle, PostUpdate, PostWriteRepository,
};
use crate::domain::user::UserId;
use crate::infrastructure::repositories::map_error;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqlitePostWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePostWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqlitePostReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePostReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    description: String,
    content: String,
    author_id: i64,
    published_at: NaiveDate,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::new(row.id)?,
            title: PostTitle::new(row.title)?,
            slug: PostSlug::new(row.slug)?,
            description: PostDescription::new(row.description)?,
            content: PostContent::new(row.content)?,
            author_id: UserId::new(row.author_id)?,
            published_at: row.published_at,
        })
    }
}

const POST_COLUMNS: &str = "id, title, slug, description, content, author_id, published_at";

#[async_trait]
impl PostWriteRepository for SqlitePostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            slug,
            description,
            content,
            author_id,
            published_at,
        } = post;

        let row = sqlx::query_as::<_, PostRow>(
            "INSERT INTO posts (title, slug, description, content, author_id, published_at) \
             VALUES (?, ?, ?, ?, ?, ?) \
             RETURNING id, title, slug, description, content, author_id, published_at",
        )
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(description.as_str())
        .bind(content.as_str())
        .bind(i64::from(author_id))
        .bind(published_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_error)?;

        Post::try_from(row)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            slug,
            description,
            content,
            published_at,
        } = update;

        let row = sqlx::query_as::<_, PostRow>(
            "UPDATE posts SET \
             title = COALESCE(?, title), \
             slug = COALESCE(?, slug), \
             description = COALESCE(?, description), \
             content = COALESCE(?, content), \
             published_at = COALESCE(?, published_at) \
             WHERE id = ? \
             RETURNING id, title, slug, description, content, author_id, published_at",
        )
        .bind(title.as_ref().map(|v| v.as_str()))
        .bind(slug.as_ref().map(|v| v.as_str()))
        .bind(description.as_ref().map(|v| v.as_str()))
        .bind(content.as_ref().map(|v| v.as_str()))
        .bind(published_at)
        .bind(i64::from(id))
        .fetch_one(&*self.pool)
        .await
        .map_err(map_error)?;

        Post::try_from(row)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostReadRepository for SqlitePostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?;

        row.map(Post::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE slug = ?"
        ))
        .bind(slug.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?;

        row.map(Post::try_from).transpose()
    }

    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE author_id = ? ORDER BY published_at DESC, id DESC"
        ))
        .bind(i64::from(author_id))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_error)?;

        rows.into_iter().map(Post::try_from).collect()
    }
}
