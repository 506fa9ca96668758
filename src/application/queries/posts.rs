// src/application/queries/posts.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{PostId, PostReadRepository, PostSlug},
    domain::user::UserId,
};

pub struct PostQueryService {
    read_repo: Arc<dyn PostReadRepository>,
}

impl PostQueryService {
    pub fn new(read_repo: Arc<dyn PostReadRepository>) -> Self {
        Self { read_repo }
    }

    pub async fn get_post(&self, id: i64) -> ApplicationResult<PostDto> {
        let id = PostId::new(id)?;
        let post = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        Ok(post.into())
    }

    pub async fn get_post_by_slug(&self, slug: &str) -> ApplicationResult<PostDto> {
        let slug = PostSlug::new(slug)?;
        let post = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        Ok(post.into())
    }

    /// The author's posts, newest published first.
    pub async fn list_posts_by_author(&self, author_id: i64) -> ApplicationResult<Vec<PostDto>> {
        let author_id = UserId::new(author_id)?;
        let posts = self.read_repo.list_by_author(author_id).await?;
        Ok(posts.into_iter().map(PostDto::from).collect())
    }
}
