// src/domain/post/entity.rs
use crate::domain::post::value_objects::{
    PostContent, PostDescription, PostId, PostSlug, PostTitle,
};
use crate::domain::user::UserId;
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: PostSlug,
    pub description: PostDescription,
    pub content: PostContent,
    pub author_id: UserId,
    pub published_at: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub slug: PostSlug,
    pub description: PostDescription,
    pub content: PostContent,
    pub author_id: UserId,
    pub published_at: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub slug: Option<PostSlug>,
    pub description: Option<PostDescription>,
    pub content: Option<PostContent>,
    pub published_at: Option<NaiveDate>,
}

impl PostUpdate {
    pub fn new(id: PostId) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            description: None,
            content: None,
            published_at: None,
        }
    }

    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: PostSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_description(mut self, description: PostDescription) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_content(mut self, content: PostContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_published_at(mut self, published_at: NaiveDate) -> Self {
        self.published_at = Some(published_at);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.slug.is_none()
            && self.description.is_none()
            && self.content.is_none()
            && self.published_at.is_none()
    }
}
