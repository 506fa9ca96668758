use crate::domain::post::Post;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub content: String,
    pub author_id: i64,
    pub published_at: NaiveDate,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.into(),
            slug: post.slug.into(),
            description: post.description.into(),
            content: post.content.into(),
            author_id: post.author_id.into(),
            published_at: post.published_at,
        }
    }
}
