// src/application/commands/posts/create.rs
use super::PostCommandService;
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::post::{NewPost, PostContent, PostDescription, PostSlug, PostTitle},
    domain::user::UserId,
};
use chrono::NaiveDate;

pub struct CreatePostCommand {
    pub title: String,
    /// Pre-set slug; when absent or blank, one is derived from the title.
    pub slug: Option<String>,
    pub description: String,
    pub content: String,
    pub author_id: i64,
    pub published_at: NaiveDate,
}

impl CreatePostCommand {
    pub fn builder() -> CreatePostCommandBuilder {
        CreatePostCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreatePostCommandBuilder {
    title: Option<String>,
    slug: Option<String>,
    description: Option<String>,
    content: Option<String>,
    author_id: Option<i64>,
    published_at: Option<NaiveDate>,
}

impl CreatePostCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn author_id(mut self, author_id: i64) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn published_at(mut self, published_at: NaiveDate) -> Self {
        self.published_at = Some(published_at);
        self
    }

    pub fn build(self) -> Result<CreatePostCommand, &'static str> {
        Ok(CreatePostCommand {
            title: self.title.ok_or("title is required")?,
            slug: self.slug,
            description: self.description.unwrap_or_default(),
            content: self.content.ok_or("content is required")?,
            author_id: self.author_id.ok_or("author_id is required")?,
            published_at: self.published_at.ok_or("published_at is required")?,
        })
    }
}

impl PostCommandService {
    pub async fn create_post(&self, command: CreatePostCommand) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let description = PostDescription::new(command.description)?;
        let content = PostContent::new(command.content)?;
        let author_id = UserId::new(command.author_id)?;

        let supplied = command
            .slug
            .filter(|s| !s.trim().is_empty())
            .map(PostSlug::new)
            .transpose()?;
        let slug = self.slug_policy.before_insert(&title, supplied)?;

        let new_post = NewPost {
            title,
            slug,
            description,
            content,
            author_id,
            published_at: command.published_at,
        };

        let created = self.write_repo.insert(new_post).await?;
        tracing::info!(post_id = i64::from(created.id), slug = %created.slug, "post created");
        Ok(created.into())
    }
}
