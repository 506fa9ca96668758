// src/application/commands/posts/update.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{
        PostContent, PostDescription, PostId, PostSlug, PostTitle, PostUpdate,
    },
};
use chrono::NaiveDate;

pub struct UpdatePostCommand {
    pub id: i64,
    pub title: Option<String>,
    /// Manual slug edit. Honoured only while the title stays unchanged; a
    /// title change regenerates the slug and wins over this value.
    pub slug: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub published_at: Option<NaiveDate>,
}

impl PostCommandService {
    pub async fn update_post(&self, command: UpdatePostCommand) -> ApplicationResult<PostDto> {
        let id = PostId::new(command.id)?;
        let mut post = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        // Title as last persisted, against which the slug policy diffs.
        let persisted_title = post.title.clone();

        let UpdatePostCommand {
            id: _,
            title,
            slug,
            description,
            content,
            published_at,
        } = command;

        let mut update = PostUpdate::new(id);

        if let Some(title) = title {
            let title = PostTitle::new(title)?;
            post.title = title.clone();
            update = update.with_title(title);
        }
        if let Some(slug) = slug {
            let slug = PostSlug::new(slug)?;
            post.slug = slug.clone();
            update = update.with_slug(slug);
        }
        if let Some(description) = description {
            let description = PostDescription::new(description)?;
            post.description = description.clone();
            update = update.with_description(description);
        }
        if let Some(content) = content {
            let content = PostContent::new(content)?;
            post.content = content.clone();
            update = update.with_content(content);
        }
        if let Some(published_at) = published_at {
            post.published_at = published_at;
            update = update.with_published_at(published_at);
        }

        if self.slug_policy.before_update(&persisted_title, &mut post)? {
            update = update.with_slug(post.slug.clone());
            tracing::debug!(
                post_id = i64::from(id),
                slug = %post.slug,
                "slug regenerated after title change"
            );
        }

        if update.is_empty() {
            return Ok(post.into());
        }

        let updated = self.write_repo.update(update).await?;
        tracing::info!(post_id = i64::from(updated.id), "post updated");
        Ok(updated.into())
    }
}
