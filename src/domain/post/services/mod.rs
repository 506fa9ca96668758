// src/domain/post/services/mod.rs
use std::sync::Arc;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::entity::Post;
use crate::domain::post::value_objects::{PostSlug, PostTitle};

/// Turns human-readable text into a URL-safe token. Implementations must be
/// deterministic and total: any input, including the empty string, maps to a
/// (possibly empty) slug string.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

/// Pre-write hooks that keep a post's slug synchronized with its title.
///
/// Collisions are not resolved here: if two titles reduce to the same slug,
/// the second write fails against the storage layer's unique index and the
/// conflict is surfaced to the caller.
pub struct SlugPolicy {
    generator: Arc<dyn SlugGenerator>,
}

impl SlugPolicy {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    /// Derives the slug for a title. A non-blank title made entirely of
    /// characters the generator discards (for example punctuation) would
    /// reduce to an empty slug, which is rejected rather than stored.
    pub fn derive(&self, title: &PostTitle) -> DomainResult<PostSlug> {
        let raw = self.generator.slugify(title.as_str());
        if raw.is_empty() {
            return Err(DomainError::Validation(format!(
                "title '{title}' does not reduce to a slug"
            )));
        }
        PostSlug::new(raw)
    }

    /// Invoked before a post is first written. A slug supplied by the caller
    /// wins; otherwise one is derived from the title.
    pub fn before_insert(
        &self,
        title: &PostTitle,
        supplied: Option<PostSlug>,
    ) -> DomainResult<PostSlug> {
        match supplied {
            Some(slug) => Ok(slug),
            None => self.derive(title),
        }
    }

    /// Invoked before an already-stored post is rewritten. If the in-memory
    /// title differs from the last persisted one, the slug is recomputed from
    /// the current title, replacing any manually-set value. An unchanged
    /// title leaves the slug alone. Returns whether the slug was regenerated.
    pub fn before_update(
        &self,
        persisted_title: &PostTitle,
        post: &mut Post,
    ) -> DomainResult<bool> {
        if post.title == *persisted_title {
            return Ok(false);
        }
        post.slug = self.derive(&post.title)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post::value_objects::{PostContent, PostDescription, PostId};
    use crate::domain::user::UserId;
    use chrono::NaiveDate;

    struct HyphenSlugger;

    impl SlugGenerator for HyphenSlugger {
        fn slugify(&self, input: &str) -> String {
            slug::slugify(input)
        }
    }

    fn policy() -> SlugPolicy {
        SlugPolicy::new(Arc::new(HyphenSlugger))
    }

    fn stored_post(title: &str, slug: &str) -> Post {
        Post {
            id: PostId::new(1).unwrap(),
            title: PostTitle::new(title).unwrap(),
            slug: PostSlug::new(slug).unwrap(),
            description: PostDescription::default(),
            content: PostContent::new("body").unwrap(),
            author_id: UserId::new(1).unwrap(),
            published_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn insert_derives_slug_when_none_supplied() {
        let title = PostTitle::new("Hello World").unwrap();
        let slug = policy().before_insert(&title, None).unwrap();
        assert_eq!(slug.as_str(), "hello-world");
    }

    #[test]
    fn insert_keeps_caller_supplied_slug() {
        let title = PostTitle::new("Hello World").unwrap();
        let supplied = PostSlug::new("custom-slug").unwrap();
        let slug = policy().before_insert(&title, Some(supplied)).unwrap();
        assert_eq!(slug.as_str(), "custom-slug");
    }

    #[test]
    fn update_regenerates_when_title_changed() {
        let persisted_title = PostTitle::new("Hello World").unwrap();
        let mut post = stored_post("Goodbye World", "something-manual");
        let regenerated = policy().before_update(&persisted_title, &mut post).unwrap();
        assert!(regenerated);
        assert_eq!(post.slug.as_str(), "goodbye-world");
    }

    #[test]
    fn update_leaves_manual_slug_when_title_unchanged() {
        let persisted_title = PostTitle::new("Hello World").unwrap();
        let mut post = stored_post("Hello World", "my-custom-slug");
        let regenerated = policy().before_update(&persisted_title, &mut post).unwrap();
        assert!(!regenerated);
        assert_eq!(post.slug.as_str(), "my-custom-slug");
    }

    #[test]
    fn punctuation_only_title_is_rejected() {
        let title = PostTitle::new("!!!").unwrap();
        assert!(policy().derive(&title).is_err());
    }
}
