// tests/support/builders.rs
use std::sync::Arc;

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use quill_core::application::commands::posts::CreatePostCommand;
use quill_core::application::commands::users::CreateUserCommand;
use quill_core::application::services::ApplicationServices;
use quill_core::domain::post::{PostReadRepository, PostWriteRepository};
use quill_core::domain::post::services::SlugGenerator;
use quill_core::domain::user::UserRepository;
use quill_core::infrastructure::util::DefaultSlugGenerator;

use super::mocks::{InMemoryPostRepo, InMemoryUserRepo};

pub static SAMPLE_DATE: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());

/// Services wired to in-memory repositories, ready for unit-level tests.
pub fn in_memory_services() -> ApplicationServices {
    let user_repo = Arc::new(InMemoryUserRepo::new());
    let post_repo = Arc::new(InMemoryPostRepo::new());
    let write_repo: Arc<dyn PostWriteRepository> = post_repo.clone();
    let read_repo: Arc<dyn PostReadRepository> = post_repo;
    let user_repo: Arc<dyn UserRepository> = user_repo;
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    ApplicationServices::new(user_repo, write_repo, read_repo, slugger)
}

pub fn create_user_command(email: &str) -> CreateUserCommand {
    CreateUserCommand {
        firstname: "Jane".into(),
        lastname: "Doe".into(),
        email: email.into(),
        password_hash: "$argon2id$v=19$not-a-real-hash".into(),
        roles: vec!["author".into()],
        is_active: true,
    }
}

pub fn create_post_command(title: &str, author_id: i64) -> CreatePostCommand {
    CreatePostCommand::builder()
        .title(title)
        .description("a short teaser")
        .content("some body text")
        .author_id(author_id)
        .published_at(*SAMPLE_DATE)
        .build()
        .unwrap()
}
