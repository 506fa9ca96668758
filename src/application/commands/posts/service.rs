// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::domain::post::{
    PostReadRepository, PostWriteRepository, services::SlugPolicy,
};

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) slug_policy: Arc<SlugPolicy>,
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        slug_policy: Arc<SlugPolicy>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_policy,
        }
    }
}
