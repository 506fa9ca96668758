// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{posts::PostCommandService, users::UserCommandService},
        queries::{posts::PostQueryService, users::UserQueryService},
    },
    domain::{
        post::{
            PostReadRepository, PostWriteRepository,
            services::{SlugGenerator, SlugPolicy},
        },
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub post_commands: Arc<PostCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub post_queries: Arc<PostQueryService>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_policy = Arc::new(SlugPolicy::new(slugger));

        let user_commands = Arc::new(UserCommandService::new(Arc::clone(&user_repo)));
        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_write_repo),
            Arc::clone(&post_read_repo),
            slug_policy,
        ));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));
        let post_queries = Arc::new(PostQueryService::new(Arc::clone(&post_read_repo)));

        Self {
            user_commands,
            post_commands,
            user_queries,
            post_queries,
        }
    }
}
