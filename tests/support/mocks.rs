// tests/support/mocks.rs
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use quill_core::domain::errors::{DomainError, DomainResult};
use quill_core::domain::post::{
    NewPost, Post, PostId, PostReadRepository, PostSlug, PostUpdate, PostWriteRepository,
};
use quill_core::domain::user::{
    EmailAddress, NewUser, User, UserId, UserRepository, UserUpdate,
};

/// In-memory stand-in for the SQLite post store. Mirrors the storage-layer
/// contract the services rely on: slug uniqueness and ordered author views.
pub struct InMemoryPostRepo {
    inner: Mutex<PostStore>,
}

struct PostStore {
    next_id: i64,
    posts: HashMap<i64, Post>,
}

impl Default for InMemoryPostRepo {
    fn default() -> Self {
        Self {
            inner: Mutex::new(PostStore {
                next_id: 1,
                posts: HashMap::new(),
            }),
        }
    }
}

impl InMemoryPostRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryPostRepo {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut store = self.inner.lock().unwrap();
        if store.posts.values().any(|p| p.slug == post.slug) {
            return Err(DomainError::Conflict(format!(
                "slug '{}' already exists",
                post.slug
            )));
        }
        let id = store.next_id;
        store.next_id += 1;
        let post = Post {
            id: PostId::new(id)?,
            title: post.title,
            slug: post.slug,
            description: post.description,
            content: post.content,
            author_id: post.author_id,
            published_at: post.published_at,
        };
        store.posts.insert(id, post.clone());
        Ok(post)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut store = self.inner.lock().unwrap();
        let id = i64::from(update.id);
        if let Some(slug) = &update.slug {
            if store
                .posts
                .values()
                .any(|p| p.slug == *slug && i64::from(p.id) != id)
            {
                return Err(DomainError::Conflict(format!("slug '{slug}' already exists")));
            }
        }
        let post = store
            .posts
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        if let Some(title) = update.title {
            post.title = title;
        }
        if let Some(slug) = update.slug {
            post.slug = slug;
        }
        if let Some(description) = update.description {
            post.description = description;
        }
        if let Some(content) = update.content {
            post.content = content;
        }
        if let Some(published_at) = update.published_at {
            post.published_at = published_at;
        }

        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut store = self.inner.lock().unwrap();
        store
            .posts
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("post not found".into()))
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPostRepo {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let store = self.inner.lock().unwrap();
        Ok(store.posts.get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        let store = self.inner.lock().unwrap();
        Ok(store.posts.values().find(|p| p.slug == *slug).cloned())
    }

    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Post>> {
        let store = self.inner.lock().unwrap();
        let mut posts: Vec<Post> = store
            .posts
            .values()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect();
        posts.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        Ok(posts)
    }
}

pub struct InMemoryUserRepo {
    inner: Mutex<UserStore>,
}

struct UserStore {
    next_id: i64,
    users: HashMap<i64, User>,
}

impl Default for InMemoryUserRepo {
    fn default() -> Self {
        Self {
            inner: Mutex::new(UserStore {
                next_id: 1,
                users: HashMap::new(),
            }),
        }
    }
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut store = self.inner.lock().unwrap();
        if store.users.values().any(|u| u.email == new_user.email) {
            return Err(DomainError::Conflict(format!(
                "email '{}' already exists",
                new_user.email
            )));
        }
        let id = store.next_id;
        store.next_id += 1;
        let user = User::new(
            UserId::new(id)?,
            new_user.firstname,
            new_user.lastname,
            new_user.email,
            new_user.password_hash,
            new_user.roles,
            new_user.is_active,
        );
        store.users.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut store = self.inner.lock().unwrap();
        let id = i64::from(update.id);
        let user = store
            .users
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        if let Some(firstname) = update.firstname {
            user.firstname = firstname;
        }
        if let Some(lastname) = update.lastname {
            user.lastname = lastname;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(password_hash) = update.password_hash {
            user.password_hash = password_hash;
        }
        if let Some(roles) = update.roles {
            user.set_roles(roles);
        }
        if let Some(is_active) = update.is_active {
            user.is_active = is_active;
        }

        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let mut store = self.inner.lock().unwrap();
        store
            .users
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("user not found".into()))
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let store = self.inner.lock().unwrap();
        Ok(store.users.get(&i64::from(id)).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>> {
        let store = self.inner.lock().unwrap();
        Ok(store.users.values().find(|u| u.email == *email).cloned())
    }
}
