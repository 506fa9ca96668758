mod error;
mod sqlite_post;
mod sqlite_user;

pub(crate) use error::map_error;
pub use sqlite_post::{SqlitePostReadRepository, SqlitePostWriteRepository};
pub use sqlite_user::SqliteUserRepository;
