pub mod posts;
pub mod users;

pub use posts::PostQueryService;
pub use users::UserQueryService;
