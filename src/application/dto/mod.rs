pub mod posts;
pub mod users;

pub use posts::PostDto;
pub use users::UserDto;
