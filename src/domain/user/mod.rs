//! User aggregate
//!
//! Contains the User profile, its role, DTOs, and repository interface.

pub mod model;
pub mod repository;

mod dto_create;

pub use dto_create::CreateUserDto;
pub use model::{Creator, User, UserRole};
pub use repository::UserRepositoryInterface;
