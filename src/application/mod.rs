//! Application layer: use-cases orchestrating the identity collaborator and
//! the repositories.

pub mod identity;
pub mod users;

pub use identity::{AuthService, LoginOutcome, RegistrationError, RegistrationOutcome};
pub use users::UserService;
