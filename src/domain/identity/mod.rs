//! Identity (auth) collaborator port
//!
//! The service never stores raw passwords itself; it only talks to an
//! [`IdentityProvider`].

pub mod model;
pub mod provider;

pub use model::{AuthSession, AuthUser};
pub use provider::IdentityProvider;
