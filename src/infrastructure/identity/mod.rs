//! Identity collaborator implementations

pub mod local;

pub use local::{LocalIdentityProvider, LocalIdentitySettings};
