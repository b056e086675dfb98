//! Profile listing and role management

pub mod service;

pub use service::UserService;
