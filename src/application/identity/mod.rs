//! Identity use-cases: login, registration, session lookup

pub mod service;

pub use service::{AuthService, LoginOutcome, RegistrationError, RegistrationOutcome};
