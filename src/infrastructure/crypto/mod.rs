//! Token signing and password hashing used by the local identity provider

pub mod jwt;
pub mod password;
