//! HTTP REST API interfaces
//!
//! - `router`: route table, shared state and Swagger documentation
//! - `modules`: handlers and DTOs per resource
//! - `middleware`: bearer-session resolution
//! - `error`: mapping of failures to responses

pub mod common;
pub mod error;
pub mod middleware;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiDoc, AppState};
