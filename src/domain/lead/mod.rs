//! Sales lead aggregate

pub mod model;
pub mod repository;

pub use model::{CreateLeadDto, Lead};
pub use repository::LeadRepositoryInterface;
