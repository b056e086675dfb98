//! Client-side helpers

pub mod tracker;

pub use tracker::{Fix, GpsReporter, LocationSource, PingSink, PingSubmission, RepositoryPingSink};
