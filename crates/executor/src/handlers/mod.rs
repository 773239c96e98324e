//! Command handlers, one module per facade.

pub mod dashboard;
pub mod search;
pub mod stars;
