//! Post queries and mutations exposed through the query endpoint.

pub mod handlers;
pub mod models;
