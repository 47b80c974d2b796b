//! Module for the single query/mutation endpoint.
//!
//! Every operation the service offers, read or write, is a POST to
//! `/api/query` naming the operation and its arguments.

pub mod handlers;
pub mod models;
pub mod routes;
