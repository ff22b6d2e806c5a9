//! HTTP interface to the hull and circle operations

pub mod handlers;
pub mod models;
pub mod routes;

pub use routes::create_router;
