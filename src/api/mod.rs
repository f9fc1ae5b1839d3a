//! HTTP API service: `GET /api/counters` and `POST /api/counters/{id}/inc`.

mod connection;
pub mod error;
pub mod handlers;
pub mod router;
mod server;
pub mod shutdown;

pub use router::build_router;
pub use server::{ApiServer, ServerError, ServerHandle};
