//! Clipshelf HTTP API: handlers, routing, and server bootstrap.

pub mod api_doc;
pub mod error;
pub mod handlers;
pub mod range;
pub mod setup;
pub mod state;
pub mod telemetry;
