//! Web API surface for sevapass.
//!
//! Thin glue over the credential flows: routing, DTOs, error mapping, and
//! the bearer-token extractor.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use server::WebServer;
