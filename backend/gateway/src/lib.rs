//! Textra Gateway HTTP Server
//!
//! Serves the upload form, the upload/status/result endpoints, and health.

pub mod error;
pub mod health;
pub mod pages;
pub mod result;
pub mod server;
pub mod status;
pub mod upload;

#[cfg(test)]
mod test_support;

pub use error::{ApiError, PageError};
pub use server::{GatewayState, build_router, start_server};
