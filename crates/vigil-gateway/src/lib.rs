//! Vigil gateway library
//!
//! This crate provides the HTTP side of Vigil:
//! - REST handlers for emotion, phishing and security classification
//! - Configuration loading
//! - Server lifecycle management

#![deny(unsafe_code)]

pub mod api;
pub mod config;
pub mod error;
pub mod server;

pub use api::create_router;
pub use api::rest::state::AppState;
pub use config::GatewayConfig;
pub use error::{ApiError, Failure, GatewayError, GatewayResult};
pub use server::{build_model, Server};
