//! REST endpoints

pub mod handlers;
pub mod router;
pub mod state;
pub mod upload;
