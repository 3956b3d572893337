//! Request handlers

mod analyze;
mod phishing;
mod security;
mod system;

pub use analyze::*;
pub use phishing::*;
pub use security::*;
pub use system::*;
