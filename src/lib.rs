//! Course2CEO - Command-line client for the Course2CEO video access platform
//!
//! This is the library interface for the client, allowing programmatic
//! access to the REST API, session handling, and navigation rules.

pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod router;
pub mod session;
pub mod toast;

pub use client::ApiClient;
pub use config::Config;
pub use error::Error;
pub use session::SessionStore;
