//! Typed endpoint surface for the Course2CEO backend
//!
//! One module per resource area, each adding methods to
//! [`crate::ApiClient`].

pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod models;
pub mod notifications;
pub mod stream;
pub mod student;

pub use dashboard::{AdminDashboardStats, StudentDashboardStats};
