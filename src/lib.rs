// Library exports for the binary and tests
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod thought_log;

pub use crate::config::*;
pub use crate::error::*;
pub use crate::models::*;
pub use crate::service::*;
pub use crate::thought_log::*;
