//! HTTP request handlers.

pub mod health;
pub mod info;
pub mod order;

pub use health::{health_check, healthz};
pub use info::{home, list_reports, list_users};
pub use order::{create_order, get_order};
