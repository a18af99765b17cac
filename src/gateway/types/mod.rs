//! Gateway types module.
//!
//! - [`order`]: untyped-payload validation producing a canonical order
//! - [`response`]: response envelopes and the API error type

pub mod order;
pub mod response;

pub use order::validate_order;
pub use response::{ApiError, ApiResult, ErrorResponse};
