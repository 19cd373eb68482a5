//! Grepable error codes for service errors.
//!
//! Every service error enum implements [`ErrorCode`] so handlers can put
//! a stable machine-readable code next to the human-readable message in
//! error responses.

/// Stable, grepable code for a service error.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;
}
