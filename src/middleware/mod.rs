//! HTTP middleware for request observability.
//!
//! Provides the request logger and the response status capture it relies on.

pub mod request_log;
pub mod response_capture;

pub use response_capture::ResponseCapture;
