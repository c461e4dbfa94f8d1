//! Helper functions shared by the middleware.
//!
//! - [`duration`] - Human-readable elapsed time strings

pub mod duration;
