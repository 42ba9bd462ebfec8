//! # Build Interface Tools
//!
//! Command-line tools for development:
//! - Scenario loading and validation
//! - Headless inspection of the build interface

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod report;
pub mod scenario;
pub mod validate;
