//! # dotviz-error
//!
//! Unified error handling for dotviz.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what error occurred (e.g., AttributeNotFound, RenderFailed)
//! - **Error Context**: Assist in locating the cause with rich context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use dotviz_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::InvalidGraphType, "unknown graph type")
//!         .with_operation("graph::set_type")
//!         .with_context("type", "fakegraph"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All functions return `Result<T, dotviz_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context
//! - Nothing is retried; every failure reaches the immediate caller once

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using dotviz Error
pub type Result<T> = std::result::Result<T, Error>;
