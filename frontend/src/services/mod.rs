//! Backend communication.
//!
//! # Services
//!
//! - [`submit`] - the [`Backend`] seam and the sequential submit pipeline
//! - [`api`] - HTTP implementation of [`Backend`] over `gloo-net`

pub mod api;
pub mod submit;

pub use api::*;
pub use submit::*;
