//! Data models for the Be The Hero client.
//!
//! These mirror the JSON bodies the REST backend produces and consumes.

mod auth;
mod incident;
mod profile;
mod registration;

pub use auth::*;
pub use incident::*;
pub use profile::*;
pub use registration::*;
