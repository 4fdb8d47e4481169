#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # nearby-entities
//!
//! Reusable, agnostic domain entities for the nearby place listing.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod geo;
pub mod id;
pub mod place;
pub mod url {
    pub use url::{ParseError, Url};
}

#[cfg(any(test, feature = "builders"))]
pub mod builders;
