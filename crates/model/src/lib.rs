//! The contract between the article generator and whatever produces the
//! text.
//!
//! A provider receives a topic and answers with a loosely-shaped response
//! whose fields may or may not be present. This crate only describes that
//! exchange; normalizing the response into a displayable article is the
//! business of the callers.
//!
//! Types in this crate don't define any behavior, instead they are the
//! constraints that the implementors should adhere to.

#![deny(missing_docs)]

mod error;
mod provider;
mod request;
mod response;

pub use error::*;
pub use provider::*;
pub use request::*;
pub use response::*;
