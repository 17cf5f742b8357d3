//! Core logic of the article generator: the generated item list and its
//! storage, response normalization, the generation client and the two
//! view-models driving the front end.

#![deny(missing_docs)]
#![deny(clippy::missing_safety_doc)]

#[macro_use]
extern crate tracing;

mod confirm;
mod error;
mod generation_client;
mod item;
mod item_list;
pub mod normalize;
mod session;
pub mod store;

pub use confirm::Confirm;
pub use error::GenerationError;
pub use generation_client::{Article, GenerationClient};
pub use item::GeneratedItem;
pub use item_list::{ItemList, PREVIEW_LIMIT};
pub use session::{
    ERROR_TITLE, GenerationSession, GenerationSessionBuilder, Stage,
};
pub use store::{ItemStore, StoreError};

/// Re-exports of [`quill_model`] crate.
pub mod model {
    pub use quill_model::*;
}
