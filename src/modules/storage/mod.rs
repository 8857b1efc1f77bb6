//! Storage module for generated documents
//!
//! Letters are plain files on the local filesystem.

mod letter_store;

pub use letter_store::LetterStore;
