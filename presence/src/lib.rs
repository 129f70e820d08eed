#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

// Core container implementation
mod optional;
pub use crate::optional::Optional;

// Error kinds and boundary helpers
pub mod error;
pub mod ext;
