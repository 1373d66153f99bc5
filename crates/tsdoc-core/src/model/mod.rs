//! Documentation model produced by the extractor.
//!
//! Everything here is plain owned data. Named collections are `IndexMap`s so
//! output order follows declaration order; the serializer turns them into
//! arrays.

pub mod declarations;
pub mod module;
pub mod types;

pub use declarations::*;
pub use module::{Module, ModuleId};
pub use types::*;
