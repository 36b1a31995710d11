//! CSS value parsing: tokenizer, value kinds, shorthands, keywords, grid, dispatch.

pub mod grid;
pub mod keywords;
pub mod properties;
pub mod property;
pub mod scalar;
pub mod shorthand;
pub mod tokenizer;
pub mod value;
