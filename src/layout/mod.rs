//! Layout-engine bridge: translated records to taffy styles.

pub mod resolve;

pub use resolve::to_taffy_style;
