//! wp-core: shared foundation for the Welsh–Powell coloring workspace.
//!
//! Contains:
//! - color (the `Color` index type and the `VertexKey` bound)
//! - error (shared error types)

pub mod color;
pub mod error;

// Re-exports: nice ergonomics for downstream crates
pub use color::{Color, VertexKey};
pub use error::{WpError, WpResult};
