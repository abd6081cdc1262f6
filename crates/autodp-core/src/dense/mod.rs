//! Dense array implementation and operations
//!
//! The `DenseND<T>` type is defined in [`types`]; operations are organized into
//! functional sub-modules.

// Core type definition
pub mod types;

// Operation modules (organized by functionality)
mod broadcast;
mod combining;
mod comparison;
mod creation;
mod elementwise;

// Supporting modules
pub mod densend_traits;

// Re-export the main type
pub use types::DenseND;

// Re-export broadcasting helpers
pub use broadcast::{broadcast_shape, shapes_broadcastable};
