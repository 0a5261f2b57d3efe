//! # sustrack-core - Core Domain Types
//!
//! Foundation crate for Sustainability Tracker. Provides domain types, error
//! handling, logging setup, the topic registry and image asset probing.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, image).
//!
//! ## Public API
//!
//! ### Topics (`topic`)
//! - [`Topic`] - A sustainability topic with images, description and accent color
//! - [`TopicRegistry`] - Ordered, read-only topic lookup
//! - [`AccentColor`] - Terminal-independent RGB color
//!
//! ### Assets (`assets`)
//! - [`AssetStatus`] - Whether an image path resolved (with its dimensions)
//! - [`AssetCatalog`] - Probed status for every topic image
//!
//! ### Activities and Emissions
//! - [`ActivityInput`], [`ActivityField`] - The six daily activity quantities
//! - [`EmissionsResult`] - Decoded calculation output
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use sustrack_core::prelude::*;
//! ```

pub mod activity;
pub mod assets;
pub mod emissions;
pub mod error;
pub mod logging;
pub mod topic;

/// Prelude for common imports used throughout all Sustainability Tracker crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use activity::{ActivityField, ActivityInput};
pub use assets::{AssetCatalog, AssetStatus};
pub use emissions::{format_amount, CategoryEmission, CategoryRecommendation, EmissionsResult};
pub use error::{Error, Result, ResultExt};
pub use topic::{AccentColor, Topic, TopicRegistry};
