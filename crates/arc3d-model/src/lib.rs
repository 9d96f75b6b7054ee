// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arc3D Model - Shared types and collaborator traits
//!
//! This crate provides the value types exchanged between the arc geometry
//! core and the code that feeds it. It defines traits for the collaborators
//! that sit around the core (where line features come from, where the
//! resulting 3D arcs go, and how coordinates reach the working planar system),
//! so that any storage backend can be plugged in.
//!
//! # Architecture
//!
//! - [`FeatureSource`] - Lazily yields line features (start, end, attributes)
//! - [`FeatureSink`] - Persists 3D arcs together with their attributes
//! - [`Reprojector`] - Normalizes coordinates into the working planar system
//!
//! # Example
//!
//! ```ignore
//! use arc3d_model::{FeatureSource, FeatureSink};
//!
//! for feature in source.features() {
//!     let feature = feature?;
//!     let arc = build(feature.start, feature.end)?;
//!     sink.write(arc, feature.attributes)?;
//! }
//! sink.commit()?;
//! ```

pub mod attributes;
pub mod error;
pub mod schema;
pub mod traits;
pub mod types;

// Re-export all public types
pub use attributes::*;
pub use error::*;
pub use schema::*;
pub use traits::*;
pub use types::*;
