// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for layer processing

use arc3d_model::{Crs, FeatureError, FeatureId};
use thiserror::Error;

/// Pipeline result type
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Layer processing errors
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Source, sink or reprojection failure
    #[error(transparent)]
    Feature(#[from] FeatureError),

    /// Arc construction failed for one feature
    #[error("Arc construction failed for feature {feature}: {source}")]
    Geometry {
        feature: FeatureId,
        #[source]
        source: arc3d_geometry::Error,
    },

    /// Source coordinates are not in the working system and cannot be mapped
    #[error("Source layer is in {source_crs} but arcs are built in {working}; no reprojector maps between them")]
    CrsMismatch { source_crs: Crs, working: Crs },

    /// Sink stores geometries in another system than the arcs are built in
    #[error("Sink layer is in {sink_crs} but arcs are built in {working}")]
    SinkCrsMismatch { sink_crs: Crs, working: Crs },

    /// Invalid pipeline configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl PipelineError {
    /// Create a geometry error for a feature
    pub fn geometry(feature: FeatureId, source: arc3d_geometry::Error) -> Self {
        PipelineError::Geometry { feature, source }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        PipelineError::Config(msg.into())
    }
}
