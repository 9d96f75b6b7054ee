// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for feature sources, sinks and reprojection

use crate::FeatureId;
use thiserror::Error;

/// Result type alias for collaborator operations
pub type Result<T> = std::result::Result<T, FeatureError>;

/// Errors raised by the collaborators around the arc core
#[derive(Error, Debug)]
pub enum FeatureError {
    /// Feature source failed to yield a feature
    #[error("Feature source error: {0}")]
    Source(String),

    /// Feature could not be read into start/end/attributes
    #[error("Invalid feature {id}: {message}")]
    InvalidFeature { id: FeatureId, message: String },

    /// Feature sink failed to persist a feature
    #[error("Feature sink error: {0}")]
    Sink(String),

    /// Schema problem (unknown field, incompatible layer)
    #[error("Schema error: {0}")]
    Schema(String),

    /// Coordinate reprojection failed
    #[error("Reprojection error: {0}")]
    Reprojection(String),
}

impl FeatureError {
    /// Create a source error
    pub fn source(msg: impl Into<String>) -> Self {
        FeatureError::Source(msg.into())
    }

    /// Create an invalid feature error
    pub fn invalid_feature(id: FeatureId, msg: impl Into<String>) -> Self {
        FeatureError::InvalidFeature {
            id,
            message: msg.into(),
        }
    }

    /// Create a sink error
    pub fn sink(msg: impl Into<String>) -> Self {
        FeatureError::Sink(msg.into())
    }

    /// Create a schema error
    pub fn schema(msg: impl Into<String>) -> Self {
        FeatureError::Schema(msg.into())
    }

    /// Create a reprojection error
    pub fn reprojection(msg: impl Into<String>) -> Self {
        FeatureError::Reprojection(msg.into())
    }
}
