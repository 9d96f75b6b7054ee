// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for arc construction
//!
//! Both variants are validation failures raised before any transform runs.

use arc3d_model::Point2D;
use thiserror::Error;

/// Arc construction result type
pub type Result<T> = std::result::Result<T, Error>;

/// Arc construction errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Start and end are too close to span a circle
    #[error("Degenerate input: segment {start} -> {end} has no usable radius")]
    DegenerateInput { start: Point2D, end: Point2D },

    /// A shape parameter or coordinate is out of range
    #[error("Invalid parameter `{parameter}`: {message}")]
    InvalidParameter {
        parameter: &'static str,
        message: String,
    },
}

impl Error {
    /// Create a degenerate input error
    pub fn degenerate(start: Point2D, end: Point2D) -> Self {
        Error::DegenerateInput { start, end }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: &'static str, msg: impl Into<String>) -> Self {
        Error::InvalidParameter {
            parameter,
            message: msg.into(),
        }
    }

    /// Check if this is a degenerate input error
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Error::DegenerateInput { .. })
    }

    /// Check if this is an invalid parameter error
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Error::InvalidParameter { .. })
    }
}
