// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arc shape configuration

use crate::error::{Error, Result};
use arc3d_model::{ArcRequest, DEFAULT_ELEVATION_ANGLE, DEFAULT_HEIGHT_SCALE, DEFAULT_SEGMENTS};
use serde::{Deserialize, Serialize};

/// Smallest accepted number of segments per quarter circle
pub const MIN_SEGMENTS: u32 = 3;

/// Largest accepted number of segments per quarter circle
///
/// The circle ring holds `4 * segments` vertices, so this caps one build at
/// 16384 ring vertices and 2049 arc points.
pub const MAX_SEGMENTS: u32 = 4096;

/// Lifted circle vertices with z below this value are discarded
///
/// Slightly negative so vertices that sit on the ground plane up to
/// floating-point noise are kept.
pub const GROUND_TOLERANCE: f64 = -0.1;

/// Shape parameters shared by every arc a builder produces
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcOptions {
    /// Segments per quarter circle; an arc has `2 * segments + 1` points
    pub segments: u32,
    /// Tilt of the arc plane in degrees (0 and 180 lie flat, 90 is upright)
    pub elevation_angle: f64,
    /// Multiplier for the arc's z extent
    pub height_scale: f64,
}

impl Default for ArcOptions {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
            elevation_angle: DEFAULT_ELEVATION_ANGLE,
            height_scale: DEFAULT_HEIGHT_SCALE,
        }
    }
}

impl ArcOptions {
    /// Create options with explicit values
    pub fn new(segments: u32, elevation_angle: f64, height_scale: f64) -> Self {
        Self {
            segments,
            elevation_angle,
            height_scale,
        }
    }

    /// Take the shape part of a request
    pub fn from_request(request: &ArcRequest) -> Self {
        Self::new(
            request.segments,
            request.elevation_angle,
            request.height_scale,
        )
    }

    /// Set segments per quarter circle
    pub fn with_segments(mut self, segments: u32) -> Self {
        self.segments = segments;
        self
    }

    /// Set the elevation angle in degrees
    pub fn with_elevation_angle(mut self, degrees: f64) -> Self {
        self.elevation_angle = degrees;
        self
    }

    /// Set the height scale
    pub fn with_height_scale(mut self, scale: f64) -> Self {
        self.height_scale = scale;
        self
    }

    /// Number of points every arc built with these options has
    pub fn point_count(&self) -> usize {
        2 * self.segments as usize + 1
    }

    /// Check all parameters
    pub fn validate(&self) -> Result<()> {
        if !(MIN_SEGMENTS..=MAX_SEGMENTS).contains(&self.segments) {
            return Err(Error::invalid_parameter(
                "segments",
                format!(
                    "must be between {} and {}, got {}",
                    MIN_SEGMENTS, MAX_SEGMENTS, self.segments
                ),
            ));
        }
        if !self.elevation_angle.is_finite() {
            return Err(Error::invalid_parameter(
                "elevation_angle",
                format!("must be finite, got {}", self.elevation_angle),
            ));
        }
        if !self.height_scale.is_finite() || self.height_scale < 0.0 {
            return Err(Error::invalid_parameter(
                "height_scale",
                format!("must be finite and non-negative, got {}", self.height_scale),
            ));
        }
        Ok(())
    }
}
