// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pipeline configuration

use crate::error::{PipelineError, Result};
use arc3d_geometry::ArcOptions;
use arc3d_model::Crs;
use serde::{Deserialize, Serialize};

/// What to do when a single feature cannot be turned into an arc
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Log the failure, record it in the report and continue
    #[default]
    Skip,
    /// Stop at the first failing feature
    Abort,
}

/// Settings for one layer conversion run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Shape of every generated arc
    pub arc: ArcOptions,
    /// Per-feature failure handling
    pub on_error: ErrorPolicy,
    /// Build arcs on the rayon thread pool
    pub parallel: bool,
    /// Planar system arcs are built in
    pub working_crs: Crs,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            arc: ArcOptions::default(),
            on_error: ErrorPolicy::Skip,
            parallel: false,
            working_crs: Crs::WEB_MERCATOR,
        }
    }
}

impl PipelineConfig {
    /// Set the arc shape
    pub fn with_arc(mut self, arc: ArcOptions) -> Self {
        self.arc = arc;
        self
    }

    /// Set the failure policy
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.on_error = policy;
        self
    }

    /// Enable or disable parallel building
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Set the working coordinate system
    pub fn with_working_crs(mut self, crs: Crs) -> Self {
        self.working_crs = crs;
        self
    }

    /// Check the configuration before a run
    pub fn validate(&self) -> Result<()> {
        self.arc
            .validate()
            .map_err(|e| PipelineError::config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.on_error, ErrorPolicy::Skip);
        assert!(!config.parallel);
        assert_eq!(config.working_crs, Crs::WEB_MERCATOR);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_arc_options_rejected() {
        let config = PipelineConfig::default().with_arc(ArcOptions::default().with_segments(1));
        assert!(matches!(config.validate(), Err(PipelineError::Config(_))));
    }

    #[test]
    fn test_load_from_json() {
        let config: PipelineConfig = serde_json::from_str(
            r#"{"arc": {"segments": 16, "elevation_angle": 60.0}, "on_error": "abort", "parallel": true}"#,
        )
        .unwrap();
        assert_eq!(config.arc.segments, 16);
        assert_eq!(config.arc.elevation_angle, 60.0);
        assert_eq!(config.arc.height_scale, 0.5);
        assert_eq!(config.on_error, ErrorPolicy::Abort);
        assert!(config.parallel);
        assert_eq!(config.working_crs, Crs::WEB_MERCATOR);
    }
}
