// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Summary of a conversion run

use arc3d_model::FeatureId;
use serde::{Deserialize, Serialize};

/// A feature that produced no arc
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkippedFeature {
    /// Source feature id, if the source got far enough to assign one
    pub id: Option<FeatureId>,
    /// Why it was skipped
    pub reason: String,
}

/// Counts and skipped features of one run
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Items pulled from the source, including failed ones
    pub read: usize,
    /// Arcs handed to the sink
    pub written: usize,
    /// Features that were skipped
    pub skipped: Vec<SkippedFeature>,
}

impl RunReport {
    /// Record a skipped feature
    pub fn skip(&mut self, id: Option<FeatureId>, reason: impl Into<String>) {
        self.skipped.push(SkippedFeature {
            id,
            reason: reason.into(),
        });
    }

    /// Check if every feature became an arc
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty() && self.read == self.written
    }
}
