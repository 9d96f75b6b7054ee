// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Collaborator traits
//!
//! The arc core is a pure function. These traits describe the boundary to
//! the code that feeds it features and stores its output.

use crate::{Arc3D, AttributeRecord, Crs, FeatureId, LayerSchema, LineFeature, Point2D, Result};

/// Boxed iterator of features, as returned by [`FeatureSource::features`]
pub type FeatureIter<'a> = Box<dyn Iterator<Item = Result<LineFeature>> + 'a>;

/// Source of 2D line features
///
/// Yields a lazy, finite sequence of features. Each feature exposes a start
/// point, an end point and an opaque attribute record.
///
/// # Example
///
/// ```ignore
/// use arc3d_model::FeatureSource;
///
/// fn count_lines(source: &dyn FeatureSource) -> usize {
///     source.features().filter(|f| f.is_ok()).count()
/// }
/// ```
pub trait FeatureSource: Send + Sync {
    /// Layer description (name, fields, coordinate system)
    fn schema(&self) -> &LayerSchema;

    /// Iterate over the features of the layer
    ///
    /// A failing item does not end the iteration; callers decide whether
    /// to skip it or stop.
    fn features(&self) -> FeatureIter<'_>;
}

/// Destination for 3D arcs
///
/// Persists each arc as a 3D line feature together with its attributes.
/// The sink owns storage format and coordinate system metadata. Writes are
/// issued from a single thread, so implementations need no locking.
pub trait FeatureSink: Send {
    /// Layer description of the output
    fn schema(&self) -> &LayerSchema;

    /// Store one arc with its attributes
    ///
    /// # Returns
    /// The identifier assigned to the stored feature
    fn write(&mut self, arc: Arc3D, attributes: AttributeRecord) -> Result<FeatureId>;

    /// Make all written features durable
    fn commit(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Coordinate normalization into the working planar system
///
/// The arc core performs no reprojection; a feature source whose coordinate
/// system differs from the working one must be routed through an
/// implementation of this trait first.
pub trait Reprojector: Send + Sync {
    /// Coordinate system of incoming points
    fn source_crs(&self) -> Crs;

    /// Coordinate system of outgoing points
    fn target_crs(&self) -> Crs;

    /// Map one point from the source system to the target system
    fn reproject(&self, point: Point2D) -> Result<Point2D>;

    /// Check whether this reprojector maps `from` into `to`
    fn maps(&self, from: Crs, to: Crs) -> bool {
        self.source_crs() == from && self.target_crs() == to
    }
}
