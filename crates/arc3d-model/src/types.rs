// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core value types for arc generation
//!
//! Every type here is created per request, used once and dropped. None of
//! them carries shared mutable state.

use crate::AttributeRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default number of segments per quarter circle
pub const DEFAULT_SEGMENTS: u32 = 10;

/// Default elevation angle in degrees (upright arc)
pub const DEFAULT_ELEVATION_ANGLE: f64 = 90.0;

/// Default multiplier applied to the arc height
pub const DEFAULT_HEIGHT_SCALE: f64 = 0.5;

/// Type-safe feature identifier
///
/// Wraps the identifier a feature source or sink assigns to a feature.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Default)]
pub struct FeatureId(pub u64);

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for FeatureId {
    fn from(id: u64) -> Self {
        FeatureId(id)
    }
}

impl From<FeatureId> for u64 {
    fn from(id: FeatureId) -> Self {
        id.0
    }
}

/// Point in a planar projected coordinate system (linear units)
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    /// Create a new point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point2D) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Midpoint between this point and another
    ///
    /// Halves before adding so coordinates near `f64::MAX` do not overflow.
    /// Halving is exact, so the result equals `(a + b) / 2` whenever that
    /// sum is finite.
    pub fn midpoint(&self, other: &Point2D) -> Point2D {
        Point2D::new(self.x / 2.0 + other.x / 2.0, self.y / 2.0 + other.y / 2.0)
    }

    /// Check that both coordinates are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Point2D::new(x, y)
    }
}

/// Point with elevation above the ground plane (same units as x/y)
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    /// Create a new point
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Project onto the ground plane
    pub fn ground(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// One arc construction request
///
/// Built by the caller per line feature and consumed once by the builder.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArcRequest {
    /// Ground point the line starts at
    pub start: Point2D,
    /// Ground point the line ends at
    pub end: Point2D,
    /// Segments per quarter circle of the underlying circle approximation
    pub segments: u32,
    /// Tilt of the arc plane in degrees (90 = upright)
    pub elevation_angle: f64,
    /// Multiplier for the arc's z extent
    pub height_scale: f64,
}

impl ArcRequest {
    /// Create a request with the default arc shape
    pub fn new(start: Point2D, end: Point2D) -> Self {
        Self {
            start,
            end,
            segments: DEFAULT_SEGMENTS,
            elevation_angle: DEFAULT_ELEVATION_ANGLE,
            height_scale: DEFAULT_HEIGHT_SCALE,
        }
    }

    /// Set the number of segments per quarter circle
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
}

/// Ordered 3D polyline approximating a semicircle between two ground points
///
/// Immutable once produced; the owner attaches it to an output feature.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Arc3D {
    points: Vec<Point3D>,
}

impl Arc3D {
    /// Wrap an ordered point sequence
    pub fn new(points: Vec<Point3D>) -> Self {
        Self { points }
    }

    /// Points in path order
    pub fn points(&self) -> &[Point3D] {
        &self.points
    }

    /// Iterate over points in path order
    pub fn iter(&self) -> std::slice::Iter<'_, Point3D> {
        self.points.iter()
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the arc has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point of the polyline
    pub fn first(&self) -> Option<&Point3D> {
        self.points.first()
    }

    /// Last point of the polyline
    pub fn last(&self) -> Option<&Point3D> {
        self.points.last()
    }

    /// Highest point of the arc
    pub fn apex(&self) -> Option<&Point3D> {
        self.points.iter().max_by(|a, b| a.z.total_cmp(&b.z))
    }

    /// Maximum elevation, or `None` for an empty arc
    pub fn max_z(&self) -> Option<f64> {
        self.apex().map(|p| p.z)
    }

    /// Take ownership of the points
    pub fn into_points(self) -> Vec<Point3D> {
        self.points
    }
}

impl<'a> IntoIterator for &'a Arc3D {
    type Item = &'a Point3D;
    type IntoIter = std::slice::Iter<'a, Point3D>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// A 2D line feature as yielded by a feature source
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineFeature {
    /// Identifier within the source
    pub id: FeatureId,
    /// First vertex of the line
    pub start: Point2D,
    /// Last vertex of the line
    pub end: Point2D,
    /// Attributes carried verbatim to the output feature
    pub attributes: AttributeRecord,
}

impl LineFeature {
    /// Create a new line feature
    pub fn new(
        id: impl Into<FeatureId>,
        start: Point2D,
        end: Point2D,
        attributes: AttributeRecord,
    ) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            attributes,
        }
    }

    /// Build an arc request for this line with the given shape
    pub fn request(&self, segments: u32, elevation_angle: f64, height_scale: f64) -> ArcRequest {
        ArcRequest::new(self.start, self.end)
            .with_segments(segments)
            .with_elevation_angle(elevation_angle)
            .with_height_scale(height_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_id_display() {
        assert_eq!(FeatureId(42).to_string(), "#42");
        assert_eq!(u64::from(FeatureId::from(7)), 7);
    }

    #[test]
    fn test_point_distance_and_midpoint() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(a.midpoint(&b), Point2D::new(1.5, 2.0));
    }

    #[test]
    fn test_midpoint_of_huge_coordinates() {
        let a = Point2D::new(1.7e308, 0.0);
        let b = Point2D::new(1.7e308, 10.0);
        let m = a.midpoint(&b);
        assert!(m.is_finite());
        assert_eq!(m, Point2D::new(1.7e308, 5.0));

        let m = Point2D::new(-f64::MAX, 0.0).midpoint(&Point2D::new(f64::MAX, 0.0));
        assert_eq!(m, Point2D::new(0.0, 0.0));
    }

    #[test]
    fn test_point_finiteness() {
        assert!(Point2D::new(1.0, 2.0).is_finite());
        assert!(!Point2D::new(f64::NAN, 2.0).is_finite());
        assert!(!Point2D::new(1.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_request_defaults() {
        let request = ArcRequest::new(Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0));
        assert_eq!(request.segments, 10);
        assert_eq!(request.elevation_angle, 90.0);
        assert_eq!(request.height_scale, 0.5);

        let request = request.with_segments(16).with_height_scale(1.0);
        assert_eq!(request.segments, 16);
        assert_eq!(request.height_scale, 1.0);
    }

    #[test]
    fn test_arc_accessors() {
        let arc = Arc3D::new(vec![
            Point3D::new(0.0, 0.0, 0.0),
            Point3D::new(1.0, 0.0, 2.5),
            Point3D::new(2.0, 0.0, 0.0),
        ]);
        assert_eq!(arc.len(), 3);
        assert_eq!(arc.max_z(), Some(2.5));
        assert_eq!(arc.apex().map(|p| p.ground()), Some(Point2D::new(1.0, 0.0)));
        assert_eq!(arc.first(), Some(&Point3D::new(0.0, 0.0, 0.0)));
        assert_eq!(arc.last(), Some(&Point3D::new(2.0, 0.0, 0.0)));
        assert!(Arc3D::default().max_z().is_none());
    }

    #[test]
    fn test_feature_request_uses_endpoints() {
        let feature = LineFeature::new(
            FeatureId(1),
            Point2D::new(1.0, 2.0),
            Point2D::new(3.0, 4.0),
            AttributeRecord::new(),
        );
        let request = feature.request(12, 45.0, 2.0);
        assert_eq!(request.start, feature.start);
        assert_eq!(request.end, feature.end);
        assert_eq!(request.segments, 12);
        assert_eq!(request.elevation_angle, 45.0);
    }
}
