// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arc geometry builder
//!
//! Turns a straight ground segment into a semicircular 3D polyline:
//!
//! 1. radius = floor(distance / 2), center = midpoint, bearing = azimuth(end -> start)
//! 2. flat circle ring of that radius around the origin
//! 3. lift the ring upright (rotate 90 degrees about Y), keep the upper half
//! 4. drop duplicates, sort by y
//! 5. tilt about Y by (elevation - 90), orient about Z by the bearing,
//!    scale z, translate to the center
//!
//! Every transform is applied to the whole point set before the next one.

use crate::azimuth::azimuth;
use crate::circle::circle_ring;
use crate::error::{Error, Result};
use crate::options::{ArcOptions, GROUND_TOLERANCE};
use crate::transform::{HomogeneousPoint, Transform};
use arc3d_model::{Arc3D, ArcRequest, Point2D, Point3D};

/// Builds arcs with a fixed set of shape options
///
/// Stateless apart from its options; safe to share between threads.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ArcGeometryBuilder {
    options: ArcOptions,
}

impl ArcGeometryBuilder {
    /// Create a builder for the given shape
    pub fn new(options: ArcOptions) -> Self {
        Self { options }
    }

    /// Shape options in use
    pub fn options(&self) -> &ArcOptions {
        &self.options
    }

    /// Build the arc for one request, using the request's own shape
    pub fn build_request(request: &ArcRequest) -> Result<Arc3D> {
        Self::new(ArcOptions::from_request(request)).build(&request.start, &request.end)
    }

    /// Build the arc between two ground points
    ///
    /// # Errors
    /// * `InvalidParameter` - bad options or non-finite coordinates
    /// * `DegenerateInput` - the points are closer than two linear units,
    ///   so the truncated radius is zero
    pub fn build(&self, start: &Point2D, end: &Point2D) -> Result<Arc3D> {
        self.options.validate()?;
        if !start.is_finite() {
            return Err(Error::invalid_parameter(
                "start",
                format!("coordinates must be finite, got {}", start),
            ));
        }
        if !end.is_finite() {
            return Err(Error::invalid_parameter(
                "end",
                format!("coordinates must be finite, got {}", end),
            ));
        }

        // Integer truncation keeps output identical to earlier arc layers
        let radius = (start.distance(end) / 2.0).trunc();
        if !radius.is_finite() {
            return Err(Error::invalid_parameter(
                "coordinates",
                format!("segment {} -> {} is too long to represent", start, end),
            ));
        }
        if radius <= 0.0 {
            return Err(Error::degenerate(*start, *end));
        }

        let center = start.midpoint(end);
        let bearing = azimuth(end, start);

        let mut points = self.upright_semicircle(radius);

        let tilt = Transform::rotation_y((self.options.elevation_angle - 90.0).to_radians());
        let orient = Transform::rotation_z(bearing.to_radians());
        let stretch = Transform::scale_z(self.options.height_scale);
        let place = Transform::translation(center.x, center.y);
        for step in [&tilt, &orient, &stretch, &place] {
            step.apply_all(&mut points);
        }
        if points.iter().any(|p| !p.iter().all(|c| c.is_finite())) {
            return Err(Error::invalid_parameter(
                "coordinates",
                format!("arc between {} and {} leaves the representable range", start, end),
            ));
        }

        log::trace!(
            "arc {} -> {}: radius {}, bearing {:.3}, {} points",
            start,
            end,
            radius,
            bearing,
            points.len()
        );

        Ok(Arc3D::new(
            points
                .iter()
                .map(|p| Point3D::new(p[0], p[1], p[2]))
                .collect(),
        ))
    }

    /// Upper half of a circle of `radius` standing in the y-z plane at the origin
    ///
    /// Deduplicated and sorted by ascending y.
    fn upright_semicircle(&self, radius: f64) -> Vec<HomogeneousPoint> {
        let lift = Transform::rotation_y(90.0_f64.to_radians());

        let mut points: Vec<HomogeneousPoint> = circle_ring(radius, self.options.segments as usize)
            .iter()
            .map(|p| lift.apply(&HomogeneousPoint::new(p.x, p.y, 0.0, 1.0)))
            .filter(|p| p[2] >= GROUND_TOLERANCE)
            .collect();

        // Exact duplicates end up adjacent once y ties are broken by x, z
        points.sort_by(|a, b| {
            a[1].total_cmp(&b[1])
                .then_with(|| a[0].total_cmp(&b[0]))
                .then_with(|| a[2].total_cmp(&b[2]))
        });
        points.dedup();

        points
    }
}

/// Build a semicircular 3D arc between two ground points
///
/// # Arguments
/// * `start`, `end` - ground points in one planar projected system
/// * `segments` - segments per quarter circle (at least 3)
/// * `elevation_angle_deg` - tilt of the arc plane, 90 is upright
/// * `height_scale` - multiplier for the arc height, 0 flattens it
pub fn build_arc(
    start: Point2D,
    end: Point2D,
    segments: u32,
    elevation_angle_deg: f64,
    height_scale: f64,
) -> Result<Arc3D> {
    ArcGeometryBuilder::new(ArcOptions::new(segments, elevation_angle_deg, height_scale))
        .build(&start, &end)
}
