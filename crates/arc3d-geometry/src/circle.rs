// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Circle approximation by a regular polygon ring
//!
//! Follows the point-buffer convention of common GIS geometry engines:
//! the resolution is given per quarter circle, the ring starts on the
//! positive x axis, winds clockwise and is closed.

use nalgebra::Point2;
use std::f64::consts::TAU;

/// Closed ring approximating a circle around the origin
///
/// Produces `4 * quadrant_segments` distinct vertices followed by a copy of
/// the first one. The first vertex is `(radius, 0)`.
pub fn circle_ring(radius: f64, quadrant_segments: usize) -> Vec<Point2<f64>> {
    let vertex_count = 4 * quadrant_segments;
    let mut ring = Vec::with_capacity(vertex_count + 1);
    if vertex_count == 0 {
        return ring;
    }

    let step = TAU / vertex_count as f64;
    for i in 0..vertex_count {
        let angle = -(i as f64) * step;
        ring.push(Point2::new(radius * angle.cos(), radius * angle.sin()));
    }
    ring.push(ring[0]);

    ring
}

/// Length of one polygon edge for the given resolution
pub fn edge_length(radius: f64, quadrant_segments: usize) -> f64 {
    if quadrant_segments == 0 {
        return 0.0;
    }
    let half_angle = TAU / (8 * quadrant_segments) as f64;
    2.0 * radius * half_angle.sin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ring_is_closed() {
        let ring = circle_ring(10.0, 4);
        assert_eq!(ring.len(), 17);
        assert_eq!(ring.first(), ring.last());
        assert_eq!(ring[0], Point2::new(10.0, 0.0));
    }

    #[test]
    fn test_ring_vertices_on_circle() {
        for p in circle_ring(7.0, 5) {
            assert_relative_eq!(p.coords.norm(), 7.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_ring_winds_clockwise() {
        let ring = circle_ring(1.0, 3);
        // Shoelace sum is negative for clockwise rings
        let area: f64 = ring
            .windows(2)
            .map(|w| w[0].x * w[1].y - w[1].x * w[0].y)
            .sum();
        assert!(area < 0.0);
        // Second vertex lies below the x axis
        assert!(ring[1].y < 0.0);
    }

    #[test]
    fn test_quadrant_vertices() {
        let ring = circle_ring(2.0, 2);
        assert_relative_eq!(ring[2].x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(ring[2].y, -2.0, epsilon = 1e-12);
        assert_relative_eq!(ring[4].x, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_resolution() {
        assert!(circle_ring(1.0, 0).is_empty());
        assert_eq!(edge_length(1.0, 0), 0.0);
    }

    #[test]
    fn test_edge_length_matches_vertices() {
        let ring = circle_ring(100.0, 10);
        let measured = (ring[1] - ring[0]).norm();
        assert_relative_eq!(edge_length(100.0, 10), measured, epsilon = 1e-9);
    }
}
