// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Compass bearing between two planar points

use arc3d_model::Point2D;

/// Bearing in degrees from `from` towards `to`
///
/// Clockwise from north (+y) in `(-180, 180]`, the range GIS point
/// azimuths report. Westward bearings stay negative so the rotation built
/// from them matches earlier arc layers exactly.
pub fn azimuth(from: &Point2D, to: &Point2D) -> f64 {
    (to.x - from.x).atan2(to.y - from.y).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cardinal_directions() {
        let o = Point2D::new(0.0, 0.0);
        assert_relative_eq!(azimuth(&o, &Point2D::new(0.0, 1.0)), 0.0);
        assert_relative_eq!(azimuth(&o, &Point2D::new(1.0, 0.0)), 90.0);
        assert_relative_eq!(azimuth(&o, &Point2D::new(0.0, -1.0)), 180.0);
        assert_relative_eq!(azimuth(&o, &Point2D::new(-1.0, 0.0)), -90.0);
    }

    #[test]
    fn test_westward_bearings_stay_negative() {
        let o = Point2D::new(0.0, 0.0);
        assert_relative_eq!(azimuth(&o, &Point2D::new(-1.0, 1.0)), -45.0);
        assert_relative_eq!(azimuth(&o, &Point2D::new(-1.0, -1.0)), -135.0);
        // Due south from a positive zero offset is the positive end of the range
        assert_eq!(azimuth(&o, &Point2D::new(0.0, -1.0)), 180.0);
    }

    #[test]
    fn test_reverse_differs_by_half_turn() {
        let a = Point2D::new(3834358.0, 3699610.0);
        let b = Point2D::new(3877714.0, 3757735.0);
        let forward = azimuth(&a, &b);
        let back = azimuth(&b, &a);
        assert_relative_eq!((forward - back).abs(), 180.0, epsilon = 1e-9);
        assert!(back > -180.0 && back <= 180.0);
        // Scenario line runs north-east, so the way back is south-west
        assert!(back < 0.0);
    }
}
