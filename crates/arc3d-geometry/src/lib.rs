// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Arc3D Geometry
//!
//! Converts a straight 2D segment between two ground points into a 3D arc:
//! an ordered polyline tracing a semicircle that rises above the segment.
//! Useful for drawing connections such as flight paths between map points.
//!
//! ## Overview
//!
//! - **Transforms**: 4x4 homogeneous rotation, z-scale and translation matrices
//! - **Circle ring**: regular polygon approximation of a circle
//! - **Azimuth**: compass bearing between two points
//! - **Builder**: the arc pipeline itself, pure and reentrant
//!
//! All input coordinates must share one planar projected system with linear
//! units; this crate performs no reprojection.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use arc3d_geometry::{build_arc, Point2D};
//!
//! let arc = build_arc(
//!     Point2D::new(3834358.0, 3699610.0),
//!     Point2D::new(3877714.0, 3757735.0),
//!     10,   // segments per quarter circle
//!     90.0, // upright
//!     0.5,  // half height
//! )?;
//!
//! println!("{} points, apex at {:?}", arc.len(), arc.apex());
//! ```

pub mod azimuth;
pub mod builder;
pub mod circle;
pub mod error;
pub mod options;
pub mod transform;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix4, Point2, Point3};

// Re-export the value types the builder speaks
pub use arc3d_model::{Arc3D, ArcRequest, Point2D, Point3D};

// Re-export main types
pub use azimuth::azimuth;
pub use builder::{build_arc, ArcGeometryBuilder};
pub use circle::{circle_ring, edge_length};
pub use error::{Error, Result};
pub use options::{ArcOptions, GROUND_TOLERANCE, MAX_SEGMENTS, MIN_SEGMENTS};
pub use transform::{from_homogeneous, to_homogeneous, HomogeneousPoint, Transform};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_arc() {
        let arc = build_arc(
            Point2D::new(0.0, 0.0),
            Point2D::new(1000.0, 0.0),
            8,
            90.0,
            1.0,
        )
        .unwrap();

        assert_eq!(arc.len(), 17);
        assert!(arc.max_z().unwrap() > 0.0);
    }

    #[test]
    fn test_builder_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ArcGeometryBuilder>();
        assert_send_sync::<Transform>();
    }
}
