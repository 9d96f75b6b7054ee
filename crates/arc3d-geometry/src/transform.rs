// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Homogeneous 4x4 transforms acting on row vectors
//!
//! Points are homogeneous row vectors `[x, y, z, 1]` and are transformed as
//! `p' = p · M`. Composition therefore reads left to right: in
//! `a.then(&b)` the transform `a` is applied first.
//!
//! The rotation constructors hold the standard right-handed rotation
//! matrices. Because they multiply row vectors, a positive angle turns
//! points clockwise when looking down the axis towards the origin; for
//! the Z axis this matches compass bearings (north = +y, east = +x).

use nalgebra::{Matrix4, Point3, RowVector4};

/// Homogeneous point in row-vector form
pub type HomogeneousPoint = RowVector4<f64>;

/// Lift a 3D point into homogeneous row form
#[inline]
pub fn to_homogeneous(p: &Point3<f64>) -> HomogeneousPoint {
    RowVector4::new(p.x, p.y, p.z, 1.0)
}

/// Drop the homogeneous coordinate
#[inline]
pub fn from_homogeneous(p: &HomogeneousPoint) -> Point3<f64> {
    Point3::new(p[0], p[1], p[2])
}

/// A 4x4 affine transform in row-vector convention
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    matrix: Matrix4<f64>,
}

impl Transform {
    /// Identity transform
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Wrap a raw matrix (row-vector convention)
    pub fn from_matrix(matrix: Matrix4<f64>) -> Self {
        Self { matrix }
    }

    /// Rotation about the X axis
    pub fn rotation_x(radians: f64) -> Self {
        let (s, c) = radians.sin_cos();
        Self::from_matrix(Matrix4::new(
            1.0, 0.0, 0.0, 0.0, //
            0.0, c, -s, 0.0, //
            0.0, s, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ))
    }

    /// Rotation about the Y axis
    pub fn rotation_y(radians: f64) -> Self {
        let (s, c) = radians.sin_cos();
        Self::from_matrix(Matrix4::new(
            c, 0.0, s, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            -s, 0.0, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ))
    }

    /// Rotation about the Z axis
    pub fn rotation_z(radians: f64) -> Self {
        let (s, c) = radians.sin_cos();
        Self::from_matrix(Matrix4::new(
            c, -s, 0.0, 0.0, //
            s, c, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ))
    }

    /// Scale along Z only; a factor of 0 flattens onto the ground plane
    pub fn scale_z(factor: f64) -> Self {
        Self::from_matrix(Matrix4::new(
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, factor, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ))
    }

    /// Translation in the ground plane
    ///
    /// Offsets live in the bottom row since points are row vectors.
    pub fn translation(dx: f64, dy: f64) -> Self {
        Self::from_matrix(Matrix4::new(
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            dx, dy, 0.0, 1.0,
        ))
    }

    /// Underlying matrix
    pub fn matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }

    /// Compose: apply `self` first, then `next`
    pub fn then(&self, next: &Transform) -> Transform {
        Transform::from_matrix(self.matrix * next.matrix)
    }

    /// Transform one homogeneous point
    #[inline]
    pub fn apply(&self, point: &HomogeneousPoint) -> HomogeneousPoint {
        point * self.matrix
    }

    /// Transform a 3D point
    #[inline]
    pub fn apply_point(&self, point: &Point3<f64>) -> Point3<f64> {
        from_homogeneous(&self.apply(&to_homogeneous(point)))
    }

    /// Transform points in place
    pub fn apply_all(&self, points: &mut [HomogeneousPoint]) {
        for p in points.iter_mut() {
            *p = self.apply(p);
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
