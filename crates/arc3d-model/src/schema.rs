// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Layer descriptions: name, fields, coordinate system and geometry kind

use crate::{Field, FieldType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coordinate reference system identified by its EPSG code
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Crs(pub u32);

impl Crs {
    /// Spherical Mercator, the planar working system for arc construction
    pub const WEB_MERCATOR: Crs = Crs(3857);

    /// Geographic WGS 84 (degrees, not usable for arc construction)
    pub const WGS84: Crs = Crs(4326);

    /// Create from an EPSG code
    pub const fn epsg(code: u32) -> Self {
        Crs(code)
    }
}

impl Default for Crs {
    fn default() -> Self {
        Crs::WEB_MERCATOR
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.0)
    }
}

/// Geometry stored by a layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    /// Planar line strings (input lines)
    LineString2D,
    /// Line strings with elevation (output arcs)
    LineStringZ,
}

/// Description of a feature layer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerSchema {
    /// Layer name
    pub name: String,
    /// Attribute columns in order
    pub fields: Vec<Field>,
    /// Coordinate system of the geometries
    pub crs: Crs,
    /// Geometry kind
    pub geometry: GeometryKind,
}

impl LayerSchema {
    /// Create a schema for a 2D line layer
    pub fn lines(name: impl Into<String>, crs: Crs) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            crs,
            geometry: GeometryKind::LineString2D,
        }
    }

    /// Add a field
    pub fn with_field(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.fields.push(Field::new(name, field_type));
        self
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field names in order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Empty 3D arc layer derived from this layer
    ///
    /// Keeps name and fields, stores `LineStringZ` in `crs`, which should be
    /// the system the arcs are built in.
    pub fn to_arc_layer(&self, crs: Crs) -> LayerSchema {
        LayerSchema {
            name: self.name.clone(),
            fields: self.fields.clone(),
            crs,
            geometry: GeometryKind::LineStringZ,
        }
    }
}
