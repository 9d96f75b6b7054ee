// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory feature source and arc layer
//!
//! Implement the collaborator traits from `arc3d-model` without any storage
//! format, for embedding hosts and tests.

use arc3d_model::{
    Arc3D, AttributeRecord, AttributeValue, Crs, FeatureError, FeatureId, FeatureIter,
    FeatureSink, FeatureSource, GeometryKind, LayerSchema, LineFeature, Result,
};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Line features held in memory
#[derive(Clone, Debug)]
pub struct MemorySource {
    schema: LayerSchema,
    features: Vec<LineFeature>,
}

impl MemorySource {
    /// Create an empty source with the given schema
    pub fn new(schema: LayerSchema) -> Self {
        Self {
            schema,
            features: Vec::new(),
        }
    }

    /// Create a source from existing features
    pub fn with_features(schema: LayerSchema, features: Vec<LineFeature>) -> Self {
        Self { schema, features }
    }

    /// Append a feature
    pub fn push(&mut self, feature: LineFeature) {
        self.features.push(feature);
    }

    /// Number of features
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Check if the source holds no features
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl FeatureSource for MemorySource {
    fn schema(&self) -> &LayerSchema {
        &self.schema
    }

    fn features(&self) -> FeatureIter<'_> {
        Box::new(self.features.iter().cloned().map(Ok))
    }
}

/// One stored arc with its attributes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutputFeature {
    /// Id assigned by the layer
    pub id: FeatureId,
    /// Arc geometry
    pub arc: Arc3D,
    /// Attributes in the layer's field order
    pub attributes: AttributeRecord,
}

/// In-memory 3D arc layer
///
/// Incoming attribute records are projected onto the layer's fields by
/// name: missing fields become null, keys without a field are dropped.
#[derive(Debug)]
pub struct MemoryLayer {
    schema: LayerSchema,
    /// Field name -> position in `schema.fields`
    field_index: FxHashMap<String, usize>,
    features: Vec<OutputFeature>,
    committed: usize,
    next_id: u64,
}

impl MemoryLayer {
    /// Create an empty layer with the given schema
    pub fn new(schema: LayerSchema) -> Result<Self> {
        if schema.geometry != GeometryKind::LineStringZ {
            return Err(FeatureError::schema(format!(
                "arc layer '{}' must store LineStringZ, got {:?}",
                schema.name, schema.geometry
            )));
        }

        let mut field_index = FxHashMap::default();
        for (i, field) in schema.fields.iter().enumerate() {
            if field_index.insert(field.name.clone(), i).is_some() {
                return Err(FeatureError::schema(format!(
                    "duplicate field '{}' in layer '{}'",
                    field.name, schema.name
                )));
            }
        }

        Ok(Self {
            schema,
            field_index,
            features: Vec::new(),
            committed: 0,
            next_id: 1,
        })
    }

    /// Create the empty arc layer matching an input line layer
    ///
    /// `crs` is the system the arcs will be built in.
    pub fn for_source(source: &LayerSchema, crs: Crs) -> Result<Self> {
        Self::new(source.to_arc_layer(crs))
    }

    /// All stored features, committed or not
    pub fn features(&self) -> &[OutputFeature] {
        &self.features
    }

    /// Committed features only
    pub fn committed_features(&self) -> &[OutputFeature] {
        &self.features[..self.committed]
    }

    /// Look up a stored feature by id
    pub fn get(&self, id: FeatureId) -> Option<&OutputFeature> {
        self.features.iter().find(|f| f.id == id)
    }

    /// Number of stored features
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Check if the layer is empty
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Reorder and filter a record to this layer's fields
    fn project(&self, record: &AttributeRecord) -> AttributeRecord {
        let mut values = vec![AttributeValue::Null; self.schema.fields.len()];
        for (key, value) in record.iter() {
            if let Some(&i) = self.field_index.get(key) {
                values[i] = value.clone();
            }
        }

        self.schema
            .field_names()
            .zip(values)
            .collect::<AttributeRecord>()
    }
}

impl FeatureSink for MemoryLayer {
    fn schema(&self) -> &LayerSchema {
        &self.schema
    }

    fn write(&mut self, arc: Arc3D, attributes: AttributeRecord) -> Result<FeatureId> {
        if arc.is_empty() {
            return Err(FeatureError::sink(format!(
                "refusing to store an empty arc in layer '{}'",
                self.schema.name
            )));
        }

        let id = FeatureId(self.next_id);
        self.next_id += 1;
        let attributes = self.project(&attributes);
        self.features.push(OutputFeature {
            id,
            arc,
            attributes,
        });
        Ok(id)
    }

    fn commit(&mut self) -> Result<()> {
        log::debug!(
            "layer '{}': committing {} new features",
            self.schema.name,
            self.features.len() - self.committed
        );
        self.committed = self.features.len();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arc3d_model::{FieldType, Point2D, Point3D};

    fn arc() -> Arc3D {
        Arc3D::new(vec![
            Point3D::new(0.0, 0.0, 0.0),
            Point3D::new(1.0, 0.0, 1.0),
            Point3D::new(2.0, 0.0, 0.0),
        ])
    }

    fn schema() -> LayerSchema {
        LayerSchema::lines("routes", Crs::WEB_MERCATOR)
            .with_field("name", FieldType::String)
            .with_field("count", FieldType::Integer)
    }

    #[test]
    fn test_source_yields_features_in_order() {
        let mut source = MemorySource::new(schema());
        for i in 0u64..3 {
            source.push(LineFeature::new(
                i,
                Point2D::new(0.0, 0.0),
                Point2D::new(10.0, i as f64),
                AttributeRecord::new(),
            ));
        }

        let ids: Vec<_> = source.features().map(|f| f.unwrap().id).collect();
        assert_eq!(ids, vec![FeatureId(0), FeatureId(1), FeatureId(2)]);
        assert_eq!(source.len(), 3);
    }

    #[test]
    fn test_layer_requires_z_geometry() {
        assert!(MemoryLayer::new(schema()).is_err());
        assert!(MemoryLayer::for_source(&schema(), Crs::WEB_MERCATOR).is_ok());
    }

    #[test]
    fn test_layer_rejects_duplicate_fields() {
        let schema = schema()
            .with_field("name", FieldType::String)
            .to_arc_layer(Crs::WEB_MERCATOR);
        assert!(matches!(
            MemoryLayer::new(schema),
            Err(FeatureError::Schema(_))
        ));
    }

    #[test]
    fn test_write_projects_attributes() {
        let mut layer = MemoryLayer::for_source(&schema(), Crs::WEB_MERCATOR).unwrap();
        let record = AttributeRecord::new()
            .with("extra", true)
            .with("count", 4i64);

        let id = layer.write(arc(), record).unwrap();
        let stored = layer.get(id).unwrap();

        let keys: Vec<_> = stored.attributes.keys().collect();
        assert_eq!(keys, vec!["name", "count"]);
        assert!(stored.attributes.get("name").unwrap().is_null());
        assert_eq!(
            stored.attributes.get("count").and_then(|v| v.as_integer()),
            Some(4)
        );
        assert!(!stored.attributes.contains_key("extra"));
    }

    #[test]
    fn test_ids_and_commit() {
        let mut layer = MemoryLayer::for_source(&schema(), Crs::WEB_MERCATOR).unwrap();
        let a = layer.write(arc(), AttributeRecord::new()).unwrap();
        let b = layer.write(arc(), AttributeRecord::new()).unwrap();
        assert_eq!((a, b), (FeatureId(1), FeatureId(2)));
        assert!(layer.committed_features().is_empty());

        layer.commit().unwrap();
        assert_eq!(layer.committed_features().len(), 2);
    }

    #[test]
    fn test_empty_arc_rejected() {
        let mut layer = MemoryLayer::for_source(&schema(), Crs::WEB_MERCATOR).unwrap();
        assert!(matches!(
            layer.write(Arc3D::default(), AttributeRecord::new()),
            Err(FeatureError::Sink(_))
        ));
        assert!(layer.is_empty());
    }
}
