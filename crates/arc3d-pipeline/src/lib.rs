// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Arc3D Pipeline
//!
//! Layer-level conversion of 2D line features into 3D arcs.
//!
//! A run reads every feature of a [`FeatureSource`], reprojects its endpoints
//! into the working planar system when needed, builds the arc with
//! [`arc3d_geometry::ArcGeometryBuilder`] and writes `(arc, attributes)` to a
//! [`FeatureSink`]. Per-feature failures are skipped or abort the run
//! according to [`ErrorPolicy`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use arc3d_pipeline::{convert_layer, MemorySource, PipelineConfig};
//!
//! let (layer, report) = convert_layer(&source, PipelineConfig::default())?;
//! println!("{} arcs, {} skipped", report.written, report.skipped.len());
//! ```

pub mod config;
pub mod error;
pub mod memory;
pub mod pipeline;
pub mod report;

pub use arc3d_model::{FeatureSink, FeatureSource, Reprojector};

pub use config::{ErrorPolicy, PipelineConfig};
pub use error::{PipelineError, Result};
pub use memory::{MemoryLayer, MemorySource, OutputFeature};
pub use pipeline::ArcPipeline;
pub use report::{RunReport, SkippedFeature};

/// Convert a whole source layer into a new in-memory arc layer
///
/// The output layer copies the source's fields and is created in
/// the configured working system.
pub fn convert_layer(
    source: &dyn FeatureSource,
    config: PipelineConfig,
) -> Result<(MemoryLayer, RunReport)> {
    let mut layer = MemoryLayer::for_source(source.schema(), config.working_crs)?;
    let report = ArcPipeline::new(config)?.run(source, &mut layer)?;
    Ok((layer, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use arc3d_model::{AttributeRecord, Crs, FeatureId, FieldType, LayerSchema, LineFeature, Point2D};

    #[test]
    fn test_convert_reference_route() {
        let schema = LayerSchema::lines("flights", Crs::WEB_MERCATOR)
            .with_field("route", FieldType::String)
            .with_field("passengers", FieldType::Integer);
        let source = MemorySource::with_features(
            schema,
            vec![LineFeature::new(
                FeatureId(7),
                Point2D::new(3834358.0, 3699610.0),
                Point2D::new(3877714.0, 3757735.0),
                AttributeRecord::new()
                    .with("route", "TLV-HFA")
                    .with("passengers", 180i64),
            )],
        );

        let (layer, report) = convert_layer(&source, PipelineConfig::default()).unwrap();
        assert!(report.is_complete());
        assert_eq!(layer.committed_features().len(), 1);

        let output = &layer.features()[0];
        assert_eq!(output.arc.len(), 21);
        assert_relative_eq!(output.arc.max_z().unwrap(), 18128.0, epsilon = 1e-6);
        assert_eq!(
            output.attributes.get("route").and_then(|v| v.as_string()),
            Some("TLV-HFA")
        );
        assert_eq!(
            output.attributes.get("passengers").and_then(|v| v.as_integer()),
            Some(180)
        );
    }

    #[test]
    fn test_output_layer_uses_working_crs() {
        let source = MemorySource::new(LayerSchema::lines("empty", Crs::WEB_MERCATOR));
        let (layer, report) = convert_layer(&source, PipelineConfig::default()).unwrap();
        assert!(layer.is_empty());
        assert_eq!(report, RunReport::default());
        assert_eq!(FeatureSink::schema(&layer).crs, Crs::WEB_MERCATOR);

        let source = MemorySource::new(LayerSchema::lines("local", Crs::epsg(2039)));
        let config = PipelineConfig::default().with_working_crs(Crs::epsg(2039));
        let (layer, _) = convert_layer(&source, config).unwrap();
        assert_eq!(FeatureSink::schema(&layer).crs, Crs::epsg(2039));
    }
}
