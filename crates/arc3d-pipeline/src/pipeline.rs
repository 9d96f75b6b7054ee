// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Layer conversion - routes line features through the arc builder
//!
//! Reads features from a [`FeatureSource`], brings their endpoints into the
//! working planar system, builds one arc per feature and hands
//! `(arc, attributes)` to a [`FeatureSink`]. The sink is only ever written
//! from the calling thread.

use crate::config::{ErrorPolicy, PipelineConfig};
use crate::error::{PipelineError, Result};
use crate::report::RunReport;
use arc3d_geometry::ArcGeometryBuilder;
use arc3d_model::{
    Arc3D, AttributeRecord, FeatureError, FeatureId, FeatureSink, FeatureSource, LayerSchema,
    LineFeature, Reprojector,
};
use rayon::prelude::*;
use std::sync::Arc;

/// A feature that did not become an arc
struct Failure {
    id: Option<FeatureId>,
    error: PipelineError,
}

type Converted = std::result::Result<(Arc3D, AttributeRecord), Failure>;

/// Converts 2D line layers into 3D arc layers
pub struct ArcPipeline {
    config: PipelineConfig,
    builder: ArcGeometryBuilder,
    reprojector: Option<Arc<dyn Reprojector>>,
}

impl ArcPipeline {
    /// Create a pipeline, validating the configuration
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            builder: ArcGeometryBuilder::new(config.arc),
            config,
            reprojector: None,
        })
    }

    /// Route sources in a foreign coordinate system through `reprojector`
    pub fn with_reprojector(mut self, reprojector: Arc<dyn Reprojector>) -> Self {
        self.reprojector = Some(reprojector);
        self
    }

    /// Active configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Arc builder used for every feature
    pub fn builder(&self) -> &ArcGeometryBuilder {
        &self.builder
    }

    /// Convert every feature of `source` and write the arcs to `sink`
    ///
    /// The sink must store geometries in the working system. Sink failures
    /// always stop the run. Failures of individual features follow the
    /// configured [`ErrorPolicy`]. The sink is committed once after the last
    /// feature.
    pub fn run(&self, source: &dyn FeatureSource, sink: &mut dyn FeatureSink) -> Result<RunReport> {
        let schema = source.schema();
        let working = self.config.working_crs;
        let sink_crs = sink.schema().crs;
        if sink_crs != working {
            return Err(PipelineError::SinkCrsMismatch { sink_crs, working });
        }
        let reprojector = self.reprojector_for(schema)?;

        log::info!(
            "building arcs for layer '{}' ({} -> {}, segments {}, elevation {}, height scale {})",
            schema.name,
            schema.crs,
            sink.schema().name,
            self.config.arc.segments,
            self.config.arc.elevation_angle,
            self.config.arc.height_scale,
        );

        let report = if self.config.parallel {
            self.run_parallel(source, reprojector, sink)?
        } else {
            self.run_sequential(source, reprojector, sink)?
        };

        sink.commit()?;

        log::info!(
            "layer '{}': {} read, {} written, {} skipped",
            schema.name,
            report.read,
            report.written,
            report.skipped.len()
        );
        Ok(report)
    }

    fn run_sequential(
        &self,
        source: &dyn FeatureSource,
        reprojector: Option<&dyn Reprojector>,
        sink: &mut dyn FeatureSink,
    ) -> Result<RunReport> {
        let mut report = RunReport::default();
        for item in source.features() {
            report.read += 1;
            let converted = self.convert(item, reprojector);
            self.store(converted, sink, &mut report)?;
        }
        Ok(report)
    }

    fn run_parallel(
        &self,
        source: &dyn FeatureSource,
        reprojector: Option<&dyn Reprojector>,
        sink: &mut dyn FeatureSink,
    ) -> Result<RunReport> {
        let items: Vec<_> = source.features().collect();
        let mut report = RunReport {
            read: items.len(),
            ..RunReport::default()
        };

        // Indexed collect keeps source order
        let converted: Vec<Converted> = items
            .into_par_iter()
            .map(|item| self.convert(item, reprojector))
            .collect();

        for outcome in converted {
            self.store(outcome, sink, &mut report)?;
        }
        Ok(report)
    }

    /// Write a converted feature or apply the error policy to a failure
    fn store(
        &self,
        outcome: Converted,
        sink: &mut dyn FeatureSink,
        report: &mut RunReport,
    ) -> Result<()> {
        match outcome {
            Ok((arc, attributes)) => {
                let id = sink.write(arc, attributes)?;
                log::trace!("stored arc {}", id);
                report.written += 1;
                Ok(())
            }
            Err(Failure { id, error }) => match self.config.on_error {
                ErrorPolicy::Skip => {
                    match id {
                        Some(id) => log::warn!("skipping feature {}: {}", id, error),
                        None => log::warn!("skipping unreadable feature: {}", error),
                    }
                    report.skip(id, error.to_string());
                    Ok(())
                }
                ErrorPolicy::Abort => Err(error),
            },
        }
    }

    /// Build the arc for one source item
    fn convert(
        &self,
        item: arc3d_model::Result<LineFeature>,
        reprojector: Option<&dyn Reprojector>,
    ) -> Converted {
        let feature = item.map_err(|error| Failure {
            id: match &error {
                FeatureError::InvalidFeature { id, .. } => Some(*id),
                _ => None,
            },
            error: error.into(),
        })?;
        let id = feature.id;

        let (start, end) = match reprojector {
            Some(r) => r
                .reproject(feature.start)
                .and_then(|start| Ok((start, r.reproject(feature.end)?)))
                .map_err(|error| Failure {
                    id: Some(id),
                    error: error.into(),
                })?,
            None => (feature.start, feature.end),
        };

        let arc = self.builder.build(&start, &end).map_err(|error| Failure {
            id: Some(id),
            error: PipelineError::geometry(id, error),
        })?;

        Ok((arc, feature.attributes))
    }

    /// Pick the reprojector for a source layer, if it needs one
    fn reprojector_for(&self, schema: &LayerSchema) -> Result<Option<&dyn Reprojector>> {
        let working = self.config.working_crs;
        if schema.crs == working {
            return Ok(None);
        }

        match &self.reprojector {
            Some(r) if r.maps(schema.crs, working) => {
                log::debug!("reprojecting layer '{}' from {} to {}", schema.name, schema.crs, working);
                Ok(Some(r.as_ref()))
            }
            _ => Err(PipelineError::CrsMismatch {
                source_crs: schema.crs,
                working,
            }),
        }
    }
}
