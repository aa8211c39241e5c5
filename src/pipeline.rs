// THEORY:
// The `pipeline` module is the top-level API for the labeling engine. It
// encapsulates the table construction and propagation steps into a single,
// easy-to-use interface so that callers (batch tools, notebook bindings) can
// go from a segmentation and a point table to an updated feature table
// without touching the internal modules.

use crate::core_modules::feature_table::{FeatureRow, FeatureTable};
use crate::core_modules::label_propagator::label_propagator;
use crate::core_modules::label_volume::LabelVolume;
use crate::core_modules::reader_point::ReaderPoint;
use crate::error::Result;

// Re-export key data structures for the public API.
pub use crate::core_modules::feature_table::{UNDEFINED_REGION, UNDEFINED_TYPE};
pub use crate::core_modules::label_propagator::PropagationSummary;
pub use crate::core_modules::reader_point::PointFilter;

/// Configuration for the LabelingPipeline, allowing for tunable behavior.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Region written into freshly seeded feature rows.
    pub default_region: String,
    /// Type written into freshly seeded feature rows.
    pub default_type: String,
    /// Optional selector restricting which reader points participate.
    pub point_filter: Option<PointFilter>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            default_region: UNDEFINED_REGION.to_string(),
            default_type: UNDEFINED_TYPE.to_string(),
            point_filter: None,
        }
    }
}

/// The primary output of one labeling pass.
#[derive(Debug, Clone)]
pub enum Report {
    /// No reader point reached a tracked patch; the table is unchanged.
    NoLabelsApplied(PropagationSummary),
    /// At least one feature row was updated.
    LabelsApplied(PropagationSummary),
}

/// The main, top-level struct for the labeling engine.
pub struct LabelingPipeline {
    config: PipelineConfig,
}

impl LabelingPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Builds a feature table with one default-labeled row per patch label.
    pub fn seed_feature_table(&self, patch_labels: &[u16]) -> Result<FeatureTable> {
        let mut table = FeatureTable::new();
        for &label in patch_labels {
            table.insert(FeatureRow::with_defaults(
                label,
                &self.config.default_region,
                &self.config.default_type,
            ))?;
        }
        Ok(table)
    }

    /// Runs one propagation pass, mutating `features` in place.
    pub fn apply(
        &self,
        volume: &LabelVolume,
        features: &mut FeatureTable,
        points: &[ReaderPoint],
    ) -> Report {
        let summary = label_propagator::apply_reader_labels(
            volume,
            features,
            points,
            self.config.point_filter.as_ref(),
        );

        if summary.touched_any_row() {
            Report::LabelsApplied(summary)
        } else {
            Report::NoLabelsApplied(summary)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::geometry::VolumeHeader;
    use ndarray::Array3;

    fn one_patch_volume() -> LabelVolume {
        let mut labels = Array3::<u16>::zeros((4, 4, 4));
        labels.slice_mut(ndarray::s![1..3, 1..3, 1..3]).fill(1);
        let header =
            VolumeHeader::axis_aligned([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]).expect("valid header");
        LabelVolume::new(labels, header).expect("valid volume")
    }

    #[test]
    fn seeded_tables_carry_configured_defaults() {
        let pipeline = LabelingPipeline::new(PipelineConfig {
            default_region: "WholeLung".to_string(),
            ..PipelineConfig::default()
        });
        let table = pipeline.seed_feature_table(&[1, 2]).expect("unique labels");

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(2).map(|r| r.chest_region.as_str()), Some("WholeLung"));
        assert_eq!(table.get(2).map(|r| r.chest_type.as_str()), Some(UNDEFINED_TYPE));
    }

    #[test]
    fn apply_reports_whether_rows_changed() {
        let pipeline = LabelingPipeline::new(PipelineConfig::default());
        let volume = one_patch_volume();
        let mut features = pipeline.seed_feature_table(&[1]).expect("seed");

        let miss = pipeline.apply(&volume, &mut features, &[ReaderPoint::new(
            "RightLung",
            "Airway",
            [0.0, 0.0, 0.0],
        )]);
        assert!(matches!(miss, Report::NoLabelsApplied(_)));

        let hit = pipeline.apply(&volume, &mut features, &[ReaderPoint::new(
            "RightLung",
            "Airway",
            [2.0, 2.0, 2.0],
        )]);
        assert!(matches!(hit, Report::LabelsApplied(s) if s.applied == 1));
        assert_eq!(features.get(1).map(|r| r.chest_type.as_str()), Some("Airway"));
    }

    #[test]
    fn configured_filter_is_applied() {
        let pipeline = LabelingPipeline::new(PipelineConfig {
            point_filter: Some(PointFilter::region("LeftLung")),
            ..PipelineConfig::default()
        });
        let volume = one_patch_volume();
        let mut features = pipeline.seed_feature_table(&[1]).expect("seed");

        let report = pipeline.apply(&volume, &mut features, &[ReaderPoint::new(
            "RightLung",
            "Airway",
            [2.0, 2.0, 2.0],
        )]);

        assert!(matches!(report, Report::NoLabelsApplied(s) if s.filtered_out == 1));
    }
}
