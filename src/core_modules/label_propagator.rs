// THEORY:
// The `label_propagator` is the engine of the crate. It closes the loop
// between the automatic segmentation (patch labels in a volume) and the human
// ground truth (reader points in physical space): every reader point is
// dropped into the volume, and whichever patch it lands in inherits the
// point's region and type tags.
//
// Key architectural principles & algorithm steps:
// 1.  **Table-Order Iteration**: Points are processed in the order the caller
//     supplies them. When two points land in the same patch with conflicting
//     tags, the later one wins. That makes conflict resolution a property of
//     the input ordering, which the caller controls, rather than hidden
//     internal policy.
// 2.  **Overwrite Both Tags**: A matching point always sets both
//     `chest_region` and `chest_type` on its row. A point carrying an
//     "UndefinedType" tag therefore writes "UndefinedType" — it does not
//     preserve an earlier, more specific value.
// 3.  **Tolerant Resolution**: A point that falls outside the volume, lands
//     on background, or resolves to a patch the feature table does not track
//     is skipped, not an error. Reader tables routinely cover more anatomy
//     than one patch table cares about.
// 4.  **Counted Skips**: Every skip is tallied in the returned
//     `PropagationSummary` and logged, so a pipeline can notice when, say,
//     most of its annotations missed the segmentation — without changing the
//     tolerant semantics for callers that ignore the summary.

use crate::core_modules::feature_table::FeatureTable;
use crate::core_modules::label_volume::{BACKGROUND, LabelVolume};
use crate::core_modules::reader_point::{PointFilter, ReaderPoint};

/// Per-category accounting of one propagation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PropagationSummary {
    /// Points whose tags were written onto a feature row.
    pub applied: usize,
    /// Points rejected by the caller's filter.
    pub filtered_out: usize,
    /// Points falling outside the volume bounds.
    pub out_of_bounds: usize,
    /// Points landing on an unsegmented (background) voxel.
    pub background: usize,
    /// Points landing in a patch the feature table does not track.
    pub unknown_label: usize,
}

impl PropagationSummary {
    /// Total points examined, applied or not.
    pub fn points_seen(&self) -> usize {
        self.applied + self.filtered_out + self.out_of_bounds + self.background + self.unknown_label
    }

    /// Whether the pass mutated any feature row.
    pub fn touched_any_row(&self) -> bool {
        self.applied > 0
    }
}

pub mod label_propagator {
    use super::*;

    /// Propagates reader-point tags onto the feature rows of the patches the
    /// points fall in. Mutates `features` in place; never adds or removes
    /// rows. Rows no point reaches keep their previous values untouched.
    pub fn apply_reader_labels(
        volume: &LabelVolume,
        features: &mut FeatureTable,
        points: &[ReaderPoint],
        filter: Option<&PointFilter>,
    ) -> PropagationSummary {
        let mut summary = PropagationSummary::default();

        for point in points {
            // --- 1. Filtering ---
            // Points outside the caller's selection never reach the volume.
            if let Some(filter) = filter {
                if !filter.matches(point) {
                    summary.filtered_out += 1;
                    continue;
                }
            }

            // --- 2. Spatial Resolution ---
            // Physical point -> voxel index -> patch label.
            let Some(label) = volume.resolve(&point.position) else {
                log::debug!(
                    "reader point at {:?} falls outside the volume, skipping",
                    point.position
                );
                summary.out_of_bounds += 1;
                continue;
            };
            if label == BACKGROUND {
                log::debug!(
                    "reader point at {:?} landed on background, skipping",
                    point.position
                );
                summary.background += 1;
                continue;
            }

            // --- 3. Row Lookup & Tag Write ---
            // Last write wins: a later point in table order overwrites an
            // earlier point that resolved to the same patch.
            match features.get_mut(label) {
                Some(row) => {
                    row.chest_region = point.chest_region.clone();
                    row.chest_type = point.chest_type.clone();
                    summary.applied += 1;
                }
                None => {
                    log::warn!(
                        "reader point at {:?} resolved to untracked patch {}, skipping",
                        point.position,
                        label
                    );
                    summary.unknown_label += 1;
                }
            }
        }

        summary
    }
}
