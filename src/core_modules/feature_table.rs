// THEORY:
// The `feature_table` module holds the per-patch feature rows that the
// propagation pass mutates. Upstream tooling computes one row of features per
// segmented patch; this crate only cares about the two categorical columns it
// owns: `chest_region` and `chest_type`.
//
// Key architectural principles:
// 1.  **Typed Rows, Not Columns**: The table is a list of typed `FeatureRow`
//     records rather than string-keyed columns. What used to be a runtime
//     "missing column" failure is now simply unrepresentable.
// 2.  **Keyed Lookup**: `patch_label` is the unique key. The table keeps a
//     side map from label to row position so the propagation loop gets O(1)
//     lookups instead of scanning rows per point.
// 3.  **Explicit Defaults**: The "UndefinedRegion"/"UndefinedType" placeholder
//     values are a constructor parameter, not a convention every caller has
//     to remember to bake into hand-built rows.
// 4.  **Fixed Row Set**: Rows are created by the caller before propagation and
//     never added or removed by it. The table enforces key uniqueness at
//     insert time and that is the only structural rule it has.

use std::collections::HashMap;

use crate::error::{LabelError, Result};

/// Placeholder region for patches no reader point has touched.
pub const UNDEFINED_REGION: &str = "UndefinedRegion";
/// Placeholder type for patches no reader point has touched.
pub const UNDEFINED_TYPE: &str = "UndefinedType";

/// One row of per-patch features: the patch key and its two categorical
/// anatomical labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRow {
    /// Unique integer identifier of the segmented patch this row describes.
    pub patch_label: u16,
    /// Anatomical region assigned to the patch (e.g. "RightLung").
    pub chest_region: String,
    /// Anatomical type assigned to the patch (e.g. "Airway").
    pub chest_type: String,
}

impl FeatureRow {
    pub fn new(patch_label: u16, chest_region: String, chest_type: String) -> Self {
        Self {
            patch_label,
            chest_region,
            chest_type,
        }
    }

    /// A row carrying explicit placeholder labels.
    pub fn with_defaults(patch_label: u16, default_region: &str, default_type: &str) -> Self {
        Self::new(patch_label, default_region.to_string(), default_type.to_string())
    }
}

/// An ordered table of `FeatureRow`s with unique `patch_label` keys.
#[derive(Debug, Clone, Default)]
pub struct FeatureTable {
    rows: Vec<FeatureRow>,
    index: HashMap<u16, usize>,
}

impl FeatureTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row. Fails with a schema error if the table already holds a
    /// row for the same patch label.
    pub fn insert(&mut self, row: FeatureRow) -> Result<()> {
        if self.index.contains_key(&row.patch_label) {
            return Err(LabelError::Schema(format!(
                "duplicate patch_label {} in feature table",
                row.patch_label
            )));
        }
        self.index.insert(row.patch_label, self.rows.len());
        self.rows.push(row);
        Ok(())
    }

    pub fn get(&self, patch_label: u16) -> Option<&FeatureRow> {
        self.index.get(&patch_label).map(|&i| &self.rows[i])
    }

    pub fn get_mut(&mut self, patch_label: u16) -> Option<&mut FeatureRow> {
        let i = *self.index.get(&patch_label)?;
        Some(&mut self.rows[i])
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in insertion order.
    pub fn rows(&self) -> &[FeatureRow] {
        &self.rows
    }
}
