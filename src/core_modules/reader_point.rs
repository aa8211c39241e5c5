// THEORY:
// A `ReaderPoint` is one row of the ground-truth side of the operation: a
// human reader clicked a physical location in the scan and tagged it with a
// region and a type. Like `FeatureRow`, it is a "dumb" data container; all
// the interesting behavior lives in the propagation pass.
//
// The `PointFilter` is the optional selector callers use to restrict a pass
// to a subset of the annotations, e.g. only "Airway" points when refreshing
// airway labels without disturbing parenchyma rows.

use nalgebra::Point3;

/// One reader annotation: a physical-space location with its categorical tags.
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderPoint {
    /// Anatomical region the reader assigned (e.g. "RightLung").
    pub chest_region: String,
    /// Anatomical type the reader assigned (e.g. "Airway").
    pub chest_type: String,
    /// Location of the annotation in physical space, in millimeters.
    pub position: Point3<f64>,
}

impl ReaderPoint {
    pub fn new(chest_region: &str, chest_type: &str, position: [f64; 3]) -> Self {
        Self {
            chest_region: chest_region.to_string(),
            chest_type: chest_type.to_string(),
            position: Point3::from(position),
        }
    }
}

/// Restricts a propagation pass to points matching the given tags. A `None`
/// field matches any value; the default filter matches every point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointFilter {
    pub chest_region: Option<String>,
    pub chest_type: Option<String>,
}

impl PointFilter {
    /// Matches only points tagged with the given region.
    pub fn region(name: &str) -> Self {
        Self {
            chest_region: Some(name.to_string()),
            chest_type: None,
        }
    }

    /// Matches only points tagged with the given type.
    pub fn chest_type(name: &str) -> Self {
        Self {
            chest_region: None,
            chest_type: Some(name.to_string()),
        }
    }

    pub fn matches(&self, point: &ReaderPoint) -> bool {
        let region_ok = self
            .chest_region
            .as_ref()
            .is_none_or(|r| *r == point.chest_region);
        let type_ok = self
            .chest_type
            .as_ref()
            .is_none_or(|t| *t == point.chest_type);
        region_ok && type_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_matches_everything() {
        let point = ReaderPoint::new("RightLung", "Airway", [1.0, 2.0, 3.0]);
        assert!(PointFilter::default().matches(&point));
    }

    #[test]
    fn region_and_type_filters_are_independent() {
        let point = ReaderPoint::new("RightLung", "Airway", [0.0, 0.0, 0.0]);
        assert!(PointFilter::region("RightLung").matches(&point));
        assert!(!PointFilter::region("LeftLung").matches(&point));
        assert!(PointFilter::chest_type("Airway").matches(&point));
        assert!(!PointFilter::chest_type("Vessel").matches(&point));
    }

    #[test]
    fn combined_filter_requires_both_tags() {
        let point = ReaderPoint::new("RightLung", "Airway", [0.0, 0.0, 0.0]);
        let filter = PointFilter {
            chest_region: Some("RightLung".to_string()),
            chest_type: Some("Vessel".to_string()),
        };
        assert!(!filter.matches(&point));
    }
}
