// THEORY:
// The `projection` module produces the 2D quality-control images reviewers
// actually look at: the whole 3D label map collapsed along one axis, so a
// single glance shows whether the lungs are where the segmentation says they
// are and whether the airway tree has a plausible shape.
//
// Each output pixel counts how many voxels along its ray satisfy a predicate
// (lung region / airway type, decoded from the packed label-map value), then
// the counts are scaled against the densest ray into an 8-bit grayscale
// image. A denser structure projects brighter, which gives the familiar
// radiograph-like appearance reviewers expect.

use ndarray::Array3;

use crate::core_modules::conventions::{ChestType, region_from_value, type_from_value};

/// One of the three volume axes a projection can collapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    X,
    Y,
    Z,
}

impl Direction {
    pub fn to_usize(self) -> usize {
        match self {
            Direction::X => 0,
            Direction::Y => 1,
            Direction::Z => 2,
        }
    }
}

/// An 8-bit grayscale projection image. Pixels are row-major; rows follow
/// the first surviving volume axis, columns the second.
#[derive(Debug, Clone)]
pub struct ProjectionImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Collapses the label map along `axis`, counting voxels whose packed value
/// satisfies `predicate` and scaling counts against the densest ray.
pub fn project_where<F>(labels: &Array3<u16>, axis: Direction, predicate: F) -> ProjectionImage
where
    F: Fn(u16) -> bool,
{
    let dim = labels.dim();
    let dims = [dim.0, dim.1, dim.2];
    let collapsed = axis.to_usize();
    let (row_axis, col_axis) = match collapsed {
        0 => (1, 2),
        1 => (0, 2),
        _ => (0, 1),
    };
    let height = dims[row_axis];
    let width = dims[col_axis];

    let mut counts = vec![0usize; width * height];
    for ((i, j, k), &value) in labels.indexed_iter() {
        if !predicate(value) {
            continue;
        }
        let idx = [i, j, k];
        counts[idx[row_axis] * width + idx[col_axis]] += 1;
    }

    let max = counts.iter().copied().max().unwrap_or(0);
    let pixels = counts
        .into_iter()
        .map(|c| {
            if max == 0 {
                0
            } else {
                ((c * 255) / max) as u8
            }
        })
        .collect();

    ProjectionImage {
        width: width as u32,
        height: height as u32,
        pixels,
    }
}

/// QC projection of all lung-region voxels.
pub fn lung_projection(labels: &Array3<u16>, axis: Direction) -> ProjectionImage {
    project_where(labels, axis, |value| region_from_value(value).is_lung())
}

/// QC projection of all airway-type voxels.
pub fn airway_projection(labels: &Array3<u16>, axis: Direction) -> ProjectionImage {
    project_where(labels, axis, |value| type_from_value(value) == ChestType::Airway)
}
