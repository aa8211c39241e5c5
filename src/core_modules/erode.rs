// THEORY:
// The `erode` module implements the classic label-map cleanup step: peel one
// voxel layer off a foreground value wherever it touches background. Reader
// points are usually placed well inside a structure, but automatic
// segmentations ring their patches with partial-volume voxels; eroding a
// label before resolving points against it keeps borderline clicks from
// binding to the wrong patch.
//
// The filter works slice by slice (fixed third index) with a selectable 4- or
// 8-neighbor mask, matching how chest label maps are reviewed and edited: one
// axial image at a time. Voxels beyond the slice edge never count as
// background, so a patch touching the image border is not eaten from outside.

use ndarray::Array3;

/// In-slice neighborhood used when looking for background contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    /// Edge neighbors only.
    Four,
    /// Edge and corner neighbors.
    Eight,
}

impl Connectivity {
    fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Connectivity::Four => &[(-1, 0), (1, 0), (0, -1), (0, 1)],
            Connectivity::Eight => &[
                (-1, -1),
                (-1, 0),
                (-1, 1),
                (0, -1),
                (0, 1),
                (1, -1),
                (1, 0),
                (1, 1),
            ],
        }
    }
}

/// Configuration for one erosion pass.
#[derive(Debug, Clone, Copy)]
pub struct ErodeConfig {
    /// The label value being eroded.
    pub foreground: u16,
    /// The value eroded voxels are set to, and the value that triggers
    /// erosion when found in the neighborhood.
    pub background: u16,
    pub connectivity: Connectivity,
}

/// Erodes every foreground voxel that has at least one background neighbor
/// within its slice, returning a new array. Voxels carrying other labels are
/// copied through untouched.
pub fn erode(labels: &Array3<u16>, config: &ErodeConfig) -> Array3<u16> {
    let (nx, ny, nz) = labels.dim();
    let mut output = labels.clone();

    for k in 0..nz {
        for i in 0..nx {
            for j in 0..ny {
                if labels[(i, j, k)] != config.foreground {
                    continue;
                }
                let touches_background = config.connectivity.offsets().iter().any(|&(di, dj)| {
                    let ni = i as isize + di;
                    let nj = j as isize + dj;
                    if ni < 0 || nj < 0 || ni >= nx as isize || nj >= ny as isize {
                        return false;
                    }
                    labels[(ni as usize, nj as usize, k)] == config.background
                });
                if touches_background {
                    output[(i, j, k)] = config.background;
                }
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A single slice holding a 3x3 block of label 1 centered in 5x5.
    fn block_volume() -> Array3<u16> {
        let mut labels = Array3::<u16>::zeros((5, 5, 1));
        labels.slice_mut(ndarray::s![1..4, 1..4, ..]).fill(1);
        labels
    }

    #[test]
    fn erosion_peels_the_border_layer() {
        let labels = block_volume();
        let config = ErodeConfig {
            foreground: 1,
            background: 0,
            connectivity: Connectivity::Four,
        };

        let eroded = erode(&labels, &config);

        // Only the center voxel of the 3x3 block survives.
        assert_eq!(eroded[(2, 2, 0)], 1);
        assert_eq!(eroded.iter().filter(|&&v| v == 1).count(), 1);
        // The input is untouched.
        assert_eq!(labels.iter().filter(|&&v| v == 1).count(), 9);
    }

    #[test]
    fn eight_connectivity_erodes_diagonal_contact() {
        // A 2x2 block: under 4-connectivity every voxel touches background
        // already, so use a voxel with only diagonal background contact.
        let mut labels = Array3::<u16>::zeros((3, 3, 1));
        labels.fill(1);
        labels[(0, 0, 0)] = 0;

        let four = erode(
            &labels,
            &ErodeConfig {
                foreground: 1,
                background: 0,
                connectivity: Connectivity::Four,
            },
        );
        let eight = erode(
            &labels,
            &ErodeConfig {
                foreground: 1,
                background: 0,
                connectivity: Connectivity::Eight,
            },
        );

        // (1, 1) touches the hole only diagonally.
        assert_eq!(four[(1, 1, 0)], 1);
        assert_eq!(eight[(1, 1, 0)], 0);
    }

    #[test]
    fn other_labels_are_not_background() {
        // Label 2 voxels adjacent to label 1 do not trigger erosion.
        let mut labels = Array3::<u16>::zeros((5, 5, 1));
        labels.fill(2);
        labels.slice_mut(ndarray::s![1..4, 1..4, ..]).fill(1);
        let config = ErodeConfig {
            foreground: 1,
            background: 0,
            connectivity: Connectivity::Eight,
        };

        let eroded = erode(&labels, &config);
        assert_eq!(eroded.iter().filter(|&&v| v == 1).count(), 9);
    }

    #[test]
    fn image_border_does_not_count_as_background() {
        // A block flush against the slice edge keeps its edge voxels unless
        // a real background voxel touches them.
        let mut labels = Array3::<u16>::zeros((4, 4, 1));
        labels.slice_mut(ndarray::s![0..2, .., ..]).fill(1);
        let config = ErodeConfig {
            foreground: 1,
            background: 0,
            connectivity: Connectivity::Four,
        };

        let eroded = erode(&labels, &config);
        // Row 1 borders the background rows and erodes; row 0 only borders
        // row 1 (still foreground in the input) and the image edge.
        assert!(eroded.slice(ndarray::s![0, .., ..]).iter().all(|&v| v == 1));
        assert!(eroded.slice(ndarray::s![1, .., ..]).iter().all(|&v| v == 0));
    }
}
