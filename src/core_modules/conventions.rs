// THEORY:
// The `conventions` module pins down the anatomical vocabulary the rest of
// the crate treats as opaque strings. Chest labelings follow a fixed ontology
// of regions (spatial: lungs, lobes) and types (structural: airway, vessel,
// parenchyma), and label-map volumes pack both into a single voxel value:
// the region code in the low byte, the type code in the high byte.
//
// The feature and point tables deliberately keep plain strings so that the
// propagation pass never rejects a vocabulary it has not seen; these enums
// exist for the modules that must interpret voxel values (QC projections)
// and for callers that want to validate reader input up front.

use strum_macros::{Display, EnumString, FromRepr};

/// Spatial chest regions. A practical subset of the full ontology used by
/// chest label maps: whole lung, the two lungs, and the five lobes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, FromRepr)]
#[repr(u8)]
pub enum ChestRegion {
    UndefinedRegion = 0,
    WholeLung = 1,
    RightLung = 2,
    LeftLung = 3,
    RightSuperiorLobe = 4,
    RightMiddleLobe = 5,
    RightInferiorLobe = 6,
    LeftSuperiorLobe = 7,
    LeftInferiorLobe = 8,
}

/// Structural chest types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, FromRepr)]
#[repr(u8)]
pub enum ChestType {
    UndefinedType = 0,
    NormalParenchyma = 1,
    Airway = 2,
    Vessel = 3,
    Emphysematous = 4,
    GroundGlass = 5,
}

impl ChestRegion {
    /// Whether this region is lung tissue (whole lung, a lung, or a lobe).
    pub fn is_lung(self) -> bool {
        !matches!(self, ChestRegion::UndefinedRegion)
    }
}

/// Extracts the region code from a packed label-map voxel value. Unknown
/// codes decode as `UndefinedRegion` rather than failing, so QC images stay
/// usable on label maps with vocabulary this subset does not cover.
pub fn region_from_value(value: u16) -> ChestRegion {
    ChestRegion::from_repr((value & 0xff) as u8).unwrap_or(ChestRegion::UndefinedRegion)
}

/// Extracts the type code from a packed label-map voxel value.
pub fn type_from_value(value: u16) -> ChestType {
    ChestType::from_repr((value >> 8) as u8).unwrap_or(ChestType::UndefinedType)
}

/// Packs a region and type into a label-map voxel value.
pub fn value_from_pair(region: ChestRegion, chest_type: ChestType) -> u16 {
    ((chest_type as u16) << 8) | region as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn names_match_table_vocabulary() {
        assert_eq!(ChestRegion::RightLung.to_string(), "RightLung");
        assert_eq!(ChestType::UndefinedType.to_string(), "UndefinedType");
        assert_eq!(
            ChestRegion::from_str("LeftLung").expect("known region"),
            ChestRegion::LeftLung
        );
        assert!(ChestRegion::from_str("Pancreas").is_err());
    }

    #[test]
    fn packed_values_split_into_region_and_type() {
        let value = value_from_pair(ChestRegion::LeftLung, ChestType::Airway);
        assert_eq!(region_from_value(value), ChestRegion::LeftLung);
        assert_eq!(type_from_value(value), ChestType::Airway);
    }

    #[test]
    fn unknown_codes_decode_as_undefined() {
        assert_eq!(region_from_value(200), ChestRegion::UndefinedRegion);
        assert_eq!(type_from_value(0x7d00), ChestType::UndefinedType);
    }
}
