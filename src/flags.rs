use crate::constant::ColumnFlags;
use crate::error::{Error, Result};

/// Number of documented column attributes.
pub const NUM_ATTRIBUTES: usize = 12;

/// The flag weight table for one protocol revision.
///
/// Maps each documented attribute of [`FieldFlags`] to its numeric bit weight
/// and names the undocumented high-order weights that newer servers set and
/// this model does not interpret. The table is validated at construction:
/// every documented weight must be a distinct power of two, disjoint from the
/// unknown set, so the per-flag bit test below is equivalent to the greedy
/// decreasing-order decomposition the protocol documentation describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagWeights {
    /// Documented weights, in the declaration order of [`FieldFlags`].
    documented: [u16; NUM_ATTRIBUTES],
    /// Union of the undocumented high-order weights to ignore.
    unknown: u16,
}

impl FlagWeights {
    /// Build a custom weight table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadFlagTable`] if any documented weight is zero, not
    /// a power of two, duplicated, or overlaps the unknown set.
    pub fn new(documented: [u16; NUM_ATTRIBUTES], unknown: u16) -> Result<Self> {
        let mut seen: u16 = 0;
        for weight in documented {
            if !weight.is_power_of_two() {
                return Err(Error::BadFlagTable(format!(
                    "weight 0x{weight:04X} is not a power of two"
                )));
            }
            if seen & weight != 0 {
                return Err(Error::BadFlagTable(format!(
                    "weight 0x{weight:04X} appears twice"
                )));
            }
            if unknown & weight != 0 {
                return Err(Error::BadFlagTable(format!(
                    "weight 0x{weight:04X} overlaps the unknown set 0x{unknown:04X}"
                )));
            }
            seen |= weight;
        }
        Ok(Self { documented, unknown })
    }

    /// The MySQL 4.1+ table: the twelve documented weights plus the four
    /// high-order weights MySQL 5.1+ sets (NO_DEFAULT_VALUE, ON_UPDATE_NOW,
    /// PART_KEY, NUM).
    pub fn protocol_41() -> Self {
        Self {
            documented: [
                ColumnFlags::NOT_NULL_FLAG.bits(),
                ColumnFlags::PRI_KEY_FLAG.bits(),
                ColumnFlags::UNIQUE_KEY_FLAG.bits(),
                ColumnFlags::MULTIPLE_KEY_FLAG.bits(),
                ColumnFlags::BLOB_FLAG.bits(),
                ColumnFlags::UNSIGNED_FLAG.bits(),
                ColumnFlags::ZEROFILL_FLAG.bits(),
                ColumnFlags::BINARY_FLAG.bits(),
                ColumnFlags::ENUM_FLAG.bits(),
                ColumnFlags::AUTO_INCREMENT_FLAG.bits(),
                ColumnFlags::TIMESTAMP_FLAG.bits(),
                ColumnFlags::SET_FLAG.bits(),
            ],
            unknown: (ColumnFlags::NO_DEFAULT_VALUE_FLAG
                | ColumnFlags::ON_UPDATE_NOW_FLAG
                | ColumnFlags::PART_KEY_FLAG
                | ColumnFlags::NUM_FLAG)
                .bits(),
        }
    }

    /// Union of all documented weights.
    pub fn documented_mask(&self) -> u16 {
        self.documented.iter().fold(0, |acc, w| acc | w)
    }
}

impl Default for FlagWeights {
    fn default() -> Self {
        Self::protocol_41()
    }
}

/// Decoded column attribute flags, one boolean per documented attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldFlags {
    pub not_null: bool,
    pub primary_key: bool,
    pub unique_key: bool,
    pub multi_key: bool,
    pub blob: bool,
    pub unsigned: bool,
    pub zerofill: bool,
    pub binary: bool,
    pub enum_: bool,
    pub auto_increment: bool,
    pub timestamp: bool,
    pub set: bool,
}

impl FieldFlags {
    /// Decode a raw flag mask against a weight table.
    ///
    /// Total over all masks: bits in the unknown set and bits matching no
    /// documented weight are dropped without error.
    pub fn decode(mask: u16, weights: &FlagWeights) -> Self {
        let dropped = mask & !weights.documented_mask();
        if dropped != 0 {
            tracing::debug!(mask, dropped, "ignoring unrecognized column flag bits");
        }

        let [
            not_null,
            primary_key,
            unique_key,
            multi_key,
            blob,
            unsigned,
            zerofill,
            binary,
            enum_,
            auto_increment,
            timestamp,
            set,
        ] = weights.documented.map(|weight| mask & weight != 0);

        Self {
            not_null,
            primary_key,
            unique_key,
            multi_key,
            blob,
            unsigned,
            zerofill,
            binary,
            enum_,
            auto_increment,
            timestamp,
            set,
        }
    }
}
