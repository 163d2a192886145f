use crate::constant::ColumnType;
use crate::flags::{FieldFlags, FlagWeights};

/// Per-column metadata for one result column.
///
/// Immutable after construction. The type code is stored as the raw protocol
/// byte; no range validation is performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    length: u32,
    type_code: u8,
    decimals: u8,
    flags: FieldFlags,
}

impl Field {
    /// Build a field from a raw column descriptor, decoding the flag mask
    /// against the given weight table.
    pub fn new(
        name: String,
        length: u32,
        type_code: u8,
        decimals: u8,
        raw_flags: u16,
        weights: &FlagWeights,
    ) -> Self {
        Self {
            name,
            length,
            type_code,
            decimals,
            flags: FieldFlags::decode(raw_flags, weights),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared maximum byte length of the column.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Raw protocol type code byte.
    pub fn type_code(&self) -> u8 {
        self.type_code
    }

    /// Typed view of the type code, `None` for codes in the protocol gap.
    pub fn column_type(&self) -> Option<ColumnType> {
        ColumnType::from_u8(self.type_code)
    }

    /// Decimal scale for numeric types.
    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn flags(&self) -> &FieldFlags {
        &self.flags
    }
}
