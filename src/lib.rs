pub mod constant;
pub mod error;
pub mod field;
pub mod flags;
pub mod resultset;
pub mod row;
pub mod value;

pub use error::{Error, Result};
pub use field::Field;
pub use flags::{FieldFlags, FlagWeights};
pub use resultset::{ResultSet, RowCursor};
pub use row::Row;
pub use value::Value;

#[cfg(test)]
mod resultset_test;
