use crate::value::Value;

/// One decoded record of a result set.
///
/// Owned by the result set that contains it; read-only once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    pub(crate) fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// The row's values in column ordinal order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Value at the given column ordinal.
    pub fn get(&self, ordinal: usize) -> Option<&Value> {
        self.values.get(ordinal)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
