use serde::{Deserialize, Serialize};

/// An ordered run of values, one per active entity slot.
pub type Batch<T> = Vec<T>;

/// One unit of input for a [`StreamProcessor`](crate::StreamProcessor): the
/// entity keys present in this packet and one value per key, in the same order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Packet<T> {
    pub ids: Vec<String>,
    pub values: Batch<T>,
}

impl<T> Packet<T> {
    pub fn new<I, S>(ids: I, values: Batch<T>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrowed view of the ids in the shape the operator tree expects.
    pub fn keys(&self) -> Vec<&str> {
        self.ids.iter().map(String::as_str).collect()
    }
}
