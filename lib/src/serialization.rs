//! Serialization of fitted parameters.
//!
//! Fitted components expose their learned state as plain parameter structs
//! (`Vec<f64>`, category lists, scalars). Anything that is serde-serializable
//! gets a bincode encoding through the blanket impl below, so the trained
//! pipeline can be persisted without coupling to in-memory representations
//! such as `ndarray` arrays or lookup tables.

use std::error::Error;

/// Parameter representations that can be serialized to and from bytes.
pub trait SerializableParams: Sized {
    /// The error type returned during (de)serialization.
    type Error: Error + Send + Sync + 'static;

    /// Serialize the parameters into a byte buffer.
    fn to_bytes(&self) -> Result<Vec<u8>, Self::Error>;

    /// Deserialize the parameters from a byte buffer.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Self::Error>;
}

impl<T> SerializableParams for T
where
    T: serde::Serialize + for<'de> serde::Deserialize<'de>,
{
    type Error = bincode::Error;

    fn to_bytes(&self) -> Result<Vec<u8>, Self::Error> {
        bincode::serialize(self)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, Self::Error> {
        bincode::deserialize(bytes)
    }
}
