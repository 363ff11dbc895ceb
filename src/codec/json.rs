//! JSON encoding via serde_json.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec::CodecError;

pub(crate) fn encode<T: Serialize>(items: &[T]) -> Result<Vec<u8>, CodecError> {
    Ok(serde_json::to_vec(items)?)
}

pub(crate) fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>, CodecError> {
    Ok(serde_json::from_slice(bytes)?)
}
