//! Length-framed binary encoding.
//!
//! Frame layout: a u32 little-endian payload length, then a bincode-encoded
//! sequence. The length header lets a reader reject truncated or padded
//! input before handing bytes to the payload decoder.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec::CodecError;

const HEADER_LEN: usize = 4;

pub(crate) fn encode<T: Serialize>(items: &[T]) -> Result<Vec<u8>, CodecError> {
    let payload = bincode::serialize(items)?;
    let len = u32::try_from(payload.len()).map_err(|_| CodecError::Frame("payload too large"))?;

    let mut out = Vec::with_capacity(HEADER_LEN + payload.len());
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(&payload);
    Ok(out)
}

pub(crate) fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>, CodecError> {
    if bytes.len() < HEADER_LEN {
        return Err(CodecError::Frame("missing length header"));
    }

    let mut header = [0u8; HEADER_LEN];
    header.copy_from_slice(&bytes[..HEADER_LEN]);
    let len = u32::from_le_bytes(header) as usize;

    let payload = &bytes[HEADER_LEN..];
    if payload.len() != len {
        return Err(CodecError::Frame("length header does not match payload"));
    }

    Ok(bincode::deserialize(payload)?)
}
