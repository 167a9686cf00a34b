//! Whole-header binary codec.
//!
//! ```text
//! header := count:u64 (name:(len:u64 bytes) item){count}
//! ```

use std::io::{Read, Write};

use super::Header;
use crate::{
    Result,
    codec::{CodecError, Decoder, Encoder},
    item::Item,
};

impl Header {
    /// Writes the header in binary form, native byte order, entries in stored order.
    pub fn encode<W: Write>(&self, writer: W) -> Result<()> {
        let mut enc = Encoder::new(writer);
        self.encode_with(&mut enc)?;
        enc.flush()
    }

    pub(crate) fn encode_with<W: Write>(&self, enc: &mut Encoder<W>) -> Result<()> {
        enc.write_len(self.len())?;
        for (name, item) in self.iter() {
            enc.write_string(name)?;
            item.encode(enc)?;
        }
        tracing::debug!(items = self.len(), "Encoded header");
        Ok(())
    }

    /// Encodes into a fresh byte vector.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut enc = Encoder::new(Vec::new());
        self.encode_with(&mut enc)?;
        Ok(enc.into_inner())
    }

    /// Reads a header written by [`Header::encode`].
    ///
    /// Set `swap_bytes` when the data was written on a machine of the other byte order. Every
    /// entry goes through [`Header::set`], so a stream naming a member before its directory is
    /// rejected.
    ///
    /// # Errors
    /// A short stream is an I/O failure. An unknown tag, malformed payload, bad name, orphaned
    /// member or duplicated name is corrupt data. No partial header is returned.
    pub fn decode<R: Read>(reader: R, swap_bytes: bool) -> Result<Header> {
        Self::decode_with(&mut Decoder::new(reader, swap_bytes))
    }

    pub(crate) fn decode_with<R: Read>(dec: &mut Decoder<R>) -> Result<Header> {
        let count = dec.read_len()?;
        let mut header = Header::new();
        for _ in 0..count {
            let name = dec.read_string()?;
            let item = Item::decode(dec)?;
            if header.contains(&name) {
                return Err(CodecError::InvalidEntry {
                    name,
                    reason: "duplicate name".to_string(),
                }
                .into());
            }
            if let Err(err) = header.set(&name, item) {
                return Err(CodecError::InvalidEntry {
                    reason: err.to_string(),
                    name,
                }
                .into());
            }
        }
        tracing::debug!(items = count, swap_bytes = dec.swap_bytes(), "Decoded header");
        Ok(header)
    }

    /// Decodes from a byte slice.
    pub fn from_bytes(bytes: &[u8], swap_bytes: bool) -> Result<Header> {
        Self::decode(bytes, swap_bytes)
    }

    /// Steps over a binary header without building it, leaving `reader` just past its end.
    pub fn skip<R: Read>(reader: R, swap_bytes: bool) -> Result<()> {
        Self::skip_with(&mut Decoder::new(reader, swap_bytes))
    }

    pub(crate) fn skip_with<R: Read>(dec: &mut Decoder<R>) -> Result<()> {
        let count = dec.read_len()?;
        for _ in 0..count {
            dec.skip_string()?;
            Item::skip(dec)?;
        }
        tracing::trace!(items = count, "Skipped header");
        Ok(())
    }
}
