//! Header files.
//!
//! A header file is a `u32` magic number followed by one binary header, both in the byte order
//! of the machine that wrote it. The reader compares the magic number with [`MAGIC`] in both byte
//! orders to decide whether the rest of the file must be byte-swapped.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use crate::{
    Result,
    codec::{CodecError, Decoder, Encoder},
    header::Header,
};

/// Identifies a header file and the byte order it was written in.
pub const MAGIC: u32 = 0x4153_4844;

/// Writes the magic number and `header` to `writer`.
pub fn write_to<W: Write>(writer: W, header: &Header) -> Result<()> {
    let mut enc = Encoder::new(writer);
    enc.write_u32(MAGIC)?;
    header.encode_with(&mut enc)?;
    enc.flush()
}

/// Reads the magic number from `reader`, returning whether the data that follows needs
/// byte-swapping.
///
/// # Errors
/// `CorruptData` if the first four bytes are not [`MAGIC`] in either byte order.
pub fn read_magic<R: Read>(reader: R) -> Result<bool> {
    let found = Decoder::new(reader, false).read_u32()?;
    if found == MAGIC {
        Ok(false)
    } else if found == MAGIC.swap_bytes() {
        Ok(true)
    } else {
        Err(CodecError::BadMagic { found }.into())
    }
}

/// Reads a header file from `reader`.
pub fn read_from<R: Read>(mut reader: R) -> Result<Header> {
    let swap_bytes = read_magic(&mut reader)?;
    Header::decode(reader, swap_bytes)
}

/// Steps over a header file, leaving `reader` positioned after it.
pub fn skip<R: Read>(mut reader: R) -> Result<()> {
    let swap_bytes = read_magic(&mut reader)?;
    Header::skip(reader, swap_bytes)
}

/// Writes `header` to the file at `path`, replacing it if it exists.
pub fn write_file(path: impl AsRef<Path>, header: &Header) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_to(BufWriter::new(file), header)?;
    tracing::debug!(path = %path.display(), items = header.len(), "Wrote header file");
    Ok(())
}

/// Reads the header file at `path`.
pub fn read_file(path: impl AsRef<Path>) -> Result<Header> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let header = read_from(BufReader::new(file))?;
    tracing::debug!(path = %path.display(), items = header.len(), "Read header file");
    Ok(header)
}
