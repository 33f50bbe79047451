//! Bit packing for payloads.
//!
//! Bytes expand most significant bit first, and byte order is kept as is.
//! On top of that sits the payload frame: a 4 byte big endian length header
//! followed by the ciphertext envelope.

use std::fmt::{self, Display, Formatter, Write as _};
use std::io::Cursor;
use std::ops::Range;
use std::str::FromStr;

use bitstream_io::{BigEndian, BitWrite, BitWriter};
use byteorder::{ReadBytesExt, WriteBytesExt};

use crate::error::StegoError;
use crate::result::Result;

/// Bits taken by the big endian `u32` length header of a payload frame
pub const LENGTH_HEADER_BITS: usize = 32;

/// An ordered sequence of bits, printed and parsed as `0`/`1` text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitString(Vec<bool>);

impl BitString {
    /// expands every byte into 8 bits, most significant bit first
    pub fn from_bytes(data: &[u8]) -> Self {
        data.iter()
            .flat_map(|b| (0..8).rev().map(move |i| (b >> i) & 1 == 1))
            .collect()
    }

    /// packs the bits back into bytes, the length has to be a multiple of 8
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        if self.0.len() % 8 != 0 {
            return Err(StegoError::InvalidBitString(format!(
                "length {} is not a multiple of 8",
                self.0.len()
            )));
        }

        let mut writer = BitWriter::endian(Vec::with_capacity(self.0.len() / 8), BigEndian);
        for bit in self.0.iter() {
            writer.write_bit(*bit)?;
        }

        Ok(writer.into_writer())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, bit: bool) {
        self.0.push(bit);
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    /// copies a sub range, `None` if the range is out of bounds
    pub fn range(&self, range: Range<usize>) -> Option<BitString> {
        self.0.get(range).map(|bits| BitString(bits.to_vec()))
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<bool>> for BitString {
    fn from(bits: Vec<bool>) -> Self {
        Self(bits)
    }
}

impl FromStr for BitString {
    type Err = StegoError;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .enumerate()
            .map(|(i, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(StegoError::InvalidBitString(format!(
                    "unexpected symbol {other:?} at position {i}"
                ))),
            })
            .collect()
    }
}

impl Display for BitString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for bit in self.0.iter() {
            f.write_char(if *bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// `0`/`1` text of `data`, 8 symbols per byte
pub fn bytes_to_bits(data: &[u8]) -> String {
    BitString::from_bytes(data).to_string()
}

/// inverse of [`bytes_to_bits`], rejects anything it could only truncate
pub fn bits_to_bytes(bits: &str) -> Result<Vec<u8>> {
    bits.parse::<BitString>()?.to_bytes()
}

/// Prepends the big endian length header to the envelope and expands all of it into bits.
pub fn frame_payload(envelope: &[u8]) -> Result<BitString> {
    let len = u32::try_from(envelope.len()).map_err(|_| StegoError::PayloadTooLarge {
        required: LENGTH_HEADER_BITS + envelope.len() * 8,
        capacity: LENGTH_HEADER_BITS + u32::MAX as usize * 8,
    })?;

    let mut frame = Vec::with_capacity(envelope.len() + 4);
    frame.write_u32::<byteorder::BigEndian>(len)?;
    frame.extend_from_slice(envelope);

    Ok(BitString::from_bytes(&frame))
}

/// Reads the length header and returns exactly that many bytes that follow it.
///
/// Bits behind the declared envelope are ignored.
pub fn unframe_payload(bits: &BitString) -> Result<Vec<u8>> {
    let header = bits
        .range(0..LENGTH_HEADER_BITS)
        .ok_or(StegoError::NoHiddenData)?
        .to_bytes()?;
    let len = Cursor::new(header).read_u32::<byteorder::BigEndian>()? as usize;

    let end = len
        .checked_mul(8)
        .and_then(|n| n.checked_add(LENGTH_HEADER_BITS))
        .ok_or(StegoError::NoHiddenData)?;

    bits.range(LENGTH_HEADER_BITS..end)
        .ok_or(StegoError::NoHiddenData)?
        .to_bytes()
}
