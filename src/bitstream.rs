//! The unpacked payload bitstream and bit-field extraction.

use thiserror::Error;

/// An error reading past the end of a bitstream.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("field at bit {offset} runs {length} bits but only {available} are present")]
pub struct OutOfRange {
    /// First bit of the requested field.
    pub offset: usize,
    /// Width of the requested field.
    pub length: usize,
    /// Total bits in the stream.
    pub available: usize,
}

/// An unpacked payload: one six-bit unit per armored character.
///
/// Each unit holds its payload bits in the low six bits of a byte. Bits are
/// numbered from zero at the most significant payload bit of the first
/// unit, running most-significant-first within and across units.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitstream {
    units: Vec<u8>,
}

impl Bitstream {
    /// Wrap a buffer of six-bit units. Only the low six bits of each unit
    /// are ever read.
    pub fn new(units: Vec<u8>) -> Self {
        Self { units }
    }

    /// The number of addressable bits.
    pub fn bit_len(&self) -> usize {
        self.units.len() * 6
    }

    /// Read `length` bits starting at absolute bit `offset` into an
    /// unsigned value, the first bit read landing in the most significant
    /// output position.
    ///
    /// Fails if the field runs past the end of the stream. Widths outside
    /// `1..=32` are a caller bug, not a data condition.
    pub fn extract(&self, offset: usize, length: usize) -> Result<u32, OutOfRange> {
        debug_assert!((1..=32).contains(&length));

        if offset + length > self.bit_len() {
            return Err(OutOfRange { offset, length, available: self.bit_len() });
        }

        let mut value = 0u32;
        for i in 0..length {
            let unit = self.units[(offset + i) / 6];
            let mask = 0b100000 >> ((offset + i) % 6);
            let bit = u32::from(unit & mask != 0);
            value |= bit << (length - 1 - i);
        }

        Ok(value)
    }

    /// The message type field, cheap enough to gate on before paying for a
    /// full record extraction.
    pub fn message_type(&self) -> Result<u32, OutOfRange> {
        self.extract(0, 6)
    }
}
