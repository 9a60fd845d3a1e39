//! Transcoding of ASCII-armored payloads into six-bit units.

use thiserror::Error;

use crate::bitstream::Bitstream;

/// An error unpacking an armored payload.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("payload byte {index} ({byte:#04x}) is not in the transfer alphabet")]
pub struct InvalidCharacter {
    /// The offending byte.
    pub byte: u8,
    /// Its position within the payload.
    pub index: usize,
}

/// The sixty-four symbol payload character table.
///
/// Two tables are in circulation. [`Alphabet::Folded`] assigns `'f'` the
/// same value as `'e'`, matching the table fielded in the capture gear that
/// produced existing logs; decoding with it reproduces their output byte
/// for byte. [`Alphabet::Strict`] assigns `'f'` the arithmetically expected
/// value. The tables agree on every other symbol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alphabet {
    /// `'f'` is 45, colliding with `'e'`.
    #[default]
    Folded,
    /// `'f'` is 46.
    Strict,
}

impl Alphabet {
    /// Look up the six-bit value of a payload character.
    pub fn value_of(self, byte: u8) -> Option<u8> {
        match byte {
            b'0'..=b'?' => Some(byte - b'0'),
            b'@'..=b'W' => Some(byte - b'@' + 16),
            b'\'' => Some(40),
            b'f' if self == Alphabet::Folded => Some(45),
            b'a'..=b'w' => Some(byte - b'a' + 41),
            _ => None,
        }
    }

    /// Unpack an armored payload into its six-bit units, one per character,
    /// in payload order.
    ///
    /// The first character outside the table fails the whole payload.
    pub fn decode(self, payload: &str) -> Result<Bitstream, InvalidCharacter> {
        let units = payload
            .bytes()
            .enumerate()
            .map(|(index, byte)| self.value_of(byte).ok_or(InvalidCharacter { byte, index }))
            .collect::<Result<Vec<u8>, _>>()?;

        Ok(Bitstream::new(units))
    }
}
