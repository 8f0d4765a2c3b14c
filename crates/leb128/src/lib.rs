//! LEB128 encoding and decoding of 128-bit integers.
//!
//! Each encoded byte carries seven data bits, least significant chunk first,
//! and sets bit 7 when more bytes follow. Unsigned values are chunked
//! directly; signed values are chunked in two's complement and terminate as
//! soon as bit 6 of the final byte reproduces the sign.
//!
//! ```
//! let mut buffer = [0; leb128::MAX_LEN];
//!
//! assert_eq!(leb128::unsigned::encode(624485, &mut buffer).unwrap(), [0xE5, 0x8E, 0x26]);
//!
//! let (info, len) = leb128::unsigned::decode(&[0xE5, 0x8E, 0x26]).unwrap();
//!
//! assert_eq!(info.value(), 624485);
//! assert_eq!(info.size_class(), leb128::SizeClass::Bits32);
//! assert_eq!(len, 3);
//! ```

#![deny(
  clippy::cast_lossless,
  clippy::cast_possible_truncation,
  clippy::cast_possible_wrap,
  clippy::cast_sign_loss
)]

use {
  derive_more::Display,
  deserialize_from_str::DeserializeFromStr,
  scan::Scan,
  serde::{Deserialize, Deserializer, Serialize, Serializer},
  std::{
    fmt::{self, Formatter},
    io::{self, Read, Write},
    str::FromStr,
  },
};

pub use {
  error::Error, signed_info::SignedInfo, size_class::SizeClass, unsigned_info::UnsignedInfo,
};

/// Longest possible encoding, `ceil(128 / 7)` bytes.
pub const MAX_LEN: usize = 19;

const CONTINUATION: u8 = 0b1000_0000;
const PAYLOAD: u8 = 0b0111_1111;
const SIGN: u8 = 0b0100_0000;

mod deserialize_from_str;
mod error;
mod scan;
pub mod signed;
mod signed_info;
mod size_class;
pub mod unsigned;
mod unsigned_info;

type Result<T, E = Error> = std::result::Result<T, E>;

/// Copies `bytes` into the front of `destination`, failing without writing
/// anything if the encoding does not fit.
fn fill(bytes: impl ExactSizeIterator<Item = u8>, destination: &mut [u8]) -> Result<usize> {
  let needed = bytes.len();

  if destination.len() < needed {
    return Err(Error::BufferTooSmall {
      needed,
      capacity: destination.len(),
    });
  }

  for (slot, byte) in destination.iter_mut().zip(bytes) {
    *slot = byte;
  }

  Ok(needed)
}

fn sink(bytes: impl Iterator<Item = u8>, mut writer: impl Write) -> io::Result<usize> {
  let mut written = 0;

  for byte in bytes {
    writer.write_all(&[byte])?;
    written += 1;
  }

  Ok(written)
}
